mod delete_confirm_dialog;
mod entity_list;
mod header;
mod status_bar;

pub use delete_confirm_dialog::BalanceSheetItemTypeDeleteDialog;
pub use entity_list::BalanceSheetItemTypeList;
pub use header::Header;
pub use status_bar::StatusBar;
