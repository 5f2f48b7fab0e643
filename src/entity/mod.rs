pub mod api;
pub mod config;
pub mod types;

pub use api::ApiClient;
pub use config::{get_config_path, load_or_create_config};
pub use types::{
    AppConfig, BalanceSheetItemType, EntityId, EntityPage, EntitySnapshot, PageRequest,
};
