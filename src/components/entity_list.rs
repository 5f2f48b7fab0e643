use crate::app::Route;
use crate::dispatch::StoreDispatch;
use crate::entity::{ApiClient, AppConfig, PageRequest};
use crate::state::EntityState;
use dioxus::prelude::*;

#[component]
pub fn BalanceSheetItemTypeList() -> Element {
    let store = use_context::<Signal<EntityState>>();
    let client = use_context::<ApiClient>();
    let page_size = use_context::<AppConfig>().page_size();
    let mut page = use_signal(|| 0u32);

    let dispatch = StoreDispatch::new(store, client);
    use_effect(move || {
        dispatch.get_entities(PageRequest::new(page(), page_size));
    });

    let (entities, total_items, loading, error_message) = {
        let state = store.read();
        (
            state.entities.clone(),
            state.total_items,
            state.loading,
            state.error_message.clone(),
        )
    };

    let current_page = page();
    let page_number = current_page + 1;
    let page_count = total_items.div_ceil(page_size as u64).max(1);
    let has_previous = current_page > 0;
    let has_next = (current_page as u64 + 1) < page_count;

    rsx! {
        div { class: "section",
            div { class: "section-title", "Balance Sheet Item Types" }

            if let Some(error) = error_message {
                div { class: "message error", "{error}" }
            }

            if entities.is_empty() && !loading {
                div { class: "empty-list", "No Balance Sheet Item Types found" }
            } else {
                table { class: "entity-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Item Sequence" }
                            th { "Item Number" }
                            th { "Short Description" }
                            th { "Transaction Account" }
                            th { "Parent Item" }
                            th {}
                        }
                    }
                    tbody {
                        for entity in entities {
                            tr { key: "{entity.id:?}",
                                td { {entity.id.map(|id| id.to_string()).unwrap_or_default()} }
                                td { "{entity.item_sequence}" }
                                td { "{entity.item_number}" }
                                td { {entity.short_description.clone().unwrap_or_default()} }
                                td { {entity.transaction_account_name()} }
                                td { {entity.parent_item_number()} }
                                td {
                                    if let Some(id) = entity.id {
                                        Link {
                                            class: "danger-link",
                                            to: Route::BalanceSheetItemTypeDeleteDialog { id: id.to_string() },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "pagination",
                button {
                    class: "secondary",
                    disabled: loading || !has_previous,
                    onclick: move |_| page -= 1,
                    "Previous"
                }
                span { class: "page-info", "Page {page_number} of {page_count} ({total_items} items)" }
                button {
                    class: "secondary",
                    disabled: loading || !has_next,
                    onclick: move |_| page += 1,
                    "Next"
                }
            }
        }
    }
}
