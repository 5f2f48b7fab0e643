use crate::dispatch::StoreDispatch;
use crate::entity::ApiClient;
use crate::state::EntityState;
use crate::workflow::DeleteWorkflow;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaBan, FaTrash};
use tracing::warn;

#[component]
pub fn BalanceSheetItemTypeDeleteDialog(id: String) -> Element {
    let store = use_context::<Signal<EntityState>>();
    let client = use_context::<ApiClient>();
    let nav = navigator();

    let mut workflow =
        use_signal(move || DeleteWorkflow::new(store, StoreDispatch::new(store, client), nav));

    // Registered ahead of activation: a success flag left over from an earlier
    // delete is observed while the modal is not loaded yet. After activation the
    // FetchEntityPending reduction clears the flag before it is observed again.
    let update_success = use_memo(move || store.read().update_success);
    use_effect(move || {
        let success = update_success();
        workflow.write().observe(success);
    });

    // Re-runs when the route id changes; the workflow starts over for the new id.
    use_effect(use_reactive((&id,), move |(id,)| {
        workflow.write().activate(&id);
    }));

    let view = workflow.read().view();
    let updating = store.read().updating;

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| workflow.read().cancel(),
            div {
                class: if view.is_deleting { "delete-confirm-dialog deleting" } else { "delete-confirm-dialog" },
                "data-cy": "balanceSheetItemTypeDeleteDialogHeading",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "dialog-header",
                    h3 { "{view.title}" }
                    button {
                        class: "dialog-close",
                        onclick: move |_| workflow.read().cancel(),
                        "×"
                    }
                }
                p {
                    id: "bookKeeperErpApp.balanceSheetItemType.delete.question",
                    "{view.question}"
                }
                if let Some(error) = view.fetch_error.clone() {
                    p { class: "dialog-error", "{error}" }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        onclick: move |_| workflow.read().cancel(),
                        Icon { width: 14, height: 14, icon: FaBan }
                        " Cancel"
                    }
                    button {
                        id: "jhi-confirm-delete-balanceSheetItemType",
                        class: "primary danger",
                        "data-cy": "entityConfirmDeleteButton",
                        disabled: !view.can_delete,
                        onclick: move |_| {
                            if let Err(e) = workflow.write().confirm_delete() {
                                warn!("Delete not dispatched: {}", e);
                            }
                        },
                        Icon { width: 14, height: 14, icon: FaTrash }
                        if updating { " Deleting..." } else { " Delete" }
                    }
                }
            }
        }
    }
}
