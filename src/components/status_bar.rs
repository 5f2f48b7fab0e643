use crate::state::EntityState;
use dioxus::prelude::*;

#[component]
pub fn StatusBar() -> Element {
    let mut store = use_context::<Signal<EntityState>>();
    let message = store.read().message.clone();
    let busy = store.read().loading || store.read().updating;

    rsx! {
        div { class: "status-bar",
            if let Some(msg) = message {
                div {
                    class: if msg.is_error { "message error" } else { "message success" },
                    span { "{msg.text}" }
                    button {
                        class: "message-dismiss",
                        onclick: move |_| store.write().clear_message(),
                        "×"
                    }
                }
            }

            if busy {
                div { class: "status-section",
                    div { class: "status-label", "Working..." }
                }
            }
        }
    }
}
