use crate::components::*;
use crate::state::EntityState;
use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::BalanceSheetItemTypeList {})]
        #[route("/balance-sheet-item-type")]
        BalanceSheetItemTypeList {},
        #[route("/balance-sheet-item-type/:id/delete")]
        BalanceSheetItemTypeDeleteDialog { id: String },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(EntityState::new()));

    rsx! {
        style { {include_str!("../assets/main.css")} }
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "app-container",
            Header {}
            div { class: "content",
                Outlet::<Route> {}
            }
            StatusBar {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "section",
            div { class: "section-title", "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::BalanceSheetItemTypeList {}, "Back to Balance Sheet Item Types" }
        }
    }
}
