use crate::app::AppState;
use crate::types::theme::Theme;
use dioxus::prelude::*;

#[component]
pub fn Header(theme: Theme) -> Element {
    let app_state = use_context::<AppState>();
    let mut session = app_state.session;

    let label = match theme {
        Theme::Dark => "☀ Light mode",
        Theme::Light => "☾ Dark mode",
    };

    rsx! {
        div {
            class: "header",
            h1 { "Quotebox" }
            button {
                title: "Switch between light and dark theme",
                onclick: move |_| {
                    let theme = session.write().toggle_theme();
                    tracing::debug!("Theme switched to {}", theme);
                },
                "{label}"
            }
        }
    }
}
