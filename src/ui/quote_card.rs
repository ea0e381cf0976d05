//! The current quote, its character and the quote actions

use crate::app::{fetch_quote, AppState};
use crate::types::character::Character;
use crate::types::quote::Quote;
use dioxus::prelude::*;

#[component]
pub fn QuoteCard(
    #[props(!optional)] quote: Option<Quote>,
    #[props(!optional)] character: Option<Character>,
    animation: u64,
    loading: bool,
    #[props(!optional)] error: Option<String>,
    liked: bool,
) -> Element {
    let app_state = use_context::<AppState>();
    let mut session = app_state.session;
    let mut copied = use_signal(|| false);
    let clipboard = app_state.clipboard.clone();

    // Alternating the class restarts the CSS animation for every new quote
    let pop_class = if animation % 2 == 0 { "pop-a" } else { "pop-b" };
    let has_quote = quote.is_some();

    let handle_new = {
        let source = app_state.source.clone();
        move |_: MouseEvent| {
            copied.set(false);
            fetch_quote(session, source.clone());
        }
    };

    let handle_retry = {
        let source = app_state.source.clone();
        move |_: MouseEvent| fetch_quote(session, source.clone())
    };

    rsx! {
        div {
            class: "card",

            if let Some(character) = character {
                div {
                    class: "character {pop_class}",
                    title: "{character.name}",
                    "{character.glyph}"
                }
            }

            if let Some(quote) = &quote {
                div {
                    class: pop_class,
                    p { class: "quote", "“{quote.content}”" }
                    if !quote.author.trim().is_empty() {
                        p { class: "author", "— {quote.author}" }
                    }
                }
            } else if loading {
                p { class: "author", "Finding a quote…" }
            }

            if let Some(message) = error {
                div {
                    class: "error",
                    p { "{message}" }
                    button { onclick: handle_retry, disabled: loading, "Retry" }
                }
            }

            div {
                class: "actions",
                button {
                    class: "primary",
                    disabled: loading,
                    onclick: handle_new,
                    if loading { "Loading…" } else { "New quote" }
                }
                button {
                    disabled: !has_quote,
                    onclick: move |_| {
                        session.write().toggle_like_current();
                    },
                    if liked { "♥ Liked" } else { "♡ Like" }
                }
                button {
                    disabled: !has_quote,
                    onclick: move |_| {
                        let done = session.read().copy_current(clipboard.as_ref());
                        copied.set(done);
                    },
                    if copied() { "Copied" } else { "Copy" }
                }
            }
        }
    }
}
