//! Saved quotes

use crate::app::AppState;
use crate::types::quote::Quote;
use dioxus::prelude::*;

#[component]
pub fn LikedList(quotes: Vec<Quote>) -> Element {
    let app_state = use_context::<AppState>();
    let mut session = app_state.session;

    rsx! {
        div {
            class: "card",

            div {
                class: "header",
                h3 { "Liked quotes ({quotes.len()})" }
                button {
                    disabled: quotes.is_empty(),
                    onclick: move |_| session.write().clear_liked(),
                    "Clear all"
                }
            }

            if quotes.is_empty() {
                p { class: "author", "Nothing saved yet. Like a quote to keep it here." }
            }

            for quote in quotes.iter() {
                LikedItem { key: "{quote.id}", quote: quote.clone() }
            }
        }
    }
}

#[component]
fn LikedItem(quote: Quote) -> Element {
    let app_state = use_context::<AppState>();
    let mut session = app_state.session;
    let id = quote.id.clone();

    rsx! {
        div {
            class: "liked-item",
            div {
                p { class: "quote", "“{quote.content}”" }
                if !quote.author.trim().is_empty() {
                    p { class: "author", "— {quote.author}" }
                }
            }
            button {
                title: "Remove from liked quotes",
                onclick: move |_| session.write().remove_liked(&id),
                "✕"
            }
        }
    }
}
