//! UI components for Quotebox
//!
//! Thin Dioxus views over [`crate::session::QuoteSession`]. Components read a
//! snapshot and forward user actions; they keep no quote state of their own.

pub mod header;
pub mod liked_list;
pub mod quote_card;

use crate::app::AppState;
use dioxus::prelude::*;
use header::Header;
use liked_list::LikedList;
use quote_card::QuoteCard;

/// Stylesheet injected into the desktop window head
pub const STYLE: &str = r#"
.app { min-height: 100vh; margin: 0; padding: 24px; font-family: system-ui, sans-serif; transition: background 0.2s, color 0.2s; }
.theme-dark { --bg: #14161b; --card: #1e2129; --text: #e8e8ea; --muted: #9a9ca5; --accent: #f5a524; background: var(--bg); color: var(--text); }
.theme-light { --bg: #f4f4f6; --card: #ffffff; --text: #1b1c20; --muted: #5f6170; --accent: #c76a00; background: var(--bg); color: var(--text); }
.card { background: var(--card); border-radius: 16px; padding: 24px; margin: 16px auto; max-width: 640px; }
.character { font-size: 56px; text-align: center; }
.pop-a { animation: pop-a 0.45s ease-out; }
.pop-b { animation: pop-b 0.45s ease-out; }
@keyframes pop-a { from { transform: scale(0.6); opacity: 0; } to { transform: scale(1); opacity: 1; } }
@keyframes pop-b { from { transform: scale(0.6); opacity: 0; } to { transform: scale(1); opacity: 1; } }
.quote { font-size: 1.3rem; line-height: 1.5; }
.author { color: var(--muted); margin-top: 8px; }
.actions { display: flex; gap: 8px; margin-top: 16px; }
button { border: 1px solid var(--muted); background: transparent; color: var(--text); border-radius: 8px; padding: 6px 12px; cursor: pointer; }
button:disabled { opacity: 0.5; cursor: default; }
button.primary { border-color: var(--accent); color: var(--accent); }
.error { color: #e5484d; }
.liked-item { display: flex; justify-content: space-between; gap: 12px; padding: 8px 0; border-bottom: 1px solid var(--muted); }
.header { display: flex; justify-content: space-between; align-items: center; max-width: 640px; margin: 0 auto; }
"#;

#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let snapshot = app_state.session.read().snapshot();

    rsx! {
        div {
            class: "app theme-{snapshot.theme}",

            Header { theme: snapshot.theme }

            QuoteCard {
                quote: snapshot.current.clone(),
                character: snapshot.character,
                animation: snapshot.animation,
                loading: snapshot.loading,
                error: snapshot.error.clone(),
                liked: snapshot.current_is_liked,
            }

            LikedList { quotes: snapshot.liked.clone() }
        }
    }
}
