//! Root Dioxus application component
//!
//! Builds the session and quote source once and shares them with the view
//! through context.

use crate::clipboard::SystemClipboard;
use crate::remote::{HttpQuoteSource, QuoteSource, UnavailableSource};
use crate::session::QuoteSession;
use crate::storage::settings::{load_config, resolve_data_dir};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub session: Signal<QuoteSession>,
    pub source: Arc<dyn QuoteSource>,
    /// Opened on first copy and kept so the copied text stays available
    pub clipboard: Arc<SystemClipboard>,
}

impl AppState {
    pub fn new() -> Self {
        let config = load_config();

        let store: Arc<dyn KeyValueStore> = match resolve_data_dir(&config) {
            Ok(dir) => {
                tracing::info!("Using data directory {}", dir.display());
                Arc::new(FileStore::new(dir))
            }
            Err(e) => {
                tracing::warn!("{}; liked quotes will not survive a restart", e);
                Arc::new(MemoryStore::new())
            }
        };

        let source: Arc<dyn QuoteSource> = match HttpQuoteSource::new(&config) {
            Ok(source) => {
                tracing::info!("Quote source: {}", source.url());
                Arc::new(source)
            }
            Err(e) => {
                tracing::error!("{}", e);
                Arc::new(UnavailableSource(e))
            }
        };

        tracing::info!("AppState initialized");
        Self {
            session: Signal::new(QuoteSession::new(store)),
            source,
            clipboard: Arc::new(SystemClipboard::new()),
        }
    }
}

/// Start a fetch. The session enters `Loading` right away and the result is
/// applied when the request finishes, unless a newer fetch started since.
pub fn fetch_quote(mut session: Signal<QuoteSession>, source: Arc<dyn QuoteSource>) {
    let ticket = session.write().begin_fetch();
    spawn(async move {
        let result = source.fetch_random_quote().await;
        session.write().complete_fetch(ticket, result);
    });
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    {
        let session = app_state.session;
        let source = app_state.source.clone();
        use_effect(move || fetch_quote(session, source.clone()));
    }

    rsx! {
        Layout {}
    }
}
