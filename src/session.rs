//! Quote session
//!
//! Owns everything the main view renders: the fetch state machine, the
//! current quote and character, the liked list and the theme. The view
//! reads a [`ViewSnapshot`] and calls the action methods.
//!
//! Fetches are split into [`QuoteSession::begin_fetch`] and
//! [`QuoteSession::complete_fetch`] so the UI can release its borrow while
//! the request is in flight. Each fetch gets a ticket and only the most
//! recently started one may update the session.

use crate::clipboard::Clipboard;
use crate::remote::FetchError;
use crate::storage::liked::LikedQuotes;
use crate::storage::theme::ThemeHolder;
use crate::storage::KeyValueStore;
use crate::types::character::{self, Character};
use crate::types::quote::Quote;
use crate::types::theme::Theme;
use std::collections::HashSet;
use std::sync::Arc;

/// Where the current fetch cycle stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Identifies one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Everything the view needs for one render
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub current: Option<Quote>,
    pub loading: bool,
    pub error: Option<String>,
    pub liked: Vec<Quote>,
    pub liked_ids: HashSet<String>,
    pub current_is_liked: bool,
    pub theme: Theme,
    pub character: Option<Character>,
    /// Bumped each time a new quote lands; the card restarts its entrance
    /// animation when this changes
    pub animation: u64,
}

pub struct QuoteSession {
    state: FetchState,
    current: Option<Quote>,
    character: Option<Character>,
    animation: u64,
    latest_ticket: u64,
    liked: LikedQuotes,
    theme: ThemeHolder,
}

impl QuoteSession {
    /// Restore liked quotes and theme from `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: FetchState::Idle,
            current: None,
            character: None,
            animation: 0,
            latest_ticket: 0,
            liked: LikedQuotes::load(store.clone()),
            theme: ThemeHolder::load(store),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    pub fn liked(&self) -> &LikedQuotes {
        &self.liked
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// Enter `Loading` and hand out the ticket for this fetch
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.latest_ticket)
    }

    /// Apply a fetch result. Results for anything but the latest ticket are
    /// dropped. Returns whether the result was applied.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Quote, FetchError>) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                "Discarding stale fetch result (ticket {}, latest {})",
                ticket.0,
                self.latest_ticket
            );
            return false;
        }

        match result {
            Ok(quote) => {
                tracing::info!("New quote {} by {:?}", quote.id, quote.author);
                self.current = Some(quote);
                self.character = Some(character::pick(self.character));
                self.animation += 1;
                self.state = FetchState::Ready;
            }
            Err(e) => {
                tracing::error!("Failed to fetch quote: {}", e);
                self.state = FetchState::Error(e.to_string());
            }
        }
        true
    }

    /// Like or unlike the current quote. Returns whether it is liked now.
    pub fn toggle_like_current(&mut self) -> bool {
        self.liked.toggle_like(self.current.as_ref())
    }

    pub fn remove_liked(&mut self, id: &str) {
        self.liked.remove(id);
    }

    pub fn clear_liked(&mut self) {
        self.liked.clear();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    /// Copy the current quote. Returns whether anything was copied.
    pub fn copy_current(&self, clipboard: &dyn Clipboard) -> bool {
        let Some(quote) = &self.current else {
            return false;
        };
        match clipboard.copy_text(&quote.display_text()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let error = match &self.state {
            FetchState::Error(message) => Some(message.clone()),
            _ => None,
        };
        ViewSnapshot {
            current: self.current.clone(),
            loading: self.is_loading(),
            error,
            liked: self.liked.quotes().to_vec(),
            liked_ids: self.liked.liked_ids().clone(),
            current_is_liked: self
                .current
                .as_ref()
                .map(|q| self.liked.is_liked(&q.id))
                .unwrap_or(false),
            theme: self.theme.theme(),
            character: self.character,
            animation: self.animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::remote::QuoteSource;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Hands out scripted results in order
    struct ScriptedSource {
        results: Mutex<VecDeque<Result<Quote, FetchError>>>,
    }

    impl ScriptedSource {
        fn new(results: Vec<Result<Quote, FetchError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
            }
        }
    }

    #[async_trait]
    impl QuoteSource for ScriptedSource {
        async fn fetch_random_quote(&self) -> Result<Quote, FetchError> {
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(FetchError::Transport("script exhausted".to_string())))
        }
    }

    struct RecordingClipboard {
        copied: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn session() -> QuoteSession {
        QuoteSession::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        let snapshot = session.snapshot();
        assert_eq!(session.state(), &FetchState::Idle);
        assert!(snapshot.current.is_none());
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
        assert!(snapshot.liked.is_empty());
        assert_eq!(snapshot.theme, Theme::Dark);
        assert_eq!(snapshot.animation, 0);
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut session = session();
        let source = ScriptedSource::new(vec![Ok(Quote::new("1", "A", "X"))]);

        let ticket = session.begin_fetch();
        assert!(session.snapshot().loading);
        let result = source.fetch_random_quote().await;
        assert!(session.complete_fetch(ticket, result));

        let snapshot = session.snapshot();
        assert_eq!(session.state(), &FetchState::Ready);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.current, Some(Quote::new("1", "A", "X")));
        assert!(snapshot.character.is_some());
        assert_eq!(snapshot.animation, 1);
    }

    #[tokio::test]
    async fn test_error_then_retry() {
        let mut session = session();
        let source = ScriptedSource::new(vec![
            Err(FetchError::Status(502)),
            Err(FetchError::Transport("offline".to_string())),
            Ok(Quote::new("5", "E", "V")),
        ]);

        let ticket = session.begin_fetch();
        session.complete_fetch(ticket, source.fetch_random_quote().await);
        let snapshot = session.snapshot();
        let message = snapshot.error.expect("error message");
        assert!(!message.is_empty());
        assert!(!snapshot.loading);

        // Retry fails again
        let ticket = session.begin_fetch();
        assert_eq!(session.state(), &FetchState::Loading);
        assert!(session.snapshot().error.is_none());
        session.complete_fetch(ticket, source.fetch_random_quote().await);
        assert!(matches!(session.state(), FetchState::Error(_)));

        // Retry succeeds
        let ticket = session.begin_fetch();
        assert_eq!(session.state(), &FetchState::Loading);
        session.complete_fetch(ticket, source.fetch_random_quote().await);
        assert_eq!(session.state(), &FetchState::Ready);
        assert_eq!(session.current().map(|q| q.id.as_str()), Some("5"));
    }

    #[tokio::test]
    async fn test_error_keeps_previous_quote() {
        let mut session = session();
        let source = ScriptedSource::new(vec![
            Ok(Quote::new("1", "A", "X")),
            Err(FetchError::EmptyQuote),
        ]);
        for _ in 0..2 {
            let ticket = session.begin_fetch();
            session.complete_fetch(ticket, source.fetch_random_quote().await);
        }

        assert!(matches!(session.state(), FetchState::Error(_)));
        assert_eq!(session.current().map(|q| q.id.as_str()), Some("1"));
        assert_eq!(session.snapshot().animation, 1);
    }

    #[tokio::test]
    async fn test_overlapping_fetches_latest_start_wins() {
        let mut session = session();
        let source = ScriptedSource::new(vec![
            Ok(Quote::new("old", "slow", "")),
            Ok(Quote::new("new", "fast", "")),
        ]);

        let first = session.begin_fetch();
        let second = session.begin_fetch();
        let (first_result, second_result) =
            tokio::join!(source.fetch_random_quote(), source.fetch_random_quote());

        assert!(session.complete_fetch(second, second_result));
        assert!(!session.complete_fetch(first, first_result));
        assert_eq!(session.current().map(|q| q.id.as_str()), Some("new"));
        assert_eq!(session.snapshot().animation, 1);
    }

    #[test]
    fn test_stale_result_discarded() {
        let mut session = session();
        let first = session.begin_fetch();
        let second = session.begin_fetch();

        assert!(session.complete_fetch(second, Ok(Quote::new("2", "B", "Y"))));
        assert!(!session.complete_fetch(first, Ok(Quote::new("1", "A", "X"))));

        assert_eq!(session.current().map(|q| q.id.as_str()), Some("2"));
        assert_eq!(session.state(), &FetchState::Ready);
    }

    #[test]
    fn test_stale_error_does_not_clobber_loading() {
        let mut session = session();
        let first = session.begin_fetch();
        let _second = session.begin_fetch();

        assert!(!session.complete_fetch(first, Err(FetchError::Status(500))));
        assert_eq!(session.state(), &FetchState::Loading);
    }

    #[test]
    fn test_like_current() {
        let mut session = session();
        assert!(!session.toggle_like_current());

        let ticket = session.begin_fetch();
        session.complete_fetch(ticket, Ok(Quote::new("9", "Q", "W")));

        assert!(session.toggle_like_current());
        let snapshot = session.snapshot();
        assert!(snapshot.current_is_liked);
        assert!(snapshot.liked_ids.contains("9"));
        assert_eq!(snapshot.liked, vec![Quote::new("9", "Q", "W")]);

        assert!(!session.toggle_like_current());
        assert!(!session.snapshot().current_is_liked);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut session = session();
        for id in ["1", "2", "3"] {
            let ticket = session.begin_fetch();
            session.complete_fetch(ticket, Ok(Quote::new(id, "c", "a")));
            session.toggle_like_current();
        }
        session.remove_liked("2");
        let ids: Vec<String> = session.liked().quotes().iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids, vec!["3", "1"]);

        session.clear_liked();
        assert!(session.liked().is_empty());
        assert!(!session.snapshot().current_is_liked);
    }

    #[test]
    fn test_state_survives_restart() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        {
            let mut session = QuoteSession::new(store.clone());
            let ticket = session.begin_fetch();
            session.complete_fetch(ticket, Ok(Quote::new("1", "A", "X")));
            session.toggle_like_current();
            assert_eq!(session.toggle_theme(), Theme::Light);
        }

        let restored = QuoteSession::new(store);
        assert_eq!(restored.theme(), Theme::Light);
        assert!(restored.liked().is_liked("1"));
        assert!(restored.current().is_none());
    }

    #[test]
    fn test_copy_current() {
        let clipboard = RecordingClipboard {
            copied: Mutex::new(Vec::new()),
            fail: false,
        };
        let mut session = session();
        assert!(!session.copy_current(&clipboard));

        let ticket = session.begin_fetch();
        session.complete_fetch(ticket, Ok(Quote::new("1", "Be brave", "Me")));
        assert!(session.copy_current(&clipboard));
        assert_eq!(
            clipboard.copied.lock().unwrap().as_slice(),
            &["\"Be brave\" — Me".to_string()]
        );

        let broken = RecordingClipboard {
            copied: Mutex::new(Vec::new()),
            fail: true,
        };
        assert!(!session.copy_current(&broken));
    }
}
