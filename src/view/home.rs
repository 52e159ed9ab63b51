//! Home screen model
//!
//! Owns one mount of the book list: the in-flight catalog load, the page
//! window over whatever it produced, and the collaborators the screen talks
//! to. Hosts draw from [`HomeScreen::snapshot`] and feed user intents back
//! through the `on_*` methods.

use super::counter::TapCounter;
use super::types::{greeting, HomeSnapshot, ListPlaceholder, END_REACHED_THRESHOLD};
use crate::catalog::{CatalogLoader, CollectionState, LoadOutcome, LoadPhase};
use crate::error::{Error, Result};
use crate::pagination::PageWindow;
use crate::session::{Route, SessionHandle};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

/// One mounted home screen
///
/// Dropping the screen cancels a load that has not resolved yet; the
/// abandoned fetch publishes nothing and raises no alert.
pub struct HomeScreen {
    session: Arc<dyn SessionHandle>,
    window: PageWindow,
    collection: watch::Receiver<CollectionState>,
    taps: TapCounter,
    cancel: CancellationToken,
    task: JoinHandle<LoadOutcome>,
    _unmount: DropGuard,
}

impl HomeScreen {
    /// Mount the screen and start the catalog load
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(
        loader: CatalogLoader,
        session: Arc<dyn SessionHandle>,
        taps: TapCounter,
        page_size: usize,
    ) -> Result<Self> {
        let window = PageWindow::new(page_size)?;
        let (publisher, collection) = watch::channel(CollectionState::loading());
        let cancel = CancellationToken::new();

        let load_cancel = cancel.clone();
        let task = tokio::spawn(async move { loader.load_until(&load_cancel, &publisher).await });

        debug!(user = %session.username(), page_size, "Home screen mounted");

        Ok(Self {
            session,
            window,
            collection,
            taps,
            _unmount: cancel.clone().drop_guard(),
            cancel,
            task,
        })
    }

    /// Wait until the load has resolved
    ///
    /// Fails with [`Error::Cancelled`] if the load was abandoned first.
    pub async fn loaded(&mut self) -> Result<LoadPhase> {
        let state = self
            .collection
            .wait_for(CollectionState::is_resolved)
            .await
            .map_err(|_| Error::Cancelled)?;
        Ok(state.phase)
    }

    /// Current render model
    pub fn snapshot(&self) -> HomeSnapshot {
        let state = self.collection.borrow();
        let total_items = state.items.len();
        let visible_items = self.window.current_slice(&state.items).to_vec();

        let placeholder = if state.is_loading() {
            ListPlaceholder::Loading
        } else if visible_items.is_empty() {
            ListPlaceholder::NoResults
        } else {
            ListPlaceholder::Hidden
        };

        HomeSnapshot {
            greeting: greeting(self.session.username()),
            visible_items,
            is_loading: state.is_loading(),
            has_errored: state.has_errored(),
            page_index: self.window.page_index(),
            total_pages: self.window.total_pages(total_items),
            can_go_previous: self.window.has_previous(),
            can_go_next: self.window.has_next(total_items),
            placeholder,
            tap_count: self.taps.get(),
        }
    }

    /// Current load phase
    pub fn phase(&self) -> LoadPhase {
        self.collection.borrow().phase
    }

    /// Current page window
    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Next button
    pub fn on_next(&mut self) -> bool {
        let state = self.collection.borrow();
        self.window.next(&state.items)
    }

    /// Previous button
    pub fn on_previous(&mut self) -> bool {
        let state = self.collection.borrow();
        self.window.previous(&state.items)
    }

    /// Jump straight to `page`
    pub fn on_go_to_page(&mut self, page: usize) -> bool {
        let state = self.collection.borrow();
        self.window.go_to_page(page, &state.items)
    }

    /// End of the rendered list was reached
    pub fn on_load_more_trigger(&mut self) -> bool {
        let state = self.collection.borrow();
        self.window.load_more(&state.items)
    }

    /// Scroll position report
    ///
    /// `remaining` is the fraction of the rendered slice still below the
    /// viewport. At or under [`END_REACHED_THRESHOLD`] this acts as
    /// [`on_load_more_trigger`](Self::on_load_more_trigger).
    pub fn on_scroll(&mut self, remaining: f32) -> bool {
        if remaining.is_finite() && remaining <= END_REACHED_THRESHOLD {
            self.on_load_more_trigger()
        } else {
            false
        }
    }

    /// A list item was tapped
    pub fn on_item_tap(&self) -> u64 {
        self.taps.increment()
    }

    /// The floating counter button was tapped
    pub fn on_counter_tap(&self) -> u64 {
        self.taps.increment()
    }

    /// End the session and leave the screen
    ///
    /// Returns where the host should route next.
    pub fn sign_out(self) -> Result<Route> {
        self.cancel.cancel();
        self.session.sign_out()?;
        Ok(Route::SignIn)
    }

    /// Abandon an unresolved load without leaving the screen
    ///
    /// The collection keeps whatever state it had; a load that already
    /// resolved is unaffected.
    pub fn cancel_load(&self) {
        self.cancel.cancel();
    }

    /// Tear the screen down, abandoning an unresolved load
    pub fn unmount(self) {
        debug!(finished = self.task.is_finished(), "Home screen unmounted");
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for HomeScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeScreen")
            .field("user", &self.session.username())
            .field("window", &self.window)
            .field("phase", &self.collection.borrow().phase)
            .finish_non_exhaustive()
    }
}
