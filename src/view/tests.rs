//! Tests for the home screen model

use super::*;
use crate::alert::RecordingAlertSink;
use crate::catalog::{CatalogItem, CatalogLoader, CatalogSource, LoadPhase};
use crate::error::{Error, Result};
use crate::session::{Route, StaticSession};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

struct FixedSource(usize);

#[async_trait]
impl CatalogSource for FixedSource {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>> {
        Ok((1..=self.0)
            .map(|i| CatalogItem::new(i.to_string(), format!("isbn-{i}")).with_title(format!("Book {i}")))
            .collect())
    }
}

struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>> {
        Err(Error::Timeout { timeout_ms: 30_000 })
    }
}

/// Resolves only once `gate` has a permit
struct GatedSource {
    gate: Arc<Semaphore>,
    fail: bool,
}

impl GatedSource {
    fn new(gate: &Arc<Semaphore>, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            gate: gate.clone(),
            fail,
        })
    }
}

#[async_trait]
impl CatalogSource for GatedSource {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>> {
        let _permit = self.gate.acquire().await;
        if self.fail {
            return Err(Error::http_status(500, "down"));
        }
        Ok(vec![CatalogItem::new("1", "x")])
    }
}

fn mount_with(
    source: Arc<dyn CatalogSource>,
    alerts: &RecordingAlertSink,
    page_size: usize,
) -> (HomeScreen, Arc<StaticSession>, TapCounter) {
    let session = Arc::new(StaticSession::new("ada"));
    let taps = TapCounter::new();
    let loader = CatalogLoader::new(source, Arc::new(alerts.clone()));
    let screen = HomeScreen::mount(loader, session.clone(), taps.clone(), page_size).unwrap();
    (screen, session, taps)
}

fn visible_ids(snapshot: &HomeSnapshot) -> Vec<String> {
    snapshot
        .visible_items
        .iter()
        .map(|item| item.id.to_string())
        .collect()
}

#[tokio::test]
async fn test_mount_starts_loading() {
    let gate = Arc::new(Semaphore::new(0));
    let alerts = RecordingAlertSink::new();
    let (screen, _, _) = mount_with(GatedSource::new(&gate, false), &alerts, 5);

    let snapshot = screen.snapshot();
    assert!(snapshot.is_loading);
    assert_eq!(snapshot.placeholder, ListPlaceholder::Loading);
    assert_eq!(snapshot.greeting, "Welcome, ada!");
    assert_eq!(snapshot.page_index, 1);
    assert_eq!(snapshot.total_pages, 0);
}

#[tokio::test]
async fn test_twelve_books_three_pages() {
    let alerts = RecordingAlertSink::new();
    let (mut screen, _, _) = mount_with(Arc::new(FixedSource(12)), &alerts, 5);

    assert_eq!(screen.loaded().await.unwrap(), LoadPhase::Ready);

    let first = screen.snapshot();
    assert_eq!(first.total_pages, 3);
    assert_eq!(visible_ids(&first), vec!["1", "2", "3", "4", "5"]);
    assert!(!first.can_go_previous);
    assert!(first.can_go_next);
    assert_eq!(first.page_label(), "1 / 3");
    assert_eq!(first.placeholder, ListPlaceholder::Hidden);

    assert!(screen.on_go_to_page(3));
    let last = screen.snapshot();
    assert_eq!(visible_ids(&last), vec!["11", "12"]);
    assert!(!last.can_go_next);
    assert!(!screen.on_next());

    assert!(screen.on_previous());
    assert_eq!(screen.snapshot().page_index, 2);
}

#[tokio::test]
async fn test_empty_catalog_shows_no_results() {
    let alerts = RecordingAlertSink::new();
    let (mut screen, _, _) = mount_with(Arc::new(FixedSource(0)), &alerts, 5);

    assert_eq!(screen.loaded().await.unwrap(), LoadPhase::Ready);

    assert!(!screen.on_go_to_page(1));
    assert!(!screen.on_next());
    assert!(!screen.on_load_more_trigger());

    let snapshot = screen.snapshot();
    assert!(!snapshot.is_loading);
    assert!(!snapshot.has_errored);
    assert!(snapshot.visible_items.is_empty());
    assert_eq!(snapshot.total_pages, 0);
    assert_eq!(snapshot.page_index, 1);
    assert_eq!(snapshot.placeholder, ListPlaceholder::NoResults);
    assert!(alerts.alerts().is_empty());
}

#[tokio::test]
async fn test_failed_fetch_alerts_once() {
    let alerts = RecordingAlertSink::new();
    let (mut screen, _, _) = mount_with(Arc::new(FailingSource), &alerts, 5);

    assert_eq!(screen.loaded().await.unwrap(), LoadPhase::Errored);

    let snapshot = screen.snapshot();
    assert!(!snapshot.is_loading);
    assert!(snapshot.has_errored);
    assert!(snapshot.visible_items.is_empty());
    assert_eq!(snapshot.placeholder, ListPlaceholder::NoResults);

    let raised = alerts.alerts();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].message, "Failed to fetch books. Please try again.");
}

#[tokio::test]
async fn test_load_more_reaches_short_last_page() {
    let alerts = RecordingAlertSink::new();
    let (mut screen, _, _) = mount_with(Arc::new(FixedSource(7)), &alerts, 5);
    screen.loaded().await.unwrap();

    assert!(screen.on_load_more_trigger());
    let snapshot = screen.snapshot();
    assert_eq!(snapshot.page_index, 2);
    assert_eq!(visible_ids(&snapshot), vec!["6", "7"]);

    assert!(!screen.on_load_more_trigger());
    assert_eq!(screen.snapshot().page_index, 2);
}

#[tokio::test]
async fn test_scroll_threshold() {
    let alerts = RecordingAlertSink::new();
    let (mut screen, _, _) = mount_with(Arc::new(FixedSource(20)), &alerts, 5);
    screen.loaded().await.unwrap();

    assert!(!screen.on_scroll(0.9));
    assert!(!screen.on_scroll(f32::NAN));
    assert_eq!(screen.window().page_index(), 1);

    assert!(screen.on_scroll(0.5));
    assert!(screen.on_scroll(0.1));
    assert_eq!(screen.window().page_index(), 3);
}

#[tokio::test]
async fn test_taps_share_injected_counter() {
    let alerts = RecordingAlertSink::new();
    let (screen, _, taps) = mount_with(Arc::new(FixedSource(1)), &alerts, 5);

    assert_eq!(screen.on_item_tap(), 1);
    assert_eq!(screen.on_counter_tap(), 2);
    taps.increment();
    assert_eq!(screen.snapshot().tap_count, 3);
}

#[tokio::test]
async fn test_sign_out_routes_to_sign_in() {
    let alerts = RecordingAlertSink::new();
    let (mut screen, session, _) = mount_with(Arc::new(FixedSource(3)), &alerts, 5);
    screen.loaded().await.unwrap();

    assert_eq!(screen.sign_out().unwrap(), Route::SignIn);
    assert!(session.is_signed_out());
}

#[tokio::test]
async fn test_unmount_abandons_pending_load() {
    let gate = Arc::new(Semaphore::new(0));
    let alerts = RecordingAlertSink::new();
    let (screen, _, _) = mount_with(GatedSource::new(&gate, true), &alerts, 5);
    tokio::task::yield_now().await;

    screen.unmount();
    gate.add_permits(1);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(alerts.alerts().is_empty());
}

#[tokio::test]
async fn test_dropping_screen_abandons_pending_load() {
    let gate = Arc::new(Semaphore::new(0));
    let alerts = RecordingAlertSink::new();
    let (screen, _, _) = mount_with(GatedSource::new(&gate, true), &alerts, 5);

    drop(screen);
    gate.add_permits(1);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(alerts.alerts().is_empty());
}

#[tokio::test]
async fn test_cancelled_load_never_resolves() {
    let gate = Arc::new(Semaphore::new(0));
    let alerts = RecordingAlertSink::new();
    let loader = CatalogLoader::new(GatedSource::new(&gate, false), Arc::new(alerts.clone()));

    let mut first = HomeScreen::mount(
        loader.clone(),
        Arc::new(StaticSession::new("ada")),
        TapCounter::new(),
        5,
    )
    .unwrap();
    let mut second = HomeScreen::mount(
        loader,
        Arc::new(StaticSession::new("grace")),
        TapCounter::new(),
        5,
    )
    .unwrap();

    first.cancel_load();
    assert!(matches!(first.loaded().await, Err(Error::Cancelled)));
    assert_eq!(first.phase(), LoadPhase::Loading);

    gate.add_permits(2);
    assert_eq!(second.loaded().await.unwrap(), LoadPhase::Ready);
    assert_eq!(first.phase(), LoadPhase::Loading);
}

#[test]
fn test_zero_page_size_fails_mount() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let _enter = runtime.enter();
    let loader = CatalogLoader::new(
        Arc::new(FixedSource(1)),
        Arc::new(RecordingAlertSink::new()),
    );
    let result = HomeScreen::mount(loader, Arc::new(StaticSession::new("ada")), TapCounter::new(), 0);
    assert!(result.is_err());
}
