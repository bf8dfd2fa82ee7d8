//! Product grid screen.
//!
//! One instance owns one product list and performs at most one catalog fetch
//! over its lifetime. The fetch result is applied only while the instance is
//! still mounted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::application::dto::CatalogLoadOutcome;
use crate::application::use_cases::LoadCatalogUseCase;
use crate::domain::entities::Product;
use crate::infrastructure::config::GridConfig;
use crate::presentation::events::GridCommand;
use crate::presentation::widgets::{ProductGrid, ProductGridState, StatusBar, StatusLevel};

const HEADER_TITLE: &str = "Featured Products";
const KEY_HINTS: &str = "←↓↑→ move  ⏎ press  r reload  q quit";

/// Lifecycle of the screen's single catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Not mounted yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Catalog received.
    Loaded,
    /// Fetch or decode failed.
    Failed(String),
}

pub struct ProductGridScreen {
    use_case: LoadCatalogUseCase,
    config: GridConfig,
    products: Vec<Product>,
    status: LoadStatus,
    mounted: Arc<AtomicBool>,
    loader_started: bool,
    outcome_rx: Option<oneshot::Receiver<CatalogLoadOutcome>>,
    grid_state: ProductGridState,
}

impl ProductGridScreen {
    #[must_use]
    pub fn new(use_case: LoadCatalogUseCase, config: GridConfig) -> Self {
        Self {
            use_case,
            config,
            products: Vec::new(),
            status: LoadStatus::Idle,
            mounted: Arc::new(AtomicBool::new(false)),
            loader_started: false,
            outcome_rx: None,
            grid_state: ProductGridState::new(),
        }
    }

    /// Mounts the screen and starts its catalog load.
    ///
    /// Only the first call on an instance spawns a request; later calls
    /// return `false` and do nothing. Must be called inside a tokio runtime.
    pub fn mount(&mut self) -> bool {
        if self.loader_started {
            return false;
        }
        self.loader_started = true;
        self.mounted.store(true, Ordering::Release);
        self.status = LoadStatus::Loading;

        let (tx, rx) = oneshot::channel();
        self.outcome_rx = Some(rx);

        let use_case = self.use_case.clone();
        let mounted = self.mounted.clone();

        tokio::spawn(async move {
            let outcome = use_case.execute().await;

            if !mounted.load(Ordering::Acquire) {
                debug!("Screen unmounted before catalog resolved, discarding result");
                return;
            }

            if tx.send(outcome).is_err() {
                debug!("Catalog receiver dropped, discarding result");
            }
        });

        info!("Product grid mounted");
        true
    }

    /// Unmounts the screen. Any pending load result is discarded.
    pub fn unmount(&mut self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            info!("Product grid unmounted");
        }
        self.outcome_rx = None;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Waits for the load result. Pending forever when there is nothing to wait for.
    pub async fn recv_outcome(&mut self) -> Option<CatalogLoadOutcome> {
        let Some(rx) = self.outcome_rx.as_mut() else {
            return std::future::pending().await;
        };

        let outcome = rx.await.ok();
        self.outcome_rx = None;
        outcome
    }

    /// Applies the load result. Returns whether the screen state changed.
    ///
    /// Only the first result after mounting is applied.
    pub fn apply_outcome(&mut self, outcome: CatalogLoadOutcome) -> bool {
        if !self.is_mounted() {
            debug!("Ignoring catalog result for unmounted screen");
            return false;
        }
        if self.status != LoadStatus::Loading {
            debug!(status = ?self.status, "Catalog already settled, ignoring result");
            return false;
        }

        match outcome {
            CatalogLoadOutcome::Loaded(products) => {
                debug!(count = products.len(), "Applying catalog");
                self.products = products;
                self.status = LoadStatus::Loaded;
                if !self.products.is_empty() {
                    self.grid_state.select(Some(0));
                }
            }
            CatalogLoadOutcome::Failed(e) => {
                debug!(error = %e, "Catalog unavailable, grid stays empty");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Handles a grid command. Returns whether a redraw is needed.
    pub fn handle_command(&mut self, command: GridCommand, now: Instant) -> bool {
        let len = self.products.len();
        let state = &mut self.grid_state;

        match command {
            GridCommand::Left => state.select_previous(len),
            GridCommand::Right => state.select_next(len),
            GridCommand::Up => state.select_up(len),
            GridCommand::Down => state.select_down(len),
            GridCommand::PageUp => state.page_up(len),
            GridCommand::PageDown => state.page_down(len),
            GridCommand::First => state.select_first(len),
            GridCommand::Last => state.select_last(len),
            GridCommand::ScrollUp => state.scroll_by(-1, len),
            GridCommand::ScrollDown => state.scroll_by(1, len),
            GridCommand::Press => return state.press_selected(now),
            GridCommand::Click { column, row } => return state.press_at(column, row, now),
            GridCommand::Quit | GridCommand::Remount => return false,
        }
        true
    }

    /// Expires press feedback. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.grid_state.tick(now, self.config.press_feedback())
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub const fn grid_state(&self) -> &ProductGridState {
        &self.grid_state
    }

    fn status_bar(&self) -> StatusBar {
        let bar = StatusBar::new().hints(KEY_HINTS);
        match &self.status {
            LoadStatus::Idle => bar,
            LoadStatus::Loading => bar.message("Loading products…"),
            LoadStatus::Loaded => bar
                .message(format!("{} products", self.products.len()))
                .level(StatusLevel::Success),
            LoadStatus::Failed(reason) => bar
                .message(format!("Could not load products: {reason} (r to retry)"))
                .level(StatusLevel::Error),
        }
    }
}

impl Drop for ProductGridScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl Widget for &mut ProductGridScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, grid_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Line::styled(
            HEADER_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(header_area, buf);

        ProductGrid::new(&self.products, &self.config.currency_symbol)
            .spacing(self.config.card_spacing)
            .render(grid_area, buf, &mut self.grid_state);

        (&self.status_bar()).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CatalogError;
    use crate::domain::ports::mocks::MockCatalogPort;
    use crate::infrastructure::CatalogClient;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_millis(200);

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Backpack", 109.95, "men's clothing").with_title("Fjallraven Backpack"),
            Product::new(2, "Jacket", 55.99, "men's clothing"),
            Product::new(3, "Monitor", 19.5, "electronics"),
        ]
    }

    fn screen_with(port: MockCatalogPort) -> (ProductGridScreen, Arc<AtomicUsize>) {
        let calls = port.calls();
        let use_case = LoadCatalogUseCase::new(Arc::new(port));
        (ProductGridScreen::new(use_case, GridConfig::default()), calls)
    }

    fn render(screen: &mut ProductGridScreen) -> Buffer {
        let area = Rect::new(0, 0, 60, 21);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in buf.area.y..buf.area.bottom() {
            for x in buf.area.x..buf.area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    async fn wait_for_calls(calls: &AtomicUsize, expected: usize) {
        for _ in 0..100 {
            if calls.load(Ordering::SeqCst) >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let (mut screen, calls) = screen_with(MockCatalogPort::with_products(catalog()));

        assert!(screen.products().is_empty());
        assert_eq!(screen.status(), &LoadStatus::Idle);
        assert!(!screen.is_mounted());
        render(&mut screen);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mount_loads_catalog_once() {
        let (mut screen, calls) = screen_with(MockCatalogPort::with_products(catalog()));

        assert!(screen.mount());
        assert!(!screen.mount());

        let outcome = tokio::time::timeout(WAIT, screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        assert!(screen.apply_outcome(outcome));

        for _ in 0..3 {
            render(&mut screen);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(screen.status(), &LoadStatus::Loaded);
        let keys: Vec<String> = screen.products().iter().map(Product::key).collect();
        assert_eq!(keys, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_rendered_grid_shows_card_fields() {
        let (mut screen, _) = screen_with(MockCatalogPort::with_products(catalog()));
        screen.mount();
        let outcome = tokio::time::timeout(WAIT, screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        screen.apply_outcome(outcome);

        let text = buffer_text(&render(&mut screen));

        assert!(text.contains("Featured Products"));
        assert!(text.contains("Fjallraven Backpack"));
        assert!(text.contains("Jacket"));
        assert!(text.contains("ELECTRONICS"));
        assert!(text.contains("$19.50"));
        assert!(text.contains("3 products"));
    }

    #[tokio::test]
    async fn test_failure_leaves_list_empty() {
        let (mut screen, calls) = screen_with(MockCatalogPort::failing());
        screen.mount();

        let outcome = tokio::time::timeout(WAIT, screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        assert!(screen.apply_outcome(outcome));

        assert!(screen.products().is_empty());
        assert!(matches!(screen.status(), LoadStatus::Failed(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let text = buffer_text(&render(&mut screen));
        assert!(text.contains("Could not load products"));
    }

    #[tokio::test]
    async fn test_decode_failure_leaves_list_empty() {
        let (mut screen, _) = screen_with(MockCatalogPort::failing());
        screen.mount();

        let applied = screen.apply_outcome(CatalogLoadOutcome::Failed(CatalogError::decode(
            "expected value at line 1 column 1",
        )));

        assert!(applied);
        assert!(screen.products().is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_logs_one_diagnostic() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client =
            CatalogClient::with_url(format!("http://{addr}/products"), Duration::from_secs(2))
                .unwrap();
        let mut screen = ProductGridScreen::new(
            LoadCatalogUseCase::new(Arc::new(client)),
            GridConfig::default(),
        );

        screen.mount();
        let outcome = tokio::time::timeout(Duration::from_secs(5), screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        assert!(screen.apply_outcome(outcome));

        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("Error fetching products"));
        assert!(screen.products().is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_renders_zero_cards() {
        let (mut screen, _) = screen_with(MockCatalogPort::with_products(Vec::new()));
        screen.mount();
        let outcome = tokio::time::timeout(WAIT, screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        screen.apply_outcome(outcome);

        let text = buffer_text(&render(&mut screen));

        assert_eq!(screen.status(), &LoadStatus::Loaded);
        assert_eq!(screen.grid_state().selected(), None);
        assert!(!text.contains('╭'));
        assert!(text.contains("0 products"));
    }

    #[tokio::test]
    async fn test_unmount_before_resolution_discards_result() {
        let (port, gate) = MockCatalogPort::with_products(catalog()).gated();
        let (mut screen, calls) = screen_with(port);

        screen.mount();
        wait_for_calls(&calls, 1).await;
        screen.unmount();
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let late = tokio::time::timeout(Duration::from_millis(50), screen.recv_outcome()).await;

        assert!(late.is_err());
        assert!(screen.products().is_empty());
        assert_eq!(screen.status(), &LoadStatus::Loading);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_late_outcome_after_unmount_is_ignored() {
        let (mut screen, _) = screen_with(MockCatalogPort::with_products(catalog()));
        screen.mount();
        screen.unmount();

        assert!(!screen.apply_outcome(CatalogLoadOutcome::Loaded(catalog())));
        assert!(screen.products().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_populated_only_once() {
        let (mut screen, _) = screen_with(MockCatalogPort::with_products(catalog()));
        screen.mount();
        let outcome = tokio::time::timeout(WAIT, screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        assert!(screen.apply_outcome(outcome));

        let replacement = vec![Product::new(9, "Lamp", 5.0, "home")];
        assert!(!screen.apply_outcome(CatalogLoadOutcome::Loaded(replacement)));
        assert!(!screen.apply_outcome(CatalogLoadOutcome::Failed(CatalogError::status(500))));

        let keys: Vec<String> = screen.products().iter().map(Product::key).collect();
        assert_eq!(keys, ["1", "2", "3"]);
        assert_eq!(screen.status(), &LoadStatus::Loaded);
    }

    #[tokio::test]
    async fn test_outcome_before_mount_is_ignored() {
        let (mut screen, calls) = screen_with(MockCatalogPort::with_products(catalog()));

        assert!(!screen.apply_outcome(CatalogLoadOutcome::Loaded(catalog())));
        assert!(screen.products().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_instances_do_not_share_state() {
        let port = Arc::new(MockCatalogPort::with_products(catalog()));
        let calls = port.calls();
        let use_case = LoadCatalogUseCase::new(port);

        let mut first = ProductGridScreen::new(use_case.clone(), GridConfig::default());
        first.mount();
        let outcome = tokio::time::timeout(WAIT, first.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        first.apply_outcome(outcome);
        drop(first);

        let mut second = ProductGridScreen::new(use_case, GridConfig::default());
        assert!(second.products().is_empty());
        assert!(second.mount());
        wait_for_calls(&calls, 2).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_press_is_visual_only() {
        let (mut screen, _) = screen_with(MockCatalogPort::with_products(catalog()));
        screen.mount();
        let outcome = tokio::time::timeout(WAIT, screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        screen.apply_outcome(outcome);
        let now = Instant::now();

        assert!(screen.handle_command(GridCommand::Right, now));
        assert!(screen.handle_command(GridCommand::Press, now));
        assert!(screen.grid_state().is_pressed(1));
        assert!(screen.tick(now + Duration::from_secs(1)));
        assert!(!screen.grid_state().is_pressed(1));
        assert_eq!(screen.products().len(), 3);
    }
}
