//! Main application orchestrator.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::use_cases::LoadCatalogUseCase;
use crate::infrastructure::config::GridConfig;
use crate::presentation::events::{EventHandler, EventResult, GridCommand};
use crate::presentation::ui::ProductGridScreen;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    screen: ProductGridScreen,
    load_catalog_use_case: LoadCatalogUseCase,
    grid_config: GridConfig,
}

impl App {
    #[must_use]
    pub fn new(load_catalog_use_case: LoadCatalogUseCase, grid_config: GridConfig) -> Self {
        let screen = ProductGridScreen::new(load_catalog_use_case.clone(), grid_config.clone());

        Self {
            state: AppState::Running,
            screen,
            load_catalog_use_case,
            grid_config,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.screen.mount();

        self.run_event_loop(terminal).await?;

        self.screen.unmount();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(outcome) = self.screen.recv_outcome() => {
                    if self.screen.apply_outcome(outcome) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                _ = animation_interval.tick() => {
                    if self.screen.tick(Instant::now()) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_event => {
                    match self.handle_terminal_event(&event) {
                        EventResult::Exit => self.state = AppState::Exiting,
                        EventResult::Remount => self.remount(),
                        EventResult::Continue => {}
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        let command = match event {
            Event::Key(key) => EventHandler::command_for_key(key),
            Event::Mouse(mouse) => EventHandler::command_for_mouse(mouse),
            _ => None,
        };

        match command {
            Some(GridCommand::Quit) => EventResult::Exit,
            Some(GridCommand::Remount) => EventResult::Remount,
            Some(command) => {
                self.screen.handle_command(command, Instant::now());
                EventResult::Continue
            }
            None => EventResult::Continue,
        }
    }

    /// Replaces the screen with a fresh instance that performs its own load.
    fn remount(&mut self) {
        debug!("Remounting product grid");
        let fresh = ProductGridScreen::new(
            self.load_catalog_use_case.clone(),
            self.grid_config.clone(),
        );
        let mut previous = std::mem::replace(&mut self.screen, fresh);
        previous.unmount();
        self.screen.mount();
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(&mut self.screen, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Product;
    use crate::domain::ports::mocks::MockCatalogPort;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_quit_key_exits() {
        let port = Arc::new(MockCatalogPort::with_products(Vec::new()));
        let mut app = App::new(LoadCatalogUseCase::new(port), GridConfig::default());

        assert_eq!(
            app.handle_terminal_event(&key(KeyCode::Char('q'))),
            EventResult::Exit
        );
    }

    #[tokio::test]
    async fn test_remount_fetches_again_with_fresh_state() {
        let port = MockCatalogPort::with_products(vec![Product::new(1, "Lamp", 19.5, "home")]);
        let calls = port.calls();
        let mut app = App::new(LoadCatalogUseCase::new(Arc::new(port)), GridConfig::default());

        app.screen.mount();
        let outcome = tokio::time::timeout(Duration::from_millis(200), app.screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        app.screen.apply_outcome(outcome);
        assert_eq!(app.screen.products().len(), 1);

        assert_eq!(
            app.handle_terminal_event(&key(KeyCode::Char('r'))),
            EventResult::Remount
        );
        app.remount();

        assert!(app.screen.products().is_empty());
        assert!(app.screen.is_mounted());
        let outcome = tokio::time::timeout(Duration::from_millis(200), app.screen.recv_outcome())
            .await
            .unwrap()
            .unwrap();
        app.screen.apply_outcome(outcome);
        assert_eq!(app.screen.products().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_navigation_keys_continue() {
        let port = Arc::new(MockCatalogPort::with_products(Vec::new()));
        let mut app = App::new(LoadCatalogUseCase::new(port), GridConfig::default());

        assert_eq!(
            app.handle_terminal_event(&key(KeyCode::Down)),
            EventResult::Continue
        );
        assert_eq!(
            app.handle_terminal_event(&Event::FocusGained),
            EventResult::Continue
        );
    }
}
