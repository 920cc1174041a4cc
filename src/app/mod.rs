//! Application module
//!
//! The terminal shell around the page controller: the event loop, key
//! dispatch, resize handling and frame drawing.
//!
//! # Module Structure
//! - `state` - Screen and shell state types
//! - Main module - App struct and event loop

mod state;

pub use state::{Screen, ShellState};

use crate::audio::AudioOutput;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::ExperienceConfig;
use crate::controller::{KeyInput, PageController};
use crate::error::Result;
use crate::intro::IntroPhase;
use crate::layout::TerminalViewport;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs a terminal restore on drop, so every exit path after raw mode was
/// enabled leaves the terminal usable.
pub struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Main application struct
pub struct App {
    page: PageController,
    state: ShellState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    cell_width_px: u32,
    tick_rate: Duration,
}

impl App {
    /// Create a new application instance for a terminal `columns` wide
    pub fn new(config: &ExperienceConfig, columns: u16, audio: Box<dyn AudioOutput>) -> Self {
        info!("Creating new App instance");
        let viewport = TerminalViewport::new(columns, config.cell_width_px);
        Self {
            page: PageController::mount(&viewport, audio, Instant::now()),
            state: ShellState::default(),
            ui_renderer: UiRenderer::new(config.cell_width_px),
            keybinding_context: KeybindingContext::new(),
            cell_width_px: config.cell_width_px,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
        }
    }

    /// The page being shown
    pub fn page(&self) -> &PageController {
        &self.page
    }

    /// Whether the help overlay is up
    pub fn help_visible(&self) -> bool {
        self.state.help_visible
    }

    /// Whether the user asked to quit
    pub fn quit_requested(&self) -> bool {
        self.state.quit_requested
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.quit_requested {
            if crossterm::event::poll(self.tick_rate)? {
                let now = Instant::now();
                match crossterm::event::read()? {
                    Event::Key(key_event) => self.handle_key_event(key_event, now),
                    Event::Resize(width, _height) => self.handle_resize(width),
                    _ => {}
                }
            }

            let now = Instant::now();
            self.tick(now);

            let view = self.page.view(now);
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &view, &self.keybinding_context, self.state.help_visible)
            })?;
        }

        let teardown = self.page.unmount();
        debug!("Teardown: {:?}", teardown);
        Ok(())
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        // Help overlay swallows everything except its own dismissal and quit
        if self.state.help_visible {
            match self.resolve(key_event) {
                Some(KeyAction::Help) => self.toggle_help(),
                Some(KeyAction::Quit) => self.state.quit_requested = true,
                _ if key_event.code == crossterm::event::KeyCode::Esc => self.toggle_help(),
                _ => {}
            }
            return;
        }

        let Some(action) = self.resolve(key_event) else {
            return;
        };
        debug!("Key {:?} -> {:?}", key_event.code, action);

        match action {
            KeyAction::Enter => {
                self.page.enter(now);
            }
            KeyAction::ActivateUfo => {
                self.page.activate_ufo();
            }
            KeyAction::Previous => {
                self.page.key(KeyInput::ArrowLeft);
            }
            KeyAction::Next => {
                self.page.key(KeyInput::ArrowRight);
            }
            KeyAction::Pick(index) => {
                if self.page.menu_open() {
                    self.page.select_index(index as i64);
                }
            }
            KeyAction::Close => {
                self.page.key(KeyInput::Escape);
            }
            KeyAction::Help => self.toggle_help(),
            KeyAction::Quit => {
                info!("Quit requested");
                self.state.quit_requested = true;
            }
        }
    }

    /// Advance the page clock. Returns the intro phases entered.
    pub fn tick(&mut self, now: Instant) -> Vec<IntroPhase> {
        self.page.tick(now)
    }

    fn resolve(&self, key_event: KeyEvent) -> Option<KeyAction> {
        let screen = Screen::from_view(&self.page.view(Instant::now()));
        self.keybinding_context
            .resolve(screen, key_event.code, key_event.modifiers)
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, columns: u16) {
        let viewport = TerminalViewport::new(columns, self.cell_width_px);
        self.page.resize(&viewport);
    }
}
