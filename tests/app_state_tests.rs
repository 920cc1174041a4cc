//! Tests for the terminal shell
//!
//! These tests verify:
//! - Key events reach the page controller through the keybinding registry
//! - Screen detection follows the page
//! - Digit shortcuts only act while the beam is open

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use ufoburgers::audio::NullOutput;
use ufoburgers::components::keybindings::{KeyAction, KeybindingContext};
use ufoburgers::{App, ExperienceConfig, OverlayState, Screen};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn landed_app() -> (App, Instant) {
    let mut app = App::new(&ExperienceConfig::default(), 120, Box::new(NullOutput));
    let t0 = Instant::now();
    app.handle_key_event(press(KeyCode::Enter), t0);
    (app, t0)
}

// =============================================================================
// Screen Tests
// =============================================================================

#[test]
fn test_screen_titles_are_distinct() {
    let titles = [
        Screen::Splash.title(),
        Screen::Intro.title(),
        Screen::Landing.title(),
        Screen::Carousel.title(),
    ];
    for (i, a) in titles.iter().enumerate() {
        for b in &titles[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_intro_screen_only_has_global_bindings() {
    let ctx = KeybindingContext::new();
    let actions: Vec<KeyAction> = ctx
        .get_bindings(Screen::Intro)
        .iter()
        .map(|b| b.action)
        .collect();
    assert!(actions
        .iter()
        .all(|a| matches!(a, KeyAction::Help | KeyAction::Quit)));
    assert_eq!(
        ctx.resolve(Screen::Intro, KeyCode::Char(' '), KeyModifiers::NONE),
        None
    );
}

// =============================================================================
// Key Flow Tests
// =============================================================================

#[test]
fn test_keyboard_walkthrough() {
    let (mut app, t0) = landed_app();

    // Still in the intro: space does nothing
    app.handle_key_event(press(KeyCode::Char(' ')), t0);
    assert_eq!(app.page().overlay(), OverlayState::Closed);

    let now = t0 + Duration::from_millis(8000);
    assert_eq!(app.tick(now).len(), 3);

    app.handle_key_event(press(KeyCode::Char(' ')), now);
    assert_eq!(app.page().overlay(), OverlayState::Open);

    app.handle_key_event(press(KeyCode::Char('6')), now);
    assert_eq!(app.page().index(), 5);
    assert_eq!(app.page().overlay(), OverlayState::OpenWithInfo);

    app.handle_key_event(press(KeyCode::Right), now);
    assert_eq!(app.page().index(), 6);

    app.handle_key_event(press(KeyCode::Esc), now);
    assert_eq!(app.page().overlay(), OverlayState::Closed);
    assert!(!app.page().info_visible());
}

#[test]
fn test_digit_pick_ignored_while_closed() {
    let (mut app, t0) = landed_app();
    app.handle_key_event(press(KeyCode::Char('6')), t0);
    assert_eq!(app.page().index(), 3);
    assert!(!app.page().info_visible());
}

#[test]
fn test_help_toggle_round_trip() {
    let (mut app, t0) = landed_app();
    app.handle_key_event(press(KeyCode::Char('?')), t0);
    assert!(app.help_visible());
    app.handle_key_event(press(KeyCode::Char('?')), t0);
    assert!(!app.help_visible());
}
