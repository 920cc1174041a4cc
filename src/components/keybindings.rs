//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current screen,
//! and resolves raw key events into actions for the event loop.

use crate::app::Screen;
use crate::catalog::CATALOG_LEN;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Pass the splash gate
    Enter,
    /// Click the UFO
    ActivateUfo,
    Previous,
    Next,
    /// Pick a burger directly by index
    Pick(usize),
    /// Close the beam and carousel
    Close,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.key == key && modifiers.contains(self.modifiers)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Screen-specific keybindings
    screen_bindings: HashMap<Screen, Vec<Keybinding>>,
    /// Global keybindings (available on all screens)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            screen_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all screens
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.screen_bindings.insert(
            Screen::Splash,
            vec![Keybinding::new(KeyCode::Enter, KeyAction::Enter, "Enter", "Enter")],
        );

        // Nothing to do while the UFO is still in the air
        self.screen_bindings.insert(Screen::Intro, Vec::new());

        self.screen_bindings.insert(
            Screen::Landing,
            vec![
                Keybinding::new(KeyCode::Char(' '), KeyAction::ActivateUfo, "Space", "Click the UFO"),
                Keybinding::new(KeyCode::Enter, KeyAction::ActivateUfo, "Enter", "Click the UFO"),
            ],
        );

        let mut carousel = vec![
            Keybinding::new(KeyCode::Left, KeyAction::Previous, "Left", "Previous burger"),
            Keybinding::new(KeyCode::Right, KeyAction::Next, "Right", "Next burger"),
        ];
        carousel.extend((0..CATALOG_LEN).filter_map(|i| {
            let digit = char::from_digit(i as u32 + 1, 10)?;
            Some(Keybinding::new(
                KeyCode::Char(digit),
                KeyAction::Pick(i),
                "1-8",
                "Pick a burger",
            ))
        }));
        carousel.push(Keybinding::new(
            KeyCode::Char(' '),
            KeyAction::ActivateUfo,
            "Space",
            "Close the beam",
        ));
        carousel.push(Keybinding::new(KeyCode::Esc, KeyAction::Close, "Esc", "Close"));
        self.screen_bindings.insert(Screen::Carousel, carousel);
    }

    /// Get keybindings for a specific screen (includes global bindings)
    pub fn get_bindings(&self, screen: Screen) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(screen_bindings) = self.screen_bindings.get(&screen) {
            bindings.extend(screen_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press on the given screen to an action
    pub fn resolve(&self, screen: Screen, key: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        // Prefer bindings that demand modifiers, so Ctrl+C never reads as plain 'c'
        let bindings = self.get_bindings(screen);
        bindings
            .iter()
            .filter(|b| !b.modifiers.is_empty())
            .chain(bindings.iter().filter(|b| b.modifiers.is_empty()))
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, screen: Screen) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(screen);

        let priority_actions = match screen {
            Screen::Splash => vec![KeyAction::Enter, KeyAction::Quit],
            Screen::Intro => vec![KeyAction::Help, KeyAction::Quit],
            Screen::Landing => vec![KeyAction::ActivateUfo, KeyAction::Help, KeyAction::Quit],
            Screen::Carousel => vec![
                KeyAction::Previous,
                KeyAction::Next,
                KeyAction::Pick(0),
                KeyAction::Close,
                KeyAction::Help,
            ],
        };

        // Combine Left/Right into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            if (action == KeyAction::Previous || action == KeyAction::Next) && has_nav {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if action == KeyAction::Previous || action == KeyAction::Next {
                    items.push(NavBarItem {
                        key_display: "Left/Right".to_string(),
                        action_label: "Browse".to_string(),
                    });
                    has_nav = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a screen (for help overlay)
    pub fn get_help_content(&self, screen: Screen) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        let navigation = self.section(screen, "Navigation", |a| {
            matches!(a, KeyAction::Previous | KeyAction::Next | KeyAction::Pick(_))
        });
        sections.extend(navigation);

        let actions = self.section(screen, "Actions", |a| {
            matches!(a, KeyAction::Enter | KeyAction::ActivateUfo | KeyAction::Close)
        });
        sections.extend(actions);

        let general = self.section(screen, "General", |a| {
            matches!(a, KeyAction::Help | KeyAction::Quit)
        });
        sections.extend(general);

        sections
    }

    fn section(
        &self,
        screen: Screen,
        title: &str,
        filter: impl Fn(KeyAction) -> bool,
    ) -> Option<HelpSection> {
        let mut items: Vec<(String, String)> = Vec::new();
        for binding in self.get_bindings(screen) {
            if !filter(binding.action) {
                continue;
            }
            // Digit bindings share one display entry
            if items.iter().any(|(key, _)| *key == binding.display) {
                continue;
            }
            items.push((binding.display.clone(), binding.description.clone()));
        }

        if items.is_empty() {
            None
        } else {
            Some(HelpSection {
                title: title.to_string(),
                items,
            })
        }
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_only_on_splash() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Screen::Splash, KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyAction::Enter)
        );
        assert_eq!(ctx.resolve(Screen::Intro, KeyCode::Enter, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_digits_pick_burgers() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Screen::Carousel, KeyCode::Char('6'), KeyModifiers::NONE),
            Some(KeyAction::Pick(5))
        );
        assert_eq!(
            ctx.resolve(Screen::Carousel, KeyCode::Char('9'), KeyModifiers::NONE),
            None
        );
        assert_eq!(
            ctx.resolve(Screen::Landing, KeyCode::Char('6'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeybindingContext::new();
        for screen in [Screen::Splash, Screen::Intro, Screen::Landing, Screen::Carousel] {
            assert_eq!(
                ctx.resolve(screen, KeyCode::Char('c'), KeyModifiers::CONTROL),
                Some(KeyAction::Quit)
            );
        }
    }

    #[test]
    fn test_nav_items_combine_arrows() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(Screen::Carousel);
        let browse = items.iter().filter(|i| i.action_label == "Browse").count();
        assert_eq!(browse, 1);
        assert!(items.iter().any(|i| i.key_display == "1-8"));
    }

    #[test]
    fn test_help_dedupes_digit_bindings() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(Screen::Carousel);
        let navigation = sections
            .iter()
            .find(|s| s.title == "Navigation")
            .expect("carousel has navigation");
        assert_eq!(navigation.items.len(), 3);
    }
}
