// Key debouncing for the app-level keys
//
// Calculator keys are never filtered: every press is one action. The keys
// that toggle app state (quit, help, logs, theme, copy) fire once per press,
// and panel navigation keys repeat while held.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a `Once` key while it looks held.
/// Covers terminals that never send Release events.
const ONCE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire on the first press, then only after release or the debounce gap
    Once,
    /// Fire on press, then every `interval` once held past `delay`
    Repeat { delay: Duration, interval: Duration },
}

impl KeyBehavior {
    pub fn scrolling() -> Self {
        Self::Repeat {
            delay: Duration::from_millis(400),
            interval: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Tracks held keys and decides whether a press should fire
#[derive(Debug, Default)]
pub struct InputHandler {
    behaviors: HashMap<KeyCode, KeyBehavior>,
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Keys the app handles outside the calculator
    pub fn for_app_keys() -> Self {
        let mut handler = Self::new();

        handler.configure(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Char('k'),
                KeyCode::Char('j'),
            ],
            KeyBehavior::scrolling(),
        );

        handler.configure(
            &[
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::Home,
                KeyCode::End,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('?'),
                KeyCode::Char('y'),
                KeyCode::Char('L'),
                KeyCode::Char('t'),
            ],
            KeyBehavior::Once,
        );

        handler
    }

    /// Returns true when the press should trigger its action
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Once);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Once => now.duration_since(held.last_fired) >= ONCE_DEBOUNCE,
            KeyBehavior::Repeat { delay, interval } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };

        if fire {
            held.last_fired = now;
        }
        fire
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Forget all held keys, e.g. when the terminal loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_again_only_after_release() {
        let mut handler = InputHandler::for_app_keys();
        let t0 = Instant::now();
        let key = KeyCode::Char('?');

        assert!(handler.press_at(key, t0));
        assert!(!handler.press_at(key, t0 + Duration::from_millis(20)));

        handler.release(key);
        assert!(handler.press_at(key, t0 + Duration::from_millis(30)));
    }

    #[test]
    fn once_debounce_without_release_events() {
        let mut handler = InputHandler::for_app_keys();
        let t0 = Instant::now();
        let key = KeyCode::Char('t');

        assert!(handler.press_at(key, t0));
        assert!(!handler.press_at(key, t0 + Duration::from_millis(100)));
        assert!(handler.press_at(key, t0 + ONCE_DEBOUNCE));
    }

    #[test]
    fn repeat_waits_for_delay_then_interval() {
        let mut handler = InputHandler::new();
        handler.configure(
            &[KeyCode::Down],
            KeyBehavior::Repeat {
                delay: Duration::from_millis(100),
                interval: Duration::from_millis(50),
            },
        );
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        assert!(handler.press_at(KeyCode::Down, t0));
        assert!(!handler.press_at(KeyCode::Down, t0 + ms(60)));
        assert!(handler.press_at(KeyCode::Down, t0 + ms(110)));
        assert!(!handler.press_at(KeyCode::Down, t0 + ms(130)));
        assert!(handler.press_at(KeyCode::Down, t0 + ms(165)));
    }

    #[test]
    fn release_all_resets_held_keys() {
        let mut handler = InputHandler::for_app_keys();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('L'), t0));
        handler.release_all();
        assert!(handler.press_at(KeyCode::Char('L'), t0 + Duration::from_millis(1)));
    }
}
