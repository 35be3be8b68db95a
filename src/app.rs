use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;

use crate::projects::Project;
use crate::wheel::Session;

/// Presentation state around one wheel session: forwards key intents into
/// the session and advances it once per tick.
pub struct App {
    pub should_quit: bool,
    pub session: Session<Project>,
    pub label_lines: usize,
    pub anchor_fraction: f64,
    rng: StdRng,
}

impl App {
    pub fn new(session: Session<Project>, rng: StdRng, label_lines: usize, anchor_fraction: f64) -> Self {
        Self {
            should_quit: false,
            session,
            label_lines,
            anchor_fraction,
            rng,
        }
    }

    pub fn on_tick(&mut self) {
        if self.session.is_spinning() {
            self.session.tick();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char(' ') => {
                self.session.request_spin(&mut self.rng);
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.session.toggle_details();
            }
            _ => {}
        }
    }

    /// Project picked by the most recent completed spin.
    pub fn selected(&self) -> Option<&Project> {
        self.session.winner().map(|slot| &slot.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{generate, into_slots};
    use crate::wheel::{PhysicsParams, SpinRange};
    use rand::SeedableRng;

    fn app() -> App {
        let communities = vec!["Python".to_string(), "DevOps".to_string()];
        let mut rng = StdRng::seed_from_u64(21);
        let slots = into_slots(generate(&communities, &mut rng));
        let session = Session::new(slots, PhysicsParams::default(), SpinRange::default()).unwrap();
        App::new(session, rng, 2, 0.55)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_space_spins_and_ticks_reach_a_winner() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.is_spinning());

        let mut ticks = 0;
        while app.session.is_spinning() {
            app.on_tick();
            ticks += 1;
            assert!(ticks < 10_000);
        }
        assert!(app.selected().is_some());
    }

    #[test]
    fn test_details_key_needs_a_winner() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.session.details_visible());

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.session.details_visible());

        while app.session.is_spinning() {
            app.on_tick();
        }
        press(&mut app, KeyCode::Char('D'));
        assert!(app.session.details_visible());
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('q')] {
            let mut app = app();
            press(&mut app, code);
            assert!(app.should_quit);
        }

        let mut app = app();
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
