use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::json;

use crate::counter::{CounterAction, CounterReducer, CounterState};
use crate::devtools::{DispatchRecorder, RecordedDispatch};
use crate::flow::Store;

/// View-side application state.
///
/// The store is injected; the view never constructs it. Rendering reads
/// a state snapshot each frame, key handling dispatches actions back.
pub struct App {
    store: Store<CounterReducer>,
    recorder: Option<Arc<DispatchRecorder>>,
    should_quit: bool,
}

impl App {
    pub fn new(store: Store<CounterReducer>, recorder: Option<Arc<DispatchRecorder>>) -> Self {
        Self {
            store,
            recorder,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot of the counter state for rendering.
    pub fn snapshot(&self) -> CounterState {
        self.store.state()
    }

    /// Recorded dispatch history, empty when devtools are off.
    pub fn history(&self) -> Vec<RecordedDispatch> {
        self.recorder
            .as_ref()
            .map(|recorder| recorder.entries())
            .unwrap_or_default()
    }

    pub fn devtools_enabled(&self) -> bool {
        self.recorder.is_some()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => {
                self.store.dispatch(CounterAction::IncreaseCount);
            }
            KeyCode::Char('x') => {
                // Feed an unrecognized wire action through the store to
                // show the identity transition in the history panel.
                let raw = json!({ "type": "DECREASE_COUNT" });
                self.store.dispatch(CounterAction::from_json(&raw));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Store::new(), None)
    }

    #[test]
    fn space_dispatches_increase() {
        let mut app = app();
        app.on_key(press(KeyCode::Char(' ')));
        app.on_key(press(KeyCode::Char(' ')));
        assert_eq!(app.snapshot().items, vec![1, 2]);
    }

    #[test]
    fn unknown_wire_action_leaves_state_unchanged() {
        let mut app = app();
        app.on_key(press(KeyCode::Char(' ')));
        app.on_key(press(KeyCode::Char('x')));
        assert_eq!(app.snapshot().items, vec![1]);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        assert!(!app.should_quit());
        app.on_key(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn history_is_empty_without_recorder() {
        let mut app = app();
        app.on_key(press(KeyCode::Char(' ')));
        assert!(app.history().is_empty());
        assert!(!app.devtools_enabled());
    }

    #[test]
    fn history_tracks_dispatches_with_recorder() {
        let recorder = Arc::new(DispatchRecorder::new(16));
        let store: Store<CounterReducer> = Store::with_enhancer(recorder.clone());
        let mut app = App::new(store, Some(recorder));

        app.on_key(press(KeyCode::Char(' ')));

        // @@INIT plus one dispatch
        let history = app.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].action["type"], "INCREASE_COUNT");
    }
}
