use crate::{update, AppViewModel, Effect, Msg, SubmissionState};

/// Receives a fresh view model every time the controller's state changes.
pub trait ViewObserver {
    fn on_view(&mut self, view: &AppViewModel);
}

impl<F> ViewObserver for F
where
    F: FnMut(&AppViewModel),
{
    fn on_view(&mut self, view: &AppViewModel) {
        self(view)
    }
}

/// Owns the submission state and fans view updates out to observers.
///
/// Effects are returned to the caller rather than executed, so the controller
/// stays free of IO and can be driven synchronously in tests.
#[derive(Default)]
pub struct RequestController {
    state: SubmissionState,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl ViewObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        self.state = state;

        if changed {
            let view = self.state.view();
            for observer in &mut self.observers {
                observer.on_view(&view);
            }
        }
        effects
    }
}
