//! Reactive container pairing a reducer with its effect queue.
//!
//! A [`Controller`] lives in the reactive scope of the screen that created it. Dispatches that
//! arrive after the screen is disposed (late fetch completions) are dropped.

use leptos::*;

/// Reducer signature shared by every screen controller.
pub type Reducer<S, A, E> = fn(&mut S, A) -> Vec<E>;

/// Screen state signal plus the queue of effects its reducer emitted.
pub struct Controller<S: 'static, A: 'static, E: 'static> {
    state: RwSignal<S>,
    effects: RwSignal<Vec<E>>,
    reduce: Reducer<S, A, E>,
}

impl<S: 'static, A: 'static, E: 'static> Clone for Controller<S, A, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static, A: 'static, E: 'static> Copy for Controller<S, A, E> {}

impl<S: 'static, A: 'static, E: 'static> Controller<S, A, E> {
    /// Reactive screen state.
    pub fn state(&self) -> RwSignal<S> {
        self.state
    }

    /// Runs the reducer and queues any emitted effects.
    pub fn dispatch(&self, action: A) {
        let reduce = self.reduce;
        let Some(emitted) = self.state.try_update(|state| reduce(state, action)) else {
            return;
        };
        if !emitted.is_empty() {
            let _ = self.effects.try_update(|queue| queue.extend(emitted));
        }
    }
}

/// Creates a controller and installs the executor that drains its effect queue in order.
///
/// `run` receives the controller so asynchronous work can dispatch completion actions.
pub fn create_controller<S, A, E>(
    initial: S,
    reduce: Reducer<S, A, E>,
    run: impl Fn(Controller<S, A, E>, E) + 'static,
) -> Controller<S, A, E>
where
    S: 'static,
    A: 'static,
    E: Clone + 'static,
{
    let controller = Controller {
        state: create_rw_signal(initial),
        effects: create_rw_signal(Vec::new()),
        reduce,
    };

    // Take the batch before running it so effects dispatched during the drain queue afresh.
    create_effect(move |_| {
        let queued = controller.effects.get();
        if queued.is_empty() {
            return;
        }
        controller.effects.set(Vec::new());
        for effect in queued {
            run(controller, effect);
        }
    });

    controller
}
