//! Application state hooks.
use crate::app::AppStateHandle;
use carewatch_core::ApplicationState;
use std::rc::Rc;
use yew::prelude::*;

/// Gets the store to dispatch updates.
#[hook]
pub fn use_app_state_store() -> AppStateHandle {
    use_context::<AppStateHandle>().expect("`AppStateHandle` context not found")
}

/// Gets the current state.
/// The component re-renders on every state change.
#[hook]
pub fn use_app_state() -> Rc<ApplicationState> {
    let store = use_app_state_store();
    let state = use_state(|| store.state());

    {
        let state = state.clone();
        use_effect_with(store, move |store| {
            // catch changes made before subscribing
            state.set(store.state());

            let subscription = store.subscribe(move |next| state.set(next.clone()));
            move || drop(subscription)
        });
    }

    (*state).clone()
}
