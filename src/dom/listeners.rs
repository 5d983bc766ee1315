//! Owned event-listener registrations.
//!
//! Every listener the page installs is held here together with its target.
//! Dropping a [`Listeners`] detaches all of them before their closures are
//! freed, so nothing can call into a dropped closure.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::Result;

struct Registration {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to detach {} listener: {err:?}", self.kind);
        }
    }
}

#[derive(Default)]
pub struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` for `kind` events on `target` and keep it alive until
    /// this registry is dropped.
    pub fn listen<F>(&mut self, target: &EventTarget, kind: &'static str, handler: F) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.registrations.push(Registration { target: target.clone(), kind, callback });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
