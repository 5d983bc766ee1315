//! Reveal-on-scroll: cards animate in the first time they enter the viewport.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{REVEAL_ANIMATION, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom::{query_all, set_style};
use crate::error::Result;

/// Owns the observer and its callback. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl RevealObserver {
    /// Observe every reveal target. Each one is animated once and then
    /// unobserved.
    pub fn install(doc: &Document) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(err) = set_style(&target, "animation", REVEAL_ANIMATION) {
                        log::debug!("reveal animation failed: {err}");
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let targets = query_all(doc, REVEAL_SELECTOR);
        log::debug!("observing {} reveal targets", targets.len());
        for target in &targets {
            observer.observe(target);
        }
        Ok(Self { observer, _callback: callback })
    }
}
