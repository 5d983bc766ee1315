//! Browser wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule binds one affordance to the DOM. The decisions they act on
//! live in the pure modules at the crate root; this layer only reads the page,
//! calls into that logic, and writes classes, attributes and inline styles
//! back. A missing element means the affordance is skipped, never an error
//! surfaced to the visitor.

pub mod buttons;
pub mod clipboard;
pub mod listeners;
pub mod navigation;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod theme;
pub mod typewriter;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{FxError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(FxError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(FxError::NoDocument)
}

/// First match for `selector`, treating an invalid selector as no match.
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("selector {selector:?} rejected: {err:?}");
            None
        }
    }
}

/// Every match for `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("selector {selector:?} rejected: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

/// Set an inline style property. Elements without a style declaration are
/// left alone.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<()> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn remove_style(el: &Element, property: &str) -> Result<()> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().remove_property(property)?;
    }
    Ok(())
}

/// Add `class` when `on`, remove it otherwise.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<()> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn scroll_y(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::debug!("scrollY unavailable: {err:?}");
            0.0
        }
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top(window: &Window) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
