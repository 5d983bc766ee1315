//! Navbar state, section highlighting, anchor scrolling, back-to-top and the
//! keyboard shortcuts.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::consts::{
    ACTIVE_CLASS, BACK_TO_TOP_ID, IN_PAGE_ANCHOR_SELECTOR, NAV_LINK_SELECTOR, NAVBAR_ID, SCROLLED_CLASS,
    SECTION_SELECTOR, VISIBLE_CLASS,
};
use crate::dom::listeners::Listeners;
use crate::dom::theme::{self, SharedTheme};
use crate::dom::{query, query_all, scroll_to_top, scroll_y, set_class};
use crate::error::Result;
use crate::keys::Shortcut;
use crate::scroll::{ScrollThresholds, Section, anchor_target, link_targets};

/// Toggle `scrolled` on the navbar and `active` on the nav link of the
/// current section whenever the page scrolls.
pub fn install_navbar(
    window: &Window,
    doc: &Document,
    thresholds: ScrollThresholds,
    listeners: &mut Listeners,
) -> Result<()> {
    let navbar = doc.get_element_by_id(NAVBAR_ID);
    if navbar.is_none() {
        log::debug!("no #{NAVBAR_ID}; only section highlighting is active");
    }
    let links = query_all(doc, NAV_LINK_SELECTOR);
    let sections = query_all(doc, SECTION_SELECTOR);

    let win = window.clone();
    listeners.listen(window, "scroll", move |_| {
        let y = scroll_y(&win);
        if let Some(navbar) = &navbar {
            if let Err(err) = set_class(navbar, SCROLLED_CLASS, thresholds.navbar_scrolled(y)) {
                log::debug!("navbar class update failed: {err}");
            }
        }
        if let Err(err) = highlight_active_link(y, &thresholds, &sections, &links) {
            log::debug!("nav link update failed: {err}");
        }
    })
}

fn highlight_active_link(
    scroll_y: f64,
    thresholds: &ScrollThresholds,
    sections: &[Element],
    links: &[Element],
) -> Result<()> {
    let ids: Vec<(String, f64)> = sections
        .iter()
        .map(|section| {
            let top = section.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()));
            (section.id(), top)
        })
        .collect();
    let boxes: Vec<Section<'_>> = ids.iter().map(|(id, top)| Section { id: id.as_str(), offset_top: *top }).collect();
    let current = thresholds.active_section(scroll_y, &boxes);

    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        let active = current.is_some_and(|id| link_targets(&href, id));
        set_class(link, ACTIVE_CLASS, active)?;
    }
    Ok(())
}

/// Smooth-scroll in-page anchors to their target instead of jumping.
pub fn install_smooth_scroll(doc: &Document, listeners: &mut Listeners) -> Result<()> {
    for anchor in query_all(doc, IN_PAGE_ANCHOR_SELECTOR) {
        let doc = doc.clone();
        let link = anchor.clone();
        listeners.listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Some(target) = query(&doc, selector) {
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

/// Show `#backToTop` past the threshold and scroll up when it is clicked.
pub fn install_back_to_top(
    window: &Window,
    doc: &Document,
    thresholds: ScrollThresholds,
    listeners: &mut Listeners,
) -> Result<()> {
    let Some(button) = doc.get_element_by_id(BACK_TO_TOP_ID) else {
        log::debug!("no #{BACK_TO_TOP_ID}; back-to-top disabled");
        return Ok(());
    };

    let win = window.clone();
    let shown = button.clone();
    listeners.listen(window, "scroll", move |_| {
        if let Err(err) = set_class(&shown, VISIBLE_CLASS, thresholds.back_to_top_visible(scroll_y(&win))) {
            log::debug!("back-to-top class update failed: {err}");
        }
    })?;

    let win = window.clone();
    listeners.listen(&button, "click", move |_| scroll_to_top(&win))
}

/// `t`/`T` toggles the theme, `Home` scrolls to the top.
pub fn install_shortcuts(
    window: &Window,
    doc: &Document,
    theme_state: &SharedTheme,
    listeners: &mut Listeners,
) -> Result<()> {
    let win = window.clone();
    let page = doc.clone();
    let state = Rc::clone(theme_state);
    listeners.listen(doc, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        match Shortcut::from_key(&key) {
            Some(Shortcut::ToggleTheme) => {
                if let Err(err) = theme::toggle(&page, &state) {
                    log::warn!("theme toggle failed: {err}");
                }
            }
            Some(Shortcut::ScrollToTop) => scroll_to_top(&win),
            None => {}
        }
    })
}
