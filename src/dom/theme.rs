//! Theme persistence in `localStorage` and its reflection in the page.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Storage, Window};

use crate::consts::{LIGHT_CARD_SELECTOR, MOON_ICON_SELECTOR, SUN_ICON_SELECTOR, THEME_ATTRIBUTE, THEME_TOGGLE_ID};
use crate::dom::listeners::Listeners;
use crate::dom::{query_all, remove_style, set_style};
use crate::error::{FxError, Result};
use crate::theme::{IconVisibility, PreferenceStore, Theme, ThemeState};

/// [`PreferenceStore`] over `window.localStorage`. Reads find nothing and
/// writes are skipped when storage is unavailable.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("failed to read {key:?}: {err:?}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => {
                storage.set_item(key, value)?;
                Ok(())
            }
            None => Err(FxError::Js("localStorage unavailable".to_owned())),
        }
    }
}

pub type SharedTheme = Rc<RefCell<ThemeState<BrowserStore>>>;

/// Reflect `theme` into the page: `data-theme` on `<body>`, the toggle's
/// moon/sun icons, and the card backdrop used by the light theme.
pub fn apply(doc: &Document, theme: Theme) -> Result<()> {
    let body = doc.body().ok_or(FxError::MissingElement("body"))?;
    body.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;

    if let Some(toggle) = doc.get_element_by_id(THEME_TOGGLE_ID) {
        let moon = toggle.query_selector(MOON_ICON_SELECTOR)?;
        let sun = toggle.query_selector(SUN_ICON_SELECTOR)?;
        if let (Some(moon), Some(sun)) = (moon, sun) {
            let icons = theme.icons();
            set_style(&moon, "display", IconVisibility::display(icons.moon))?;
            set_style(&sun, "display", IconVisibility::display(icons.sun))?;
        }
    }

    for card in query_all(doc, LIGHT_CARD_SELECTOR) {
        match theme.card_backdrop() {
            Some(filter) => set_style(&card, "backdrop-filter", filter)?,
            None => remove_style(&card, "backdrop-filter")?,
        }
    }
    Ok(())
}

/// The one toggle path shared by the button, the shortcut and the export.
pub fn toggle(doc: &Document, state: &SharedTheme) -> Result<Theme> {
    let next = state.borrow_mut().toggle();
    log::debug!("theme switched to {next}");
    apply(doc, next)?;
    Ok(next)
}

/// Apply the stored theme and hook the toggle control.
pub fn install(doc: &Document, state: &SharedTheme, listeners: &mut Listeners) -> Result<()> {
    let current = state.borrow().current();
    apply(doc, current)?;

    let Some(control) = doc.get_element_by_id(THEME_TOGGLE_ID) else {
        log::debug!("no #{THEME_TOGGLE_ID}; theme toggle disabled");
        return Ok(());
    };
    let doc = doc.clone();
    let state = Rc::clone(state);
    listeners.listen(&control, "click", move |_| {
        if let Err(err) = toggle(&doc, &state) {
            log::warn!("theme toggle failed: {err}");
        }
    })
}
