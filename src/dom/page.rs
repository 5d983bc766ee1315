//! Page lifecycle and the JavaScript-facing exports.
//!
//! ARCHITECTURE
//! ============
//! [`Page`] owns everything the enhancements keep alive: the theme state, the
//! typewriter handle, the reveal observer and every event listener. The
//! installed page sits in a thread-local slot so the exports can reach it;
//! replacing or clearing the slot drops the page, which detaches its
//! listeners and stops its typewriter.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::config::PageConfig;
use crate::dom::listeners::Listeners;
use crate::dom::reveal::RevealObserver;
use crate::dom::theme::{BrowserStore, SharedTheme};
use crate::dom::{buttons, clipboard, document, navigation, parallax, theme, typewriter, window};
use crate::error::Result;
use crate::theme::{Theme, ThemeState};
use crate::typewriter::AnimatorHandle;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

pub struct Page {
    document: Document,
    config: PageConfig,
    theme: SharedTheme,
    typewriter: Option<AnimatorHandle>,
    reveal: Option<RevealObserver>,
    listeners: Listeners,
}

impl Page {
    /// Install every enhancement. Individual failures are logged and the
    /// remaining enhancements still install.
    pub fn install(config: PageConfig) -> Result<Self> {
        config.validate()?;
        let window = window()?;
        let document = document()?;
        let theme = Rc::new(RefCell::new(ThemeState::load(BrowserStore::open(&window))));
        let mut listeners = Listeners::new();

        report("theme", theme::install(&document, &theme, &mut listeners));
        report("navbar", navigation::install_navbar(&window, &document, config.scroll, &mut listeners));
        report("smooth scroll", navigation::install_smooth_scroll(&document, &mut listeners));
        report("back to top", navigation::install_back_to_top(&window, &document, config.scroll, &mut listeners));
        report("shortcuts", navigation::install_shortcuts(&window, &document, &theme, &mut listeners));
        report(
            "parallax",
            parallax::install(&window, &document, config.parallax_strength_deg, &mut listeners),
        );
        report("buttons", buttons::normalize(&document));
        let reveal = settle("reveal", RevealObserver::install(&document));
        let typewriter = settle("typewriter", typewriter::start(&document, &config)).flatten();

        log::info!("portfolio effects loaded ({} listeners)", listeners.len());
        Ok(Self { document, config, theme, typewriter, reveal, listeners })
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.borrow().current()
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        theme::toggle(&self.document, &self.theme)
    }

    pub fn stop_typewriter(&mut self) {
        if let Some(handle) = self.typewriter.as_mut() {
            handle.stop();
        }
    }

    #[must_use]
    pub fn typewriter_running(&self) -> bool {
        self.typewriter.as_ref().is_some_and(AnimatorHandle::is_running)
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }
}

fn report(name: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{name} setup failed: {err}");
    }
}

fn settle<T>(name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{name} setup failed: {err}");
            None
        }
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }
}

/// Replace the installed page, dropping the old one first so its listeners
/// and typewriter are gone before the new ones attach.
fn mount(config: PageConfig) -> Result<()> {
    let previous = PAGE.with(|slot| slot.borrow_mut().take());
    drop(previous);
    let page = Page::install(config)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn mount_when_ready(doc: &Document) {
    if doc.ready_state() != "loading" {
        report("page", mount(PageConfig::default()));
        return;
    }
    let callback = Closure::once_into_js(|| report("page", mount(PageConfig::default())));
    if let Err(err) = doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::warn!("failed to wait for DOMContentLoaded: {err:?}");
        report("page", mount(PageConfig::default()));
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    match document() {
        Ok(doc) => mount_when_ready(&doc),
        Err(err) => log::warn!("not running in a browser page: {err}"),
    }
}

/// Reinstall the page with a JSON config (camelCase keys, any subset).
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> std::result::Result<(), JsValue> {
    let config = PageConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    mount(config).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Toggle the theme. Returns the new theme, or `undefined` before the page is
/// installed.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    PAGE.with(|slot| {
        let slot = slot.borrow();
        let page = slot.as_ref()?;
        match page.toggle_theme() {
            Ok(theme) => Some(theme.as_str().to_owned()),
            Err(err) => {
                log::warn!("theme toggle failed: {err}");
                Some(page.theme().as_str().to_owned())
            }
        }
    })
}

#[wasm_bindgen(js_name = stopTypewriter)]
pub fn stop_typewriter() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().as_mut() {
            page.stop_typewriter();
        }
    });
}

/// Copy `text` and confirm with a toast. Failures only reach the console.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    let (window, doc) = match (window(), document()) {
        (Ok(window), Ok(doc)) => (window, doc),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("failed to copy: {err}");
            return;
        }
    };
    let timings = PAGE.with(|slot| slot.borrow().as_ref().map(|page| page.config().toast)).unwrap_or_default();
    wasm_bindgen_futures::spawn_local(async move {
        clipboard::copy(&window, &doc, &text, timings).await;
    });
}
