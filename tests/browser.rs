//! DOM behavior that only a real page can show: the cursor node, icon styles,
//! timer cancellation and the installed page's resources.

#![cfg(all(target_arch = "wasm32", feature = "web"))]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use portfolio_fx::PageConfig;
use portfolio_fx::consts::{CURSOR_CLASS, HERO_SUBTITLE_SELECTOR};
use portfolio_fx::dom::page::Page;
use portfolio_fx::dom::{buttons, theme};
use portfolio_fx::dom::typewriter::{self, SubtitleSurface};
use portfolio_fx::theme::Theme;
use portfolio_fx::typewriter::{Animator, TextSurface, Typewriter, TypewriterTiming};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
    portfolio_fx::dom::document().unwrap()
}

/// Mount `html` in a fresh container under `<body>`. Callers remove it.
fn fixture(doc: &Document, html: &str) -> Element {
    let container = doc.create_element("div").unwrap();
    container.set_inner_html(html);
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

fn display(doc: &Document, selector: &str) -> String {
    let el = doc.query_selector(selector).unwrap().unwrap();
    el.dyn_into::<HtmlElement>().unwrap().style().get_property_value("display").unwrap()
}

fn fast_timing() -> TypewriterTiming {
    TypewriterTiming { type_delay_ms: 10, full_pause_ms: 10, delete_delay_ms: 10, empty_pause_ms: 10 }
}

/// Counts renders; the count is shared so it can be read after the animator
/// has moved into its timer task.
struct CountingSurface(Rc<Cell<usize>>);

impl TextSurface for CountingSurface {
    fn render(&mut self, _text: &str) {
        self.0.set(self.0.get() + 1);
    }
}

fn counting_animator(renders: &Rc<Cell<usize>>) -> Animator<CountingSurface> {
    let typewriter = Typewriter::new(vec!["Hi".to_owned()], fast_timing()).unwrap();
    Animator::new(typewriter, CountingSurface(Rc::clone(renders)))
}

// =============================================================
// Subtitle surface
// =============================================================

#[wasm_bindgen_test]
fn subtitle_keeps_exactly_one_trailing_cursor() {
    let doc = doc();
    let container = fixture(&doc, r#"<p class="hero-subtitle">static text</p>"#);
    let mut surface = SubtitleSurface::attach(&doc).unwrap().unwrap();

    for text in ["", "H", "Hi", "Hi", "H", ""] {
        surface.render(text);
        let subtitle = doc.query_selector(HERO_SUBTITLE_SELECTOR).unwrap().unwrap();
        let cursors = subtitle.query_selector_all(&format!(".{CURSOR_CLASS}")).unwrap();
        assert_eq!(cursors.length(), 1, "after rendering {text:?}");
        assert_eq!(subtitle.last_element_child().unwrap().class_name(), CURSOR_CLASS);
        assert_eq!(subtitle.text_content().unwrap(), text);
    }

    let subtitle = doc.query_selector(HERO_SUBTITLE_SELECTOR).unwrap().unwrap();
    assert_eq!(subtitle.get_attribute("contenteditable").as_deref(), Some("false"));
    assert_eq!(subtitle.get_attribute("tabindex").as_deref(), Some("-1"));
    container.remove();
}

#[wasm_bindgen_test]
fn missing_subtitle_starts_nothing() {
    let doc = doc();
    assert!(doc.query_selector(HERO_SUBTITLE_SELECTOR).unwrap().is_none());
    let handle = typewriter::start(&doc, &PageConfig::default()).unwrap();
    assert!(handle.is_none());
}

#[wasm_bindgen_test]
async fn first_character_waits_one_typing_beat() {
    let doc = doc();
    let container = fixture(&doc, r#"<p class="hero-subtitle"></p>"#);
    let handle = typewriter::start(&doc, &PageConfig::default()).unwrap().unwrap();
    let subtitle = doc.query_selector(HERO_SUBTITLE_SELECTOR).unwrap().unwrap();

    assert_eq!(subtitle.text_content().unwrap(), "");
    sleep(Duration::from_millis(30)).await;
    assert_eq!(subtitle.text_content().unwrap(), "", "typed before the first 90 ms beat");

    sleep(Duration::from_millis(300)).await;
    assert!(subtitle.text_content().unwrap().starts_with('F'));

    drop(handle);
    container.remove();
}

// =============================================================
// Theme
// =============================================================

#[wasm_bindgen_test]
fn dark_theme_shows_moon_and_marks_body() {
    let doc = doc();
    let container = fixture(
        &doc,
        r#"<button id="themeToggle"><i class="fas fa-moon"></i><i class="fas fa-sun"></i></button>"#,
    );

    theme::apply(&doc, Theme::Dark).unwrap();
    assert_eq!(doc.body().unwrap().get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(display(&doc, "#themeToggle .fa-moon"), "block");
    assert_eq!(display(&doc, "#themeToggle .fa-sun"), "none");

    theme::apply(&doc, Theme::Light).unwrap();
    assert_eq!(doc.body().unwrap().get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(display(&doc, "#themeToggle .fa-moon"), "none");
    assert_eq!(display(&doc, "#themeToggle .fa-sun"), "block");

    container.remove();
}

// =============================================================
// Buttons
// =============================================================

#[wasm_bindgen_test]
fn links_and_buttons_become_clickable() {
    let doc = doc();
    let container = fixture(
        &doc,
        r#"<a id="fx-link" href="mailto:me@example.com">Mail</a><span id="fx-btn" class="btn">Go</span>"#,
    );

    buttons::normalize(&doc).unwrap();
    let style = |id: &str, property: &str| {
        let el = doc.get_element_by_id(id).unwrap().dyn_into::<HtmlElement>().unwrap();
        el.style().get_property_value(property).unwrap()
    };
    assert_eq!(style("fx-link", "cursor"), "pointer");
    assert_eq!(style("fx-link", "pointer-events"), "auto");
    assert_eq!(style("fx-btn", "display"), "inline-flex");
    assert_eq!(
        doc.get_element_by_id("fx-link").unwrap().get_attribute("href").as_deref(),
        Some("mailto:me@example.com")
    );

    container.remove();
}

// =============================================================
// Animator lifecycle
// =============================================================

#[wasm_bindgen_test]
async fn stop_ends_the_timer_chain() {
    let renders = Rc::new(Cell::new(0));
    let mut handle = counting_animator(&renders).start();
    assert!(handle.is_running());

    sleep(Duration::from_millis(80)).await;
    assert!(renders.get() > 1, "no ticks after start");

    handle.stop();
    assert!(!handle.is_running());
    // A sleep that was already due may still land once.
    sleep(Duration::from_millis(30)).await;
    let settled = renders.get();
    sleep(Duration::from_millis(80)).await;
    assert_eq!(renders.get(), settled);
}

#[wasm_bindgen_test]
async fn dropping_the_handle_stops_the_timer_chain() {
    let renders = Rc::new(Cell::new(0));
    let handle = counting_animator(&renders).start();
    sleep(Duration::from_millis(50)).await;
    drop(handle);

    sleep(Duration::from_millis(30)).await;
    let settled = renders.get();
    sleep(Duration::from_millis(80)).await;
    assert_eq!(renders.get(), settled);
}

// =============================================================
// Page
// =============================================================

#[wasm_bindgen_test]
fn installed_page_owns_its_resources() {
    let doc = doc();
    let container = fixture(
        &doc,
        r##"<nav id="navbar"><a class="nav-link" href="#about">About</a></nav>
           <p class="hero-subtitle"></p>
           <section id="about" class="about-card"></section>"##,
    );

    let mut page = Page::install(PageConfig::default()).unwrap();
    assert!(page.listener_count() > 0);
    assert!(page.typewriter_running());
    assert!(page.is_revealing());
    assert_eq!(page.config(), &PageConfig::default());

    page.stop_typewriter();
    assert!(!page.typewriter_running());

    drop(page);
    container.remove();
}
