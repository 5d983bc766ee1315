//! Shared constants for the page effects.

// ── Typewriter ──────────────────────────────────────────────────

/// Delay after each typed character, in milliseconds.
pub const TYPE_DELAY_MS: u64 = 90;

/// Pause while the full phrase is shown, in milliseconds.
pub const FULL_PAUSE_MS: u64 = 1000;

/// Delay after each deleted character, in milliseconds.
pub const DELETE_DELAY_MS: u64 = 60;

/// Pause on the empty line before the next phrase, in milliseconds.
pub const EMPTY_PAUSE_MS: u64 = 200;

/// Phrases cycled through the hero subtitle.
pub const DEFAULT_PHRASES: [&str; 2] = ["Full Stack Developer", "UI/UX Designer"];

pub const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle";
pub const CURSOR_CLASS: &str = "typewriter-cursor";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MOON_ICON_SELECTOR: &str = ".fa-moon";
pub const SUN_ICON_SELECTOR: &str = ".fa-sun";

/// Cards that get a backdrop blur in the light theme.
pub const LIGHT_CARD_SELECTOR: &str =
    ".about-card, .experience-card, .expertise-card, .project-card, .contact-info, .cta-card";
pub const LIGHT_CARD_BACKDROP: &str = "blur(10px)";

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset past which the navbar gets the `scrolled` class.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Scroll offset past which the back-to-top control is shown.
pub const BACK_TO_TOP_PX: f64 = 500.0;

/// A section becomes active this many pixels before its top edge.
pub const SECTION_OFFSET_PX: f64 = 200.0;

pub const NAVBAR_ID: &str = "navbar";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".about-card, .experience-card, .expertise-card, .project-card, .contact-info, .cta-card, .glass-card";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_ANIMATION: &str = "fadeInUp 0.8s cubic-bezier(0.22, 0.9, 0.2, 1) forwards";

// ── Parallax ────────────────────────────────────────────────────

pub const PROFILE_IMAGE_SELECTOR: &str = ".profile-image";

/// Maximum tilt span in degrees across the full viewport.
pub const PARALLAX_STRENGTH_DEG: f64 = 20.0;
pub const PARALLAX_PERSPECTIVE_PX: u32 = 1000;

// ── Toast ───────────────────────────────────────────────────────

pub const TOAST_CLASS: &str = "copy-notification";
pub const TOAST_ICON_CLASS: &str = "fas fa-check";
pub const HIDDEN_CLASS: &str = "hidden";

/// How long the copy toast stays fully visible, in milliseconds.
pub const TOAST_VISIBLE_MS: u64 = 2500;

/// Fade-out time between `hidden` and removal, in milliseconds.
pub const TOAST_FADE_MS: u64 = 400;

// ── Buttons ─────────────────────────────────────────────────────

pub const LINK_SELECTOR: &str = "a[href]";
pub const BUTTON_SELECTOR: &str = ".btn";
