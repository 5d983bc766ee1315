//! Browser enhancements for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by a pre-rendered page. It
//! owns the small amount of client-side behavior the page has: the persisted
//! light/dark theme, scroll-driven navbar state, smooth anchor scrolling,
//! reveal-on-scroll, pointer parallax, the back-to-top control, clipboard copy
//! with a toast, and the looping typewriter in the hero subtitle.
//!
//! Every piece of state logic lives in plain Rust modules that build and test
//! natively. The `web` feature adds [`dom`], which binds that logic to the
//! browser through `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`typewriter`] | Typewriter state machine and the [`typewriter::Animator`] driver |
//! | [`theme`] | Theme flag, preference storage seam, and the owned [`theme::ThemeState`] |
//! | [`scroll`] | Navbar / back-to-top thresholds, active section, anchor targets |
//! | [`parallax`] | Pointer position to profile-image tilt |
//! | [`keys`] | Keyboard shortcuts |
//! | [`toast`] | Copy-notification text and timings |
//! | [`config`] | [`config::PageConfig`], loadable from JSON |
//! | [`consts`] | Shared constants (delays, thresholds, selectors) |
//! | [`error`] | [`error::FxError`] and the crate `Result` alias |
//! | `dom` | Browser wiring, only with the `web` feature |

pub mod config;
pub mod consts;
pub mod error;
pub mod keys;
pub mod parallax;
pub mod scroll;
pub mod theme;
pub mod toast;
pub mod typewriter;

#[cfg(feature = "web")]
pub mod dom;

pub use config::PageConfig;
pub use error::{FxError, Result};
