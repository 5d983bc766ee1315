//! Scroll-driven navigation state.
//!
//! Pure decisions behind the scroll listeners: when the navbar is condensed,
//! when the back-to-top control shows, which section is current, and which
//! in-page anchors have a scroll target.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BACK_TO_TOP_PX, NAVBAR_SCROLLED_PX, SECTION_OFFSET_PX};

/// Scroll offsets, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollThresholds {
    pub navbar_scrolled_px: f64,
    pub back_to_top_px: f64,
    pub section_offset_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            navbar_scrolled_px: NAVBAR_SCROLLED_PX,
            back_to_top_px: BACK_TO_TOP_PX,
            section_offset_px: SECTION_OFFSET_PX,
        }
    }
}

impl ScrollThresholds {
    #[must_use]
    pub fn navbar_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.navbar_scrolled_px
    }

    #[must_use]
    pub fn back_to_top_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.back_to_top_px
    }

    /// The last section, in document order, whose top (less the section
    /// offset) has been scrolled past.
    #[must_use]
    pub fn active_section<'a>(&self, scroll_y: f64, sections: &[Section<'a>]) -> Option<&'a str> {
        sections
            .iter()
            .rev()
            .find(|section| scroll_y >= section.offset_top - self.section_offset_px)
            .map(|section| section.id)
    }
}

/// A `section[id]` and its distance from the top of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section<'a> {
    pub id: &'a str,
    pub offset_top: f64,
}

/// Whether a nav link's `href` points at section `id`.
#[must_use]
pub fn link_targets(href: &str, id: &str) -> bool {
    href.contains(&format!("#{id}"))
}

/// The selector an in-page anchor scrolls to, or `None` for a bare `#` and
/// anything that is not a fragment.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') { Some(href) } else { None }
}
