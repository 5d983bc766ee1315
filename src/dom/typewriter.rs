//! The hero subtitle as a typewriter surface.

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::consts::{CURSOR_CLASS, HERO_SUBTITLE_SELECTOR};
use crate::dom::query;
use crate::error::Result;
use crate::typewriter::{Animator, AnimatorHandle, TextSurface};

/// The subtitle element plus the one cursor span that follows its text.
pub struct SubtitleSurface {
    element: Element,
    cursor: Element,
}

impl SubtitleSurface {
    /// Prepare the subtitle, or `None` when the page has none.
    pub fn attach(doc: &Document) -> Result<Option<Self>> {
        let Some(element) = query(doc, HERO_SUBTITLE_SELECTOR) else {
            return Ok(None);
        };
        element.set_attribute("contenteditable", "false")?;
        element.set_attribute("tabindex", "-1")?;
        let cursor = doc.create_element("span")?;
        cursor.set_class_name(CURSOR_CLASS);
        Ok(Some(Self { element, cursor }))
    }
}

impl TextSurface for SubtitleSurface {
    fn render(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
        // Moves the existing cursor node; it is never cloned.
        if let Err(err) = self.element.append_child(&self.cursor) {
            log::debug!("failed to place typewriter cursor: {err:?}");
        }
    }
}

/// Start the subtitle typewriter. `Ok(None)` when there is no subtitle, in
/// which case no timer is scheduled.
pub fn start(doc: &Document, config: &PageConfig) -> Result<Option<AnimatorHandle>> {
    let Some(surface) = SubtitleSurface::attach(doc)? else {
        log::debug!("no {HERO_SUBTITLE_SELECTOR}; typewriter disabled");
        return Ok(None);
    };
    let animator = Animator::new(config.typewriter()?, surface);
    Ok(Some(animator.start()))
}
