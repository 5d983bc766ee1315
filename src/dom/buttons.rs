//! Make links and `.btn` elements look and behave clickable regardless of
//! what the stylesheet does to them. Native link behavior (mailto, download)
//! is left alone.

use web_sys::Document;

use crate::consts::{BUTTON_SELECTOR, LINK_SELECTOR};
use crate::dom::{query_all, set_style};
use crate::error::Result;

pub fn normalize(doc: &Document) -> Result<()> {
    for link in query_all(doc, LINK_SELECTOR) {
        set_style(&link, "pointer-events", "auto")?;
        set_style(&link, "cursor", "pointer")?;
    }
    for button in query_all(doc, BUTTON_SELECTOR) {
        set_style(&button, "pointer-events", "auto")?;
        set_style(&button, "cursor", "pointer")?;
        set_style(&button, "display", "inline-flex")?;
    }
    Ok(())
}
