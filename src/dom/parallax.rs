//! Pointer-driven tilt of the profile image.

use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, Window};

use crate::consts::PROFILE_IMAGE_SELECTOR;
use crate::dom::listeners::Listeners;
use crate::dom::{query, set_style};
use crate::error::Result;
use crate::parallax::Tilt;

pub fn install(window: &Window, doc: &Document, strength_deg: f64, listeners: &mut Listeners) -> Result<()> {
    let Some(image) = query(doc, PROFILE_IMAGE_SELECTOR) else {
        log::debug!("no {PROFILE_IMAGE_SELECTOR}; parallax disabled");
        return Ok(());
    };

    let win = window.clone();
    listeners.listen(window, "mousemove", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (Some(width), Some(height)) = (viewport_dimension(win.inner_width()), viewport_dimension(win.inner_height()))
        else {
            return;
        };
        let Some(tilt) = Tilt::from_pointer(
            f64::from(mouse.client_x()),
            f64::from(mouse.client_y()),
            width,
            height,
            strength_deg,
        ) else {
            return;
        };
        if let Err(err) = set_style(&image, "transform", &tilt.to_css()) {
            log::debug!("parallax transform failed: {err}");
        }
    })
}

fn viewport_dimension(value: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> Option<f64> {
    match value {
        Ok(value) => value.as_f64(),
        Err(err) => {
            log::debug!("viewport size unavailable: {err:?}");
            None
        }
    }
}
