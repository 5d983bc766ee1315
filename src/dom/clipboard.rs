//! Clipboard copy and the toast that confirms it.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Document, Window};

use crate::consts::{HIDDEN_CLASS, TOAST_CLASS, TOAST_ICON_CLASS};
use crate::dom::query;
use crate::error::{FxError, Result};
use crate::toast::{self, ToastTimings};

/// Write `text` to the clipboard, then show the toast. A rejected write
/// (permission denied, insecure context) is logged and no toast appears.
pub async fn copy(window: &Window, doc: &Document, text: &str, timings: ToastTimings) {
    match write_text(window, text).await {
        Ok(()) => {
            if let Err(err) = show_notification(doc, text, timings) {
                log::warn!("copy notification failed: {err}");
            }
        }
        Err(err) => log::error!("failed to copy: {err}"),
    }
}

async fn write_text(window: &Window, text: &str) -> Result<()> {
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let clipboard = clipboard
        .dyn_into::<Clipboard>()
        .map_err(|_| FxError::Js("clipboard API unavailable".to_owned()))?;
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Replace any existing toast with a new one, hide it after the visible
/// period and remove it once the fade has run.
fn show_notification(doc: &Document, text: &str, timings: ToastTimings) -> Result<()> {
    if let Some(existing) = query(doc, &format!(".{TOAST_CLASS}")) {
        existing.remove();
    }

    let notification = doc.create_element("div")?;
    notification.set_class_name(TOAST_CLASS);
    let icon = doc.create_element("i")?;
    icon.set_class_name(TOAST_ICON_CLASS);
    notification.append_child(&icon)?;
    notification.append_child(&doc.create_text_node(&toast::message(text)))?;
    doc.body().ok_or(FxError::MissingElement("body"))?.append_child(&notification)?;

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(timings.visible()).await;
        if let Err(err) = notification.class_list().add_1(HIDDEN_CLASS) {
            log::debug!("failed to hide notification: {err:?}");
        }
        gloo_timers::future::sleep(timings.fade()).await;
        notification.remove();
    });
    Ok(())
}
