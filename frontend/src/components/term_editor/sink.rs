//! Sends a finished term to a new browser window and opens the print dialog.

use common::term::sink::DocumentSink;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

use super::helpers::show_toast;

const PRINT_DELAY_MS: u32 = 500;
const REVOKE_DELAY_MS: u32 = 60_000;

pub struct WindowPrintSink;

impl DocumentSink for WindowPrintSink {
    fn render(&mut self, html: String) {
        if let Err(err) = open_and_print(&html) {
            gloo_console::error!(err.clone());
            show_toast("Não foi possível abrir a janela de impressão. Verifique o bloqueador de pop-ups.");
        }
    }
}

fn open_and_print(html: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(html));
    let options = BlobPropertyBag::new();
    options.set_type("text/html;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let Some(print_window) = window.open_with_url(&url)? else {
        let _ = Url::revoke_object_url(&url);
        return Err(JsValue::from_str("popup blocked"));
    };

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(PRINT_DELAY_MS).await;
        if let Err(err) = print_window.print() {
            gloo_console::error!(err);
        }
        TimeoutFuture::new(REVOKE_DELAY_MS).await;
        let _ = Url::revoke_object_url(&url);
    });
    Ok(())
}
