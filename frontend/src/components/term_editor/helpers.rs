//! Utility functions for the term editor component.
//!
//! - **Index Conversion**: browser textarea APIs report positions in UTF-16
//!   code units, Rust slices strings by UTF-8 byte.
//! - **Token Detection**: finding the `{TOKEN}` the cursor sits in.
//! - **User Feedback**: temporary toast notifications.
//! - **Dirty Tracking**: MD5 of the serialized settings.

use common::model::settings::Settings;
use common::term::substitute::TOKEN_PATTERN;
use common::term::tokens::Token;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Known token whose `{...}` contains the cursor, edges included.
pub fn token_at_cursor(text: &str, cursor_pos_utf16: usize) -> Option<Token> {
    let cursor = utf16_to_byte_idx(text, cursor_pos_utf16);
    TOKEN_PATTERN
        .captures_iter(text)
        .find(|caps| {
            let whole = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            cursor >= start && cursor <= start + whole.len()
        })
        .and_then(|caps| Token::from_name(&caps[1]))
}

/// Replaces the byte range `start..end` with `snippet` and returns the new
/// text with the byte offset right after the inserted snippet.
pub fn splice_at(text: &str, start: usize, end: usize, snippet: &str) -> (String, usize) {
    let start = start.min(text.len());
    let end = end.clamp(start, text.len());
    let mut out = String::with_capacity(text.len() + snippet.len());
    out.push_str(&text[..start]);
    out.push_str(snippet);
    out.push_str(&text[end..]);
    (out, start + snippet.len())
}

pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}

pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// Displays a temporary notification at the bottom of the screen.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Fingerprint of everything the save button would send.
pub fn settings_md5(settings: &Settings) -> String {
    compute_md5(&serde_json::to_string(settings).unwrap_or_default())
}
