//! Update function for the term editor component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Template editing with undo/redo over whole `Settings` snapshots.
//! - Inserting tokens and anchors at the textarea selection.
//! - Logo upload: file -> base64 data URL -> `logoUrl`.
//! - Persisting the settings via a backend POST, with toast feedback.
//! - Printing the preview through `WindowPrintSink`.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, File};
use gloo_net::http::Request;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::HtmlTextAreaElement;

use yew::platform::spawn_local;
use yew::prelude::*;

use common::term::generate_into;

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{
    byte_to_utf16_idx, settings_md5, show_toast, splice_at, token_at_cursor, utf16_to_byte_idx,
};
use super::messages::Msg;
use super::sample::SampleTerm;
use super::sink::WindowPrintSink;
use super::state::{Pane, TermEditorComponent};

pub fn update(
    component: &mut TermEditorComponent,
    ctx: &Context<TermEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTemplateKind(kind) => {
            if component.active_template == kind {
                return false;
            }
            component.active_template = kind;
            component.cursor_token = None;
            schedule_resize(ctx);
            true
        }
        Msg::SetPane(pane) => {
            component.active_pane = pane;
            if pane == Pane::Editor {
                schedule_resize(ctx);
            }
            true
        }
        Msg::UpdateText(new_text) => {
            if component.current_template() == new_text {
                return false;
            }
            component.set_current_template(new_text);
            component.push_history();
            set_window_dirty_flag(component);
            true
        }
        Msg::UpdateAppName(name) => {
            component.settings.app_name = name;
            component.push_history();
            set_window_dirty_flag(component);
            true
        }
        Msg::UpdateCnpj(cnpj) => {
            component.settings.cnpj = Some(cnpj).filter(|c| !c.trim().is_empty());
            component.push_history();
            set_window_dirty_flag(component);
            true
        }
        Msg::Undo => {
            if component.history_index > 0 {
                component.history_index -= 1;
                component.settings = component.history[component.history_index].clone();
                set_window_dirty_flag(component);
                schedule_resize(ctx);
            }
            true
        }
        Msg::Redo => {
            if component.history_index + 1 < component.history.len() {
                component.history_index += 1;
                component.settings = component.history[component.history_index].clone();
                set_window_dirty_flag(component);
                schedule_resize(ctx);
            }
            true
        }
        Msg::InsertAtCursor(snippet) => {
            close_top_sheet(component.tokens_dialog_ref.clone());
            let Some(textarea) = component.textarea_ref.cast::<HtmlTextAreaElement>() else {
                show_toast("Abra a aba Editor para inserir variáveis.");
                return false;
            };

            let text = component.current_template().to_string();
            let start_utf16 = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
            let end_utf16 = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
            let start = utf16_to_byte_idx(&text, start_utf16);
            let end = utf16_to_byte_idx(&text, end_utf16);

            let (new_text, after) = splice_at(&text, start, end, &snippet);
            let caret = byte_to_utf16_idx(&new_text, after);
            textarea.set_value(&new_text);
            component.set_current_template(new_text);
            component.push_history();
            set_window_dirty_flag(component);

            let textarea_ref = component.textarea_ref.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(10).await;
                if let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() {
                    textarea.set_selection_range(caret, caret).ok();
                    textarea.focus().ok();
                }
            });
            ctx.link().send_message(Msg::AutoResize);
            true
        }
        Msg::CursorMoved(pos) => {
            let token = token_at_cursor(component.current_template(), pos as usize);
            if token == component.cursor_token {
                return false;
            }
            component.cursor_token = token;
            true
        }
        Msg::AutoResize => {
            component.resize_textarea();
            false
        }
        Msg::OpenTokensDialog => {
            open_top_sheet(component.tokens_dialog_ref.clone());
            false
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::LogoSelected(file) => {
            let mime = match file.type_() {
                t if t.starts_with("image/") => t,
                _ => {
                    show_toast("Selecione um arquivo de imagem.");
                    return false;
                }
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let file = File::from(file);
                match read_as_bytes(&file).await {
                    Ok(bytes) => {
                        let base64 = general_purpose::STANDARD.encode(&bytes);
                        link.send_message(Msg::SetLogo(format!("data:{};base64,{}", mime, base64)));
                    }
                    Err(err) => show_toast(&format!("Erro ao ler a imagem: {}", err)),
                }
            });
            false
        }
        Msg::SetLogo(data_url) => {
            component.settings.logo_url = data_url;
            component.push_history();
            set_window_dirty_flag(component);
            true
        }
        Msg::RemoveLogo => {
            component.settings.logo_url.clear();
            component.push_history();
            set_window_dirty_flag(component);
            true
        }
        Msg::Save => {
            let settings = component.settings.clone();
            let url = format!("{}/save", ctx.props().settings_url);
            let link = ctx.link().clone();
            spawn_local(async move {
                let request = match Request::post(&url).json(&settings) {
                    Ok(request) => request,
                    Err(err) => {
                        show_toast(&format!("Erro ao salvar: {}", err));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.status() == 200 => {
                        link.send_message(Msg::SaveSucceeded);
                        show_toast(&response.text().await.unwrap_or_default());
                    }
                    Ok(response) => {
                        show_toast(&format!(
                            "Erro ao salvar: {}",
                            response.text().await.unwrap_or_default()
                        ));
                    }
                    Err(err) => {
                        show_toast(&format!("Erro ao salvar: {}", err));
                    }
                }
            });
            false
        }
        Msg::SaveSucceeded => {
            component.original_md5 = Some(settings_md5(&component.settings));
            set_window_dirty_flag(component);
            true
        }
        Msg::SetSettings(settings) => {
            component.settings = settings;
            component.original_md5 = Some(settings_md5(&component.settings));
            component.reset_history();
            set_window_dirty_flag(component);
            schedule_resize(ctx);
            true
        }
        Msg::Print => {
            let sample = SampleTerm::new();
            let request = sample.request(&component.settings, component.active_template);
            let term = generate_into(&request, &mut WindowPrintSink);
            for slot in term.dropped_slots() {
                show_toast(&format!("O modelo não tem lugar para: {}", slot.label()));
            }
            false
        }
    }
}

fn schedule_resize(ctx: &Context<TermEditorComponent>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        link.send_message(Msg::AutoResize);
    });
}

/// Mirrors the unsaved-changes state into `window.app_dirty`, read by the
/// page's `beforeunload` handler.
fn set_window_dirty_flag(component: &TermEditorComponent) {
    if let Some(window) = web_sys::window() {
        let dirty = component
            .original_md5
            .as_ref()
            .is_some_and(|orig| orig != &settings_md5(&component.settings));
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
