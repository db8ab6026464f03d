//! Component state for the term template editor.
//!
//! The editor works on a whole `Settings` value: the company fields and both
//! templates. Undo/redo snapshots the full value so switching template tabs
//! never loses history.

use common::model::settings::Settings;
use common::term::tokens::Token;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Which template the editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Delivery,
    Return,
}

impl TemplateKind {
    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Delivery => "Termo de Entrega",
            TemplateKind::Return => "Termo de Devolução",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Editor,
    Preview,
}

pub struct TermEditorComponent {
    /// Settings being edited. Saved as a whole.
    pub settings: Settings,

    /// Linear history of `settings` snapshots for undo/redo.
    pub history: Vec<Settings>,
    pub history_index: usize,

    pub active_template: TemplateKind,
    pub active_pane: Pane,

    pub textarea_ref: NodeRef,
    pub file_input_ref: NodeRef,
    pub tokens_dialog_ref: NodeRef,

    /// Token the textarea cursor currently sits in, if any.
    pub cursor_token: Option<Token>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// MD5 of the serialized settings at last load or save.
    pub original_md5: Option<String>,
}

impl TermEditorComponent {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            history: vec![Settings::default()],
            history_index: 0,
            active_template: TemplateKind::Delivery,
            active_pane: Pane::Editor,
            textarea_ref: Default::default(),
            file_input_ref: Default::default(),
            tokens_dialog_ref: Default::default(),
            cursor_token: None,
            loaded: false,
            original_md5: None,
        }
    }

    /// Text of the template selected by the active tab.
    pub fn current_template(&self) -> &str {
        let template = match self.active_template {
            TemplateKind::Delivery => &self.settings.term_template,
            TemplateKind::Return => &self.settings.return_term_template,
        };
        template.as_deref().unwrap_or_default()
    }

    pub fn set_current_template(&mut self, text: String) {
        let slot = match self.active_template {
            TemplateKind::Delivery => &mut self.settings.term_template,
            TemplateKind::Return => &mut self.settings.return_term_template,
        };
        *slot = Some(text);
    }

    /// Records the current settings as a new history entry, dropping any
    /// redo tail. No-op when nothing changed.
    pub fn push_history(&mut self) {
        if self.history.get(self.history_index) == Some(&self.settings) {
            return;
        }
        self.history.truncate(self.history_index + 1);
        self.history.push(self.settings.clone());
        self.history_index = self.history.len() - 1;
    }

    /// Starts a fresh history from the current settings.
    pub fn reset_history(&mut self) {
        self.history = vec![self.settings.clone()];
        self.history_index = 0;
    }

    /// Grows the textarea to its `scrollHeight` so it never scrolls internally.
    pub fn resize_textarea(&self) {
        if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(html_elem) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = html_elem.style();
                let _ = style.set_property("height", "auto");
                let scroll_height = textarea.scroll_height();
                let _ = style.set_property("height", &format!("{}px", scroll_height));
            }
        }
    }
}
