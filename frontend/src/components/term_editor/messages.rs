use common::model::settings::Settings;

use super::state::{Pane, TemplateKind};

#[derive(Clone)]
pub enum Msg {
    SetTemplateKind(TemplateKind),
    SetPane(Pane),
    UpdateText(String),
    UpdateAppName(String),
    UpdateCnpj(String),
    Undo,
    Redo,
    InsertAtCursor(String),
    CursorMoved(u32),
    AutoResize,
    OpenTokensDialog,
    OpenFileDialog,
    LogoSelected(web_sys::File),
    SetLogo(String),
    RemoveLogo,
    Save,
    SaveSucceeded,
    SetSettings(Settings),
    Print,
}
