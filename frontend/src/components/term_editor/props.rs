//! Properties for the `TermEditorComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TermEditorProps {
    /// Endpoint the settings are read from on first render. Saving posts to
    /// the same path with `/save` appended.
    #[prop_or(AttrValue::Static("/api/settings"))]
    pub settings_url: AttrValue,
}
