use common::term::slots::Slot;
use common::term::tokens::Token;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::term_editor::{Msg, TermEditorComponent};
use crate::tops_sheet::top_sheet::{close_top_sheet, TopSheet};

/// Lists every token and anchor with its description. Clicking one inserts
/// it at the cursor.
pub fn tokens_dialog(component: &TermEditorComponent, link: &Scope<TermEditorComponent>) -> Html {
    let dialog_ref = component.tokens_dialog_ref.clone();
    let on_close = {
        let dr = dialog_ref.clone();
        Callback::from(move |_| close_top_sheet(dr.clone()))
    };

    let token_rows = Token::ALL
        .into_iter()
        .map(|token| entry(link, token.placeholder(), token.description()))
        .collect::<Html>();

    let anchor_rows = Slot::ALL
        .into_iter()
        .map(|slot| entry(link, slot.anchor().to_string(), slot.label()))
        .collect::<Html>();

    html! {
        <TopSheet node_ref={dialog_ref}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
                <button
                    onclick={on_close}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>
                <div style="background:#fff;border-radius:8px;padding:16px 24px;max-height:80vh;overflow:auto;min-width:480px;">
                    <h3 style="margin-top:0;">{"Variáveis"}</h3>
                    { token_rows }
                    <h3>{"Marcadores do termo de devolução"}</h3>
                    { anchor_rows }
                </div>
            </div>
        </TopSheet>
    }
}

fn entry(link: &Scope<TermEditorComponent>, snippet: String, description: &'static str) -> Html {
    let label = snippet.clone();
    html! {
        <div style="display:flex;justify-content:space-between;gap:16px;padding:4px 0;border-bottom:1px solid #f3f4f6;">
            <button
                style="font-family:monospace;background:#eef2ff;border:none;border-radius:4px;padding:2px 8px;cursor:pointer;"
                onclick={link.callback(move |_| Msg::InsertAtCursor(snippet.clone()))}
            >
                { label }
            </button>
            <span style="color:#4b5563;">{ description }</span>
        </div>
    }
}
