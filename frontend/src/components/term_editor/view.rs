//! View rendering for the term editor component.
//!
//! Layout: company fields and logo on top, then the template tabs
//! (delivery/return), a toolbar, and the pane tabs switching between the
//! HTML editor and a live preview composed with sample data.

use common::term::tokens::Token;
use common::term::{compose, Stamp};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::tokens::tokens_dialog;
use super::helpers::settings_md5;
use super::messages::Msg;
use super::sample::SampleTerm;
use super::state::{Pane, TemplateKind, TermEditorComponent};

pub fn view(component: &TermEditorComponent, ctx: &Context<TermEditorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="term-editor-root">
            { build_company_fields(component, link) }
            { build_template_tabs(component, link) }
            { build_toolbar(link) }
            { build_pane_tabs(component, link) }
            {
                match component.active_pane {
                    Pane::Editor => build_editor_pane(component, link),
                    Pane::Preview => build_preview_pane(component),
                }
            }
            { tokens_dialog(component, link) }
            <input
                type="file"
                accept="image/*"
                ref={component.file_input_ref.clone()}
                style="display:none;"
                onchange={link.batch_callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    let file = input.files().and_then(|files| files.get(0));
                    input.set_value("");
                    file.map(Msg::LogoSelected)
                })}
            />
        </div>
    }
}

fn build_company_fields(component: &TermEditorComponent, link: &Scope<TermEditorComponent>) -> Html {
    let settings = &component.settings;
    html! {
        <div class="company-fields" style="display:flex;gap:16px;align-items:flex-end;margin-bottom:12px;">
            <label style="display:flex;flex-direction:column;">
                {"Nome da empresa"}
                <input
                    value={settings.app_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateAppName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            <label style="display:flex;flex-direction:column;">
                {"CNPJ"}
                <input
                    value={settings.cnpj.clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateCnpj(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            <div style="display:flex;align-items:center;gap:8px;">
                {
                    if settings.logo_url.is_empty() {
                        html! { <span style="color:#9ca3af;">{"Sem logotipo"}</span> }
                    } else {
                        html! {
                            <>
                                <img src={settings.logo_url.clone()} alt="Logotipo" style="max-height:40px;" />
                                { icon_button("delete", "Remover", link.callback(|_| Msg::RemoveLogo)) }
                            </>
                        }
                    }
                }
                { icon_button("image", "Logotipo", link.callback(|_| Msg::OpenFileDialog)) }
            </div>
        </div>
    }
}

fn build_template_tabs(component: &TermEditorComponent, link: &Scope<TermEditorComponent>) -> Html {
    let tab = |kind: TemplateKind| {
        html! {
            <button
                class={classes!("tab-btn", (component.active_template == kind).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTemplateKind(kind))}
            >
                { kind.label() }
            </button>
        }
    };
    html! {
        <div class="tab-bar template-tabs">
            { tab(TemplateKind::Delivery) }
            { tab(TemplateKind::Return) }
        </div>
    }
}

fn build_toolbar(link: &Scope<TermEditorComponent>) -> Html {
    html! {
        <div class="icon-toolbar">
            { icon_button("undo", "Desfazer", link.callback(|_| Msg::Undo)) }
            { icon_button("redo", "Refazer", link.callback(|_| Msg::Redo)) }
            { icon_button("data_object", "Variáveis", link.callback(|_| Msg::OpenTokensDialog)) }
            { icon_button("print", "Imprimir", link.callback(|_| Msg::Print)) }
            { icon_button("save", "Salvar", link.callback(|_| Msg::Save)) }
        </div>
    }
}

/// Editor/preview switch. A red dot marks unsaved changes.
fn build_pane_tabs(component: &TermEditorComponent, link: &Scope<TermEditorComponent>) -> Html {
    let dirty = component
        .original_md5
        .as_ref()
        .is_some_and(|orig| orig != &settings_md5(&component.settings));

    html! {
        <div class="tab-bar">
            <button
                class={classes!("tab-btn", (component.active_pane == Pane::Editor).then_some("active"))}
                onclick={link.callback(|_| Msg::SetPane(Pane::Editor))}
                style="position: relative;"
            >
                {"Editor"}
                if dirty {
                    <span
                        title="Alterações não salvas"
                        style="position:absolute;top:4px;right:6px;width:8px;height:8px;background:#e53935;border-radius:50%;display:inline-block;"
                    />
                }
            </button>
            <button
                class={classes!("tab-btn", (component.active_pane == Pane::Preview).then_some("active"))}
                onclick={link.callback(|_| Msg::SetPane(Pane::Preview))}
            >
                {"Pré-visualização"}
            </button>
        </div>
    }
}

fn build_editor_pane(component: &TermEditorComponent, link: &Scope<TermEditorComponent>) -> Html {
    let text = component.current_template();
    let line_count = text.lines().count().max(1);
    let line_numbers = (1..=line_count)
        .map(|n| html! { <div class="line-number">{n}</div> })
        .collect::<Html>();

    html! {
        <>
            <div style="display: flex; align-items: flex-start;">
                <div
                    class="line-numbers"
                    style="user-select:none; text-align:right; padding:8px 4px 8px 0; color:#aaa; background:#fafafa; font-size:11px; font-family:monospace; min-width:32px;"
                >
                    { line_numbers }
                </div>
                <textarea
                    id="term-template-textarea"
                    ref={component.textarea_ref.clone()}
                    value={text.to_string()}
                    spellcheck="false"
                    oninput={link.batch_callback(|e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        vec![Msg::UpdateText(value), Msg::AutoResize]
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        if e.ctrl_key() && e.key() == "z" {
                            e.prevent_default();
                            vec![Msg::Undo]
                        } else if e.ctrl_key() && e.key() == "y" {
                            e.prevent_default();
                            vec![Msg::Redo]
                        } else {
                            vec![]
                        }
                    })}
                    onkeyup={link.callback(|e: KeyboardEvent| {
                        let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
                        Msg::CursorMoved(textarea.selection_start().ok().flatten().unwrap_or(0))
                    })}
                    onclick={link.callback(|e: MouseEvent| {
                        let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
                        Msg::CursorMoved(textarea.selection_start().ok().flatten().unwrap_or(0))
                    })}
                    onselect={link.callback(|e: Event| {
                        let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
                        Msg::CursorMoved(textarea.selection_start().ok().flatten().unwrap_or(0))
                    })}
                    rows={1}
                    style="width: 100%; min-height: 40px; resize: none; overflow: hidden; font-family: monospace;"
                />
            </div>
            <div class="token-hint" style="min-height:20px;font-size:12px;color:#374151;padding:4px 36px;">
                { component.cursor_token.map(token_hint).unwrap_or_default() }
            </div>
        </>
    }
}

/// Composes the edited template with sample data and shows it sandboxed.
fn build_preview_pane(component: &TermEditorComponent) -> Html {
    let sample = SampleTerm::new();
    let request = sample.request(&component.settings, component.active_template);
    let term = compose(&request, &Stamp::now());

    let warnings = term
        .dropped_slots()
        .into_iter()
        .map(|slot| {
            html! {
                <div class="preview-warning" style="color:#b45309;font-size:12px;">
                    { format!("Marcador {} ausente: {} não aparece no termo.", slot.anchor(), slot.label()) }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="term-preview">
            { warnings }
            <iframe
                srcdoc={term.html}
                sandbox="allow-same-origin"
                style="width:100%;height:80vh;border:1px solid #d1d5db;background:#fff;"
            />
        </div>
    }
}

fn token_hint(token: Token) -> String {
    format!("{}: {}", token.placeholder(), token.description())
}

/// Renders a toolbar button with a Material icon and a label.
pub(super) fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click}>
            <i class="material-icons">{icon_name}</i>
            <span class="icon-label">{label}</span>
        </button>
    }
}
