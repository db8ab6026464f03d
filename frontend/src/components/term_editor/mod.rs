//! Term template editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `TermEditorProps`, `TermEditorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load the stored settings from the backend, falling back
//!   to the built-in templates when the request fails.

use common::model::settings::Settings;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod sample;
mod sink;
mod state;
mod update;
mod view;

use helpers::show_toast;
pub use messages::Msg;
pub use props::TermEditorProps;
pub use state::TermEditorComponent;

impl Component for TermEditorComponent {
    type Message = Msg;
    type Properties = TermEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TermEditorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let url = ctx.props().settings_url.clone();
            spawn_local(async move {
                let response = Request::get(&url).send().await;

                match response {
                    Ok(resp) if resp.status() == 200 => match resp.json::<Settings>().await {
                        Ok(settings) => {
                            link.send_message(Msg::SetSettings(settings));
                            show_toast("Configurações carregadas.");
                        }
                        Err(err) => load_defaults(link, &err.to_string()),
                    },
                    Ok(resp) => load_defaults(link, &format!("HTTP {}", resp.status())),
                    Err(err) => load_defaults(link, &err.to_string()),
                }
            });
        }
    }
}

fn load_defaults(link: yew::html::Scope<TermEditorComponent>, reason: &str) {
    gloo_console::error!(format!("Could not load settings: {}", reason));
    link.send_message(Msg::SetSettings(Settings::with_default_templates()));
    show_toast("Erro ao carregar configurações. Usando os modelos padrão.");
}
