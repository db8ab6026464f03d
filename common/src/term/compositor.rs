//! Builds the final term: template selection, token substitution and, for
//! returns, the checklist splices.

use log::debug;

use crate::model::action::ActionType;

use super::TermRequest;
use super::checklist::build_checklist_fragments;
use super::descriptor::AssetDescriptor;
use super::linked::linked_sim_rows;
use super::resolver::{TemplateSource, resolve_template};
use super::sink::DocumentSink;
use super::slots::{Placement, Slot, SlottedTemplate};
use super::stamp::Stamp;
use super::substitute::substitute;
use super::tokens::build_token_map;

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedTerm {
    pub html: String,
    pub term_id: String,
    pub template_source: TemplateSource,
    /// One entry per slot spliced. Empty unless a return checklist was given.
    pub placements: Vec<(Slot, Placement)>,
}

impl ComposedTerm {
    pub fn dropped_slots(&self) -> Vec<Slot> {
        self.placements
            .iter()
            .filter(|(_, placement)| *placement == Placement::Dropped)
            .map(|(slot, _)| *slot)
            .collect()
    }
}

pub fn compose(request: &TermRequest<'_>, stamp: &Stamp) -> ComposedTerm {
    let template = resolve_template(request.action_type, request.settings);

    let descriptor = AssetDescriptor::derive(
        request.asset,
        request.model,
        request.brand,
        request.asset_type,
    );
    let values = build_token_map(
        request,
        &descriptor,
        linked_sim_rows(request.linked_sim),
        stamp,
    );
    let (html, placements) = match (request.action_type, request.checklist) {
        (ActionType::Devolucao, Some(checklist)) => {
            let fragments = build_checklist_fragments(checklist);
            let rendered = SlottedTemplate::new(template.body)
                .map_body(|body| substitute(body, &values))
                .fill(Slot::ItemsTable, fragments.items_table)
                .fill(Slot::Clauses, fragments.additional_clauses)
                .render();
            (rendered.html, rendered.placements)
        }
        _ => (substitute(template.body, &values), Vec::new()),
    };

    debug!(
        "Composed {} term {} ({} bytes)",
        request.action_type.label(),
        stamp.term_id,
        html.len()
    );

    ComposedTerm {
        html,
        term_id: stamp.term_id.clone(),
        template_source: template.source,
        placements,
    }
}

/// The generator entry point: one call, one document string.
pub fn generate(request: &TermRequest<'_>) -> String {
    compose(request, &Stamp::now()).html
}

/// Generates the term and hands it to `sink`. Returns the composition
/// details for the caller to log or display.
pub fn generate_into(request: &TermRequest<'_>, sink: &mut impl DocumentSink) -> ComposedTerm {
    let composed = compose(request, &Stamp::now());
    sink.render(composed.html.clone());
    composed
}
