//! Named insertion points inside a composed term.
//!
//! A template marks where generated fragments go with literal HTML comments.
//! `SlottedTemplate` pairs the body with the fragments to place and reports,
//! per slot, where each fragment ended up, so a missing anchor is visible to
//! the caller instead of being a silent no-op.
//!
//! Heading fallbacks are located on the raw template, before any token is
//! substituted, and pinned with an internal marker. Merged values are
//! escaped, so they can never produce an anchor or a marker.

use std::collections::BTreeMap;

use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Return checklist table.
    ItemsTable,
    /// Pending-items clause block.
    Clauses,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::ItemsTable, Slot::Clauses];

    /// Literal anchor authors put in the template.
    pub const fn anchor(self) -> &'static str {
        match self {
            Slot::ItemsTable => "<!-- CHECKLIST_ITENS -->",
            Slot::Clauses => "<!-- CLAUSULAS_ADICIONAIS -->",
        }
    }

    /// Heading the fragment is placed in front of when the anchor is absent.
    /// The clauses slot has none and is dropped instead.
    pub const fn fallback_heading(self) -> Option<&'static str> {
        match self {
            Slot::ItemsTable => Some("DECLARAÇÃO"),
            Slot::Clauses => None,
        }
    }

    /// Internal marker left where the fallback heading was found.
    const fn heading_marker(self) -> &'static str {
        match self {
            Slot::ItemsTable => "<!-- CHECKLIST_ITENS:FALLBACK -->",
            Slot::Clauses => "<!-- CLAUSULAS_ADICIONAIS:FALLBACK -->",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Slot::ItemsTable => "Tabela do checklist",
            Slot::Clauses => "Cláusulas de itens pendentes",
        }
    }
}

/// Where a slot's fragment was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Anchor,
    BeforeHeading,
    Dropped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlottedTemplate {
    body: String,
    slots: BTreeMap<Slot, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub html: String,
    pub placements: Vec<(Slot, Placement)>,
}

impl SlottedTemplate {
    /// Wraps a raw template. Call this before substituting tokens so a
    /// fallback heading is found in the template's own markup only.
    pub fn new(body: impl Into<String>) -> Self {
        let mut body = body.into();
        for slot in Slot::ALL {
            if body.contains(slot.anchor()) {
                continue;
            }
            if let Some(at) = slot
                .fallback_heading()
                .and_then(|heading| heading_start(&body, heading))
            {
                body.insert_str(at, slot.heading_marker());
            }
        }
        Self {
            body,
            slots: BTreeMap::new(),
        }
    }

    /// Rewrites the body, typically with token substitution. Anchors and
    /// pinned markers pass through untouched.
    pub fn map_body(mut self, f: impl FnOnce(&str) -> String) -> Self {
        self.body = f(&self.body);
        self
    }

    pub fn fill(mut self, slot: Slot, fragment: impl Into<String>) -> Self {
        self.slots.insert(slot, fragment.into());
        self
    }

    /// Splices every filled slot into the body, in `Slot` order.
    pub fn render(self) -> RenderedTemplate {
        let mut html = self.body;
        let mut placements = Vec::with_capacity(self.slots.len());

        for (slot, fragment) in self.slots {
            let placement = splice(&mut html, slot, &fragment);
            if placement == Placement::Dropped {
                warn!("Anchor {} not found, {} left out", slot.anchor(), slot.label());
            }
            placements.push((slot, placement));
        }
        for slot in Slot::ALL {
            html = html.replacen(slot.heading_marker(), "", 1);
        }

        RenderedTemplate { html, placements }
    }
}

fn splice(html: &mut String, slot: Slot, fragment: &str) -> Placement {
    let anchor = slot.anchor();
    if let Some(at) = html.find(anchor) {
        html.replace_range(at..at + anchor.len(), fragment);
        return Placement::Anchor;
    }

    let marker = slot.heading_marker();
    match html.find(marker) {
        Some(at) => {
            html.replace_range(at..at + marker.len(), fragment);
            Placement::BeforeHeading
        }
        None => Placement::Dropped,
    }
}

/// Byte offset of the element holding `heading`, or of the text itself when
/// it is not directly wrapped in an opening tag.
fn heading_start(html: &str, heading: &str) -> Option<usize> {
    let text_at = html.find(heading)?;
    let before = &html[..text_at];
    if before.ends_with('>') {
        if let Some(tag_at) = before.rfind('<') {
            if !before[tag_at..].starts_with("</") {
                return Some(tag_at);
            }
        }
    }
    Some(text_at)
}

/// Anchors that appear more than once in `template`. Only the first copy of
/// an anchor is ever filled.
pub fn repeated_anchors(template: &str) -> Vec<Slot> {
    Slot::ALL
        .into_iter()
        .filter(|slot| template.matches(slot.anchor()).count() > 1)
        .collect()
}
