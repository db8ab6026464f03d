//! Return checklist table and the pending-items clause.

use crate::model::checklist::ReturnChecklist;

use super::html::escape_html;

const CELL: &str = "padding:6px;border:1px solid #d1d5db;";
const RETURNED_STYLE: &str = "color:#15803d;font-weight:bold;";
const PENDING_STYLE: &str = "color:#b91c1c;font-weight:bold;";

/// The two fragments spliced into a return term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistFragments {
    pub items_table: String,
    /// Empty when every item came back.
    pub additional_clauses: String,
}

pub fn build_checklist_fragments(checklist: &ReturnChecklist) -> ChecklistFragments {
    let mut rows = String::new();

    for (item, returned) in checklist.iter() {
        let item = escape_html(item);
        let (answer, style, status) = if returned {
            ("SIM", RETURNED_STYLE, "Recebido")
        } else {
            ("NÃO", PENDING_STYLE, "PENDENTE")
        };
        rows.push_str(&format!(
            r#"<tr class="checklist-item"><td style="{CELL}">{item}</td><td style="{CELL}{style}">{answer}</td><td style="{CELL}">{status}</td></tr>"#,
        ));
    }
    let missing_items: Vec<String> = checklist
        .missing_items()
        .into_iter()
        .map(escape_html)
        .collect();

    let items_table = format!(
        concat!(
            r#"<div class="checklist" style="margin:16px 0;">"#,
            r#"<h4 style="margin:0 0 8px 0;">Checklist de Itens Devolvidos</h4>"#,
            r#"<table style="width:100%;border-collapse:collapse;font-size:12px;">"#,
            r#"<thead><tr style="background:#f3f4f6;">"#,
            r#"<th style="{cell}text-align:left;">Item</th>"#,
            r#"<th style="{cell}text-align:left;">Devolvido?</th>"#,
            r#"<th style="{cell}text-align:left;">Observação</th>"#,
            r#"</tr></thead><tbody>{rows}</tbody></table></div>"#,
        ),
        cell = CELL,
        rows = rows,
    );

    ChecklistFragments {
        items_table,
        additional_clauses: pending_items_clause(&missing_items),
    }
}

fn pending_items_clause(missing_items: &[String]) -> String {
    if missing_items.is_empty() {
        return String::new();
    }
    format!(
        concat!(
            r#"<div class="pending-items" style="margin:16px 0;padding:10px;border:1px solid #b91c1c;background:#fef2f2;">"#,
            r#"<p style="margin:0 0 6px 0;"><strong>ATENÇÃO: ITENS PENDENTES DE DEVOLUÇÃO</strong></p>"#,
            r#"<p style="margin:0 0 6px 0;">Foi constatada a ausência do(s) seguinte(s) item(ns): <strong>{items}</strong>.</p>"#,
            r#"<p style="margin:0;">O(A) colaborador(a) compromete-se a devolver o(s) item(ns) pendente(s) no prazo máximo de 48 (quarenta e oito) horas. "#,
            r#"Decorrido esse prazo sem a devolução, autoriza desde já o desconto do valor correspondente em sua folha de pagamento, "#,
            r#"nos termos do art. 462, § 1º, da CLT.</p></div>"#,
        ),
        items = missing_items.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returned_means_no_clauses() {
        let checklist: ReturnChecklist =
            [("device", true), ("charger", true), ("cable", true)].into_iter().collect();
        let fragments = build_checklist_fragments(&checklist);
        assert_eq!(fragments.additional_clauses, "");
        assert_eq!(fragments.items_table.matches("checklist-item").count(), 3);
        assert!(!fragments.items_table.contains("PENDENTE"));
    }

    #[test]
    fn missing_items_are_listed_once_each() {
        let checklist: ReturnChecklist = [
            ("device", true),
            ("charger", false),
            ("case", true),
            ("manual", false),
        ]
        .into_iter()
        .collect();
        let fragments = build_checklist_fragments(&checklist);
        assert!(!fragments.additional_clauses.is_empty());
        assert_eq!(fragments.additional_clauses.matches("charger").count(), 1);
        assert_eq!(fragments.additional_clauses.matches("manual").count(), 1);
        assert!(fragments.additional_clauses.contains("<strong>charger, manual</strong>"));
        assert!(fragments.additional_clauses.contains("48 (quarenta e oito) horas"));
        assert!(fragments.additional_clauses.contains("folha de pagamento"));
    }

    #[test]
    fn rows_follow_checklist_order() {
        let checklist: ReturnChecklist =
            [("sim", false), ("device", true)].into_iter().collect();
        let table = build_checklist_fragments(&checklist).items_table;
        let sim_at = table.find(">sim<").unwrap();
        let device_at = table.find(">device<").unwrap();
        assert!(sim_at < device_at);
        assert!(table.contains("Checklist de Itens Devolvidos"));
        for column in ["Item", "Devolvido?", "Observação"] {
            assert!(table.contains(&format!(">{column}</th>")));
        }
    }

    #[test]
    fn pending_clause_names_only_missing_items_escaped() {
        let checklist: ReturnChecklist = [
            ("<b>mouse</b>", false),
            ("device", true),
            ("capa & película", false),
        ]
        .into_iter()
        .collect();
        let clauses = build_checklist_fragments(&checklist).additional_clauses;
        assert!(clauses.contains("<strong>&lt;b&gt;mouse&lt;/b&gt;, capa &amp; película</strong>"));
        assert!(!clauses.contains("<b>mouse</b>"));
        assert!(!clauses.contains("device"));
    }

    #[test]
    fn empty_checklist_has_header_only() {
        let fragments = build_checklist_fragments(&ReturnChecklist::new());
        assert_eq!(fragments.items_table.matches("checklist-item").count(), 0);
        assert_eq!(fragments.additional_clauses, "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Distinct item names; `#<index>#` keeps any name from being a
    /// substring of another.
    fn arb_entries() -> impl Strategy<Value = Vec<(String, bool)>> {
        prop::collection::vec(("[a-z&<]{3,8}", any::<bool>()), 1..8).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (prefix, returned))| (format!("{prefix}#{i}#"), returned))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn all_returned_gives_empty_clauses(entries in arb_entries()) {
            let checklist: ReturnChecklist =
                entries.into_iter().map(|(name, _)| (name, true)).collect();
            let fragments = build_checklist_fragments(&checklist);
            prop_assert_eq!(fragments.additional_clauses, "");
        }

        #[test]
        fn each_missing_item_is_listed_exactly_once(mut entries in arb_entries()) {
            entries[0].1 = false;
            let checklist: ReturnChecklist = entries.iter().cloned().collect();
            let clauses = build_checklist_fragments(&checklist).additional_clauses;
            prop_assert!(!clauses.is_empty());
            for (name, returned) in &entries {
                let expected = if *returned { 0 } else { 1 };
                prop_assert_eq!(clauses.matches(&escape_html(name)).count(), expected, "{}", name);
            }
        }
    }
}
