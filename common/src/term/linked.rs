use crate::model::asset::SimCard;

use super::html::escape_html;

/// Extra rows for the asset table when a SIM card travels with the device.
/// Empty when there is none.
pub fn linked_sim_rows(linked_sim: Option<&SimCard>) -> String {
    let Some(sim) = linked_sim else {
        return String::new();
    };
    format!(
        concat!(
            r#"<tr><td colspan="3" style="background:#f3f4f6;font-weight:bold;padding:6px;border:1px solid #d1d5db;">Item Vinculado: Chip / SIM Card</td></tr>"#,
            r#"<tr><td style="padding:6px;border:1px solid #d1d5db;">Linha: {}</td>"#,
            r#"<td style="padding:6px;border:1px solid #d1d5db;">Operadora: {}</td>"#,
            r#"<td style="padding:6px;border:1px solid #d1d5db;">ICCID: {}</td></tr>"#,
        ),
        escape_html(&sim.phone_number),
        escape_html(&sim.operator),
        escape_html(&sim.iccid),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sim_no_rows() {
        assert_eq!(linked_sim_rows(None), "");
    }

    #[test]
    fn sim_rows_carry_line_operator_and_iccid() {
        let sim = SimCard {
            phone_number: "(11) 97777-1234".into(),
            operator: "TIM".into(),
            iccid: "8955021234567890123".into(),
        };
        let rows = linked_sim_rows(Some(&sim));
        assert_eq!(rows.matches("<tr>").count(), 2);
        assert!(rows.contains("Item Vinculado: Chip / SIM Card"));
        assert!(rows.contains("(11) 97777-1234"));
        assert!(rows.contains("TIM"));
        assert!(rows.contains("8955021234567890123"));
    }
}
