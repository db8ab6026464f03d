//! Built-in templates a fresh installation starts with.

pub const DEFAULT_TERM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Termo de Responsabilidade - {TIPO_TERMO}</title>
<style>@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap');</style>
</head>
<body style="font-family:'Inter',Arial,sans-serif;font-size:12px;color:#111827;margin:32px;">
<div style="display:flex;justify-content:space-between;align-items:center;border-bottom:2px solid #111827;padding-bottom:12px;">
<img src="{LOGO_URL}" alt="" style="max-height:56px;">
<div style="text-align:right;"><strong>{NOME_EMPRESA}</strong><br>CNPJ: {CNPJ}</div>
</div>
<h2 style="text-align:center;margin:24px 0 4px 0;">TERMO DE RESPONSABILIDADE - {TIPO_TERMO} DE EQUIPAMENTO</h2>
<p style="text-align:center;margin:0 0 24px 0;color:#6b7280;">Nº {ID_TERMO_AUTO}</p>
<h4>Dados do Colaborador</h4>
<table style="width:100%;border-collapse:collapse;">
<tr><td style="padding:6px;border:1px solid #d1d5db;width:30%;">Nome</td><td style="padding:6px;border:1px solid #d1d5db;">{NOME_COLABORADOR}</td></tr>
<tr><td style="padding:6px;border:1px solid #d1d5db;">CPF</td><td style="padding:6px;border:1px solid #d1d5db;">{CPF}</td></tr>
<tr><td style="padding:6px;border:1px solid #d1d5db;">RG</td><td style="padding:6px;border:1px solid #d1d5db;">{RG}</td></tr>
<tr><td style="padding:6px;border:1px solid #d1d5db;">Setor</td><td style="padding:6px;border:1px solid #d1d5db;">{NOME_SETOR}</td></tr>
</table>
<h4>Equipamento</h4>
<table style="width:100%;border-collapse:collapse;">
<tr><td style="padding:6px;border:1px solid #d1d5db;">Descrição: {MODELO_DISPOSITIVO}</td><td style="padding:6px;border:1px solid #d1d5db;">Nº de Série: {NUMERO_SERIE}</td><td style="padding:6px;border:1px solid #d1d5db;">Patrimônio: {TAG_PATRIMONIO}</td></tr>
<tr><td colspan="3" style="padding:6px;border:1px solid #d1d5db;">Acessórios: {ACESSORIOS}</td></tr>
{CHIP_VINCULADO_HTML}
</table>
<h4>Observações</h4>
<p>{OBSERVACOES}</p>
<h4>Condições de Uso</h4>
<p>Declaro ter recebido da empresa {NOME_EMPRESA} o equipamento descrito acima, em perfeitas condições de uso, para utilização exclusiva no desempenho das minhas atividades profissionais.</p>
<p>Comprometo-me a zelar pela sua guarda e conservação, a não cedê-lo a terceiros e a devolvê-lo, com todos os acessórios, ao término do vínculo ou quando solicitado. Em caso de dano por mau uso, extravio ou não devolução, autorizo o desconto do valor correspondente em minha folha de pagamento, nos termos do art. 462, § 1º, da CLT.</p>
<p style="margin-top:32px;">{CIDADE_DATA}</p>
<div style="display:flex;justify-content:space-between;margin-top:56px;">
<div style="width:45%;text-align:center;border-top:1px solid #111827;padding-top:4px;">{NOME_COLABORADOR}<br>Colaborador</div>
<div style="width:45%;text-align:center;border-top:1px solid #111827;padding-top:4px;">{NOME_EMPRESA}<br>Responsável TI</div>
</div>
</body>
</html>
"#;

pub const DEFAULT_RETURN_TERM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Termo de Responsabilidade - {TIPO_TERMO}</title>
<style>@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap');</style>
</head>
<body style="font-family:'Inter',Arial,sans-serif;font-size:12px;color:#111827;margin:32px;">
<div style="display:flex;justify-content:space-between;align-items:center;border-bottom:2px solid #111827;padding-bottom:12px;">
<img src="{LOGO_URL}" alt="" style="max-height:56px;">
<div style="text-align:right;"><strong>{NOME_EMPRESA}</strong><br>CNPJ: {CNPJ}</div>
</div>
<h2 style="text-align:center;margin:24px 0 4px 0;">TERMO DE {TIPO_TERMO} DE EQUIPAMENTO</h2>
<p style="text-align:center;margin:0 0 24px 0;color:#6b7280;">Nº {ID_TERMO_AUTO}</p>
<h4>Dados do Colaborador</h4>
<table style="width:100%;border-collapse:collapse;">
<tr><td style="padding:6px;border:1px solid #d1d5db;width:30%;">Nome</td><td style="padding:6px;border:1px solid #d1d5db;">{NOME_COLABORADOR}</td></tr>
<tr><td style="padding:6px;border:1px solid #d1d5db;">CPF</td><td style="padding:6px;border:1px solid #d1d5db;">{CPF}</td></tr>
<tr><td style="padding:6px;border:1px solid #d1d5db;">RG</td><td style="padding:6px;border:1px solid #d1d5db;">{RG}</td></tr>
<tr><td style="padding:6px;border:1px solid #d1d5db;">Setor</td><td style="padding:6px;border:1px solid #d1d5db;">{NOME_SETOR}</td></tr>
</table>
<h4>Equipamento Devolvido</h4>
<table style="width:100%;border-collapse:collapse;">
<tr><td style="padding:6px;border:1px solid #d1d5db;">Descrição: {MODELO_DISPOSITIVO}</td><td style="padding:6px;border:1px solid #d1d5db;">Nº de Série: {NUMERO_SERIE}</td><td style="padding:6px;border:1px solid #d1d5db;">Patrimônio: {TAG_PATRIMONIO}</td></tr>
<tr><td colspan="3" style="padding:6px;border:1px solid #d1d5db;">Acessórios: {ACESSORIOS}</td></tr>
{CHIP_VINCULADO_HTML}
</table>
<!-- CHECKLIST_ITENS -->
<h4>Observações</h4>
<p>{OBSERVACOES}</p>
<h4>DECLARAÇÃO</h4>
<p>A empresa {NOME_EMPRESA} declara ter recebido do(a) colaborador(a) {NOME_COLABORADOR} o equipamento descrito acima, conferido conforme o checklist deste termo.</p>
<!-- CLAUSULAS_ADICIONAIS -->
<p style="margin-top:32px;">{CIDADE_DATA}</p>
<div style="display:flex;justify-content:space-between;margin-top:56px;">
<div style="width:45%;text-align:center;border-top:1px solid #111827;padding-top:4px;">{NOME_COLABORADOR}<br>Colaborador</div>
<div style="width:45%;text-align:center;border-top:1px solid #111827;padding-top:4px;">{NOME_EMPRESA}<br>Responsável TI</div>
</div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::slots::{Slot, repeated_anchors};
    use crate::term::substitute::referenced_tokens;
    use crate::term::tokens::Token;

    #[test]
    fn templates_only_use_known_tokens() {
        for template in [DEFAULT_TERM_TEMPLATE, DEFAULT_RETURN_TERM_TEMPLATE] {
            for name in referenced_tokens(template) {
                assert!(Token::from_name(name).is_some(), "unknown token {name}");
            }
            assert!(repeated_anchors(template).is_empty());
        }
    }

    #[test]
    fn return_template_has_both_anchors() {
        for slot in Slot::ALL {
            assert!(DEFAULT_RETURN_TERM_TEMPLATE.contains(slot.anchor()));
            assert!(!DEFAULT_TERM_TEMPLATE.contains(slot.anchor()));
        }
    }
}
