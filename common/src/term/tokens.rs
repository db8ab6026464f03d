//! Token vocabulary understood in term templates and the values they take.

use std::collections::HashMap;

use crate::model::asset::Asset;

use super::TermRequest;
use super::descriptor::AssetDescriptor;
use super::html::escape_html;
use super::stamp::Stamp;

pub const FALLBACK_RG: &str = "-";
pub const FALLBACK_SECTOR: &str = "Não Informado";
pub const FALLBACK_COMPANY: &str = "Minha Empresa";
pub const FALLBACK_CNPJ: &str = "CNPJ não informado";
pub const FALLBACK_NOTES: &str = "Nenhuma observação registrada.";
pub const FALLBACK_IMEI: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    LogoUrl,
    NomeColaborador,
    Cpf,
    Rg,
    NomeSetor,
    NomeEmpresa,
    Cnpj,
    ModeloDispositivo,
    TagPatrimonio,
    NumeroSerie,
    ImeiIccid,
    Acessorios,
    CidadeData,
    TipoTermo,
    ChipVinculadoHtml,
    Observacoes,
    IdTermoAuto,
}

impl Token {
    pub const ALL: [Token; 17] = [
        Token::LogoUrl,
        Token::NomeColaborador,
        Token::Cpf,
        Token::Rg,
        Token::NomeSetor,
        Token::NomeEmpresa,
        Token::Cnpj,
        Token::ModeloDispositivo,
        Token::TagPatrimonio,
        Token::NumeroSerie,
        Token::ImeiIccid,
        Token::Acessorios,
        Token::CidadeData,
        Token::TipoTermo,
        Token::ChipVinculadoHtml,
        Token::Observacoes,
        Token::IdTermoAuto,
    ];

    /// Name between the braces.
    pub const fn name(self) -> &'static str {
        match self {
            Token::LogoUrl => "LOGO_URL",
            Token::NomeColaborador => "NOME_COLABORADOR",
            Token::Cpf => "CPF",
            Token::Rg => "RG",
            Token::NomeSetor => "NOME_SETOR",
            Token::NomeEmpresa => "NOME_EMPRESA",
            Token::Cnpj => "CNPJ",
            Token::ModeloDispositivo => "MODELO_DISPOSITIVO",
            Token::TagPatrimonio => "TAG_PATRIMONIO",
            Token::NumeroSerie => "NUMERO_SERIE",
            Token::ImeiIccid => "IMEI_ICCID",
            Token::Acessorios => "ACESSORIOS",
            Token::CidadeData => "CIDADE_DATA",
            Token::TipoTermo => "TIPO_TERMO",
            Token::ChipVinculadoHtml => "CHIP_VINCULADO_HTML",
            Token::Observacoes => "OBSERVACOES",
            Token::IdTermoAuto => "ID_TERMO_AUTO",
        }
    }

    /// The literal written in templates, e.g. `{CPF}`.
    pub fn placeholder(self) -> String {
        format!("{{{}}}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|token| token.name() == name)
    }

    /// Short explanation shown by the template editor.
    pub const fn description(self) -> &'static str {
        match self {
            Token::LogoUrl => "URL do logotipo da empresa",
            Token::NomeColaborador => "Nome completo do colaborador",
            Token::Cpf => "CPF do colaborador",
            Token::Rg => "RG do colaborador",
            Token::NomeSetor => "Setor do colaborador",
            Token::NomeEmpresa => "Nome da empresa",
            Token::Cnpj => "CNPJ da empresa",
            Token::ModeloDispositivo => "Tipo, marca e modelo do equipamento",
            Token::TagPatrimonio => "Patrimônio (e IMEI) ou ICCID do chip",
            Token::NumeroSerie => "Número de série",
            Token::ImeiIccid => "IMEI do aparelho ou ICCID do chip",
            Token::Acessorios => "Acessórios entregues",
            Token::CidadeData => "Cidade e data por extenso",
            Token::TipoTermo => "Entrega ou Devolução",
            Token::ChipVinculadoHtml => "Linhas da tabela com o chip vinculado",
            Token::Observacoes => "Observações",
            Token::IdTermoAuto => "Código curto do termo",
        }
    }
}

/// Resolves every token for one term. Caller data is HTML-escaped here; the
/// linked-SIM rows arrive as markup and are inserted as they are.
pub fn build_token_map(
    request: &TermRequest<'_>,
    descriptor: &AssetDescriptor,
    linked_sim_rows: String,
    stamp: &Stamp,
) -> HashMap<&'static str, String> {
    let settings = request.settings;
    let user = request.user;

    let imei_iccid = match request.asset {
        Asset::Device(device) => device
            .imei
            .as_deref()
            .filter(|imei| !imei.trim().is_empty())
            .unwrap_or(FALLBACK_IMEI),
        Asset::Sim(sim) => sim.iccid.as_str(),
    };

    let values = [
        (Token::LogoUrl, escape_html(&settings.logo_url)),
        (Token::NomeColaborador, escape_html(&user.full_name)),
        (Token::Cpf, escape_html(&user.cpf)),
        (
            Token::Rg,
            escape_html(or_fallback(user.rg.as_deref(), FALLBACK_RG)),
        ),
        (
            Token::NomeSetor,
            escape_html(or_fallback(request.sector_name, FALLBACK_SECTOR)),
        ),
        (
            Token::NomeEmpresa,
            escape_html(settings.app_name().unwrap_or(FALLBACK_COMPANY)),
        ),
        (
            Token::Cnpj,
            escape_html(settings.cnpj().unwrap_or(FALLBACK_CNPJ)),
        ),
        (Token::ModeloDispositivo, escape_html(&descriptor.asset_name)),
        (Token::TagPatrimonio, escape_html(&descriptor.id_code_display)),
        (Token::NumeroSerie, escape_html(&descriptor.serial_display)),
        (Token::ImeiIccid, escape_html(imei_iccid)),
        (Token::Acessorios, escape_html(&descriptor.accessories_display)),
        (Token::CidadeData, escape_html(&stamp.city_date())),
        (Token::TipoTermo, request.action_type.label().to_string()),
        (Token::ChipVinculadoHtml, linked_sim_rows),
        (
            Token::Observacoes,
            escape_html(or_fallback(request.notes, FALLBACK_NOTES)),
        ),
        (Token::IdTermoAuto, escape_html(&stamp.term_id)),
    ];

    values
        .into_iter()
        .map(|(token, value)| (token.name(), value))
        .collect()
}

fn or_fallback<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
}
