//! Global document settings edited from the term editor.
//!
//! The two template strings are the user-editable document definitions. The
//! other fields are merge-time constants.

use serde::{Deserialize, Serialize};

use crate::term::defaults::{DEFAULT_RETURN_TERM_TEMPLATE, DEFAULT_TERM_TEMPLATE};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub app_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_term_template: Option<String>,
}

impl Settings {
    /// Settings a fresh installation starts with: both built-in templates.
    pub fn with_default_templates() -> Self {
        Self {
            app_name: String::new(),
            cnpj: None,
            logo_url: String::new(),
            term_template: Some(DEFAULT_TERM_TEMPLATE.to_string()),
            return_term_template: Some(DEFAULT_RETURN_TERM_TEMPLATE.to_string()),
        }
    }

    /// Delivery template, `None` when unset or blank.
    pub fn term_template(&self) -> Option<&str> {
        non_blank(self.term_template.as_deref())
    }

    /// Return template, `None` when unset or blank.
    pub fn return_term_template(&self) -> Option<&str> {
        non_blank(self.return_term_template.as_deref())
    }

    pub fn app_name(&self) -> Option<&str> {
        non_blank(Some(self.app_name.as_str()))
    }

    pub fn cnpj(&self) -> Option<&str> {
        non_blank(self.cnpj.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_read_as_unset() {
        let settings = Settings {
            app_name: "   ".into(),
            cnpj: Some(String::new()),
            logo_url: String::new(),
            term_template: Some("\n".into()),
            return_term_template: None,
        };
        assert_eq!(settings.app_name(), None);
        assert_eq!(settings.cnpj(), None);
        assert_eq!(settings.term_template(), None);
        assert_eq!(settings.return_term_template(), None);
    }

    #[test]
    fn default_settings_carry_both_templates() {
        let settings = Settings::with_default_templates();
        assert!(settings.term_template().is_some());
        assert!(settings.return_term_template().is_some());
    }
}
