//! Single-pass `{TOKEN}` replacement, independent of the term domain.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `{NAME}` with `NAME` in `A-Z`, `0-9` and `_`. Capture 1 is the name.
/// The editor uses the same pattern to find the token under the cursor.
pub static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Z0-9_]+)\}").expect("token pattern is valid"));

/// Replaces every `{NAME}` whose `NAME` is a key of `values`.
///
/// The template is scanned once, so a value is never rescanned and one token
/// name can't eat into another. Unknown names are left as they are.
pub fn substitute(template: &str, values: &HashMap<&str, String>) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Token names referenced in `template`, in order of first appearance.
pub fn referenced_tokens(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in TOKEN_PATTERN.captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        let map = values(&[("CPF", "123"), ("RG", "-")]);
        assert_eq!(substitute("{CPF} {RG} {CPF}", &map), "123 - 123");
    }

    #[test]
    fn inserted_values_are_not_rescanned() {
        let map = values(&[("A", "{B}"), ("B", "x")]);
        assert_eq!(substitute("{A}-{B}", &map), "{B}-x");
    }

    #[test]
    fn names_sharing_a_prefix_do_not_collide() {
        let map = values(&[("NOME", "short"), ("NOME_SETOR", "TI")]);
        assert_eq!(substitute("{NOME_SETOR}/{NOME}", &map), "TI/short");
    }

    #[test]
    fn unknown_and_malformed_tokens_are_kept() {
        let map = values(&[("CPF", "123")]);
        assert_eq!(
            substitute("{DESCONHECIDO} {cpf} {CPF", &map),
            "{DESCONHECIDO} {cpf} {CPF"
        );
    }

    #[test]
    fn lists_referenced_tokens_once() {
        assert_eq!(
            referenced_tokens("{CPF} a {RG} {CPF} {x}"),
            vec!["CPF", "RG"]
        );
    }
}
