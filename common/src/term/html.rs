/// Escapes a caller-supplied value before it is merged into a template.
///
/// Besides the usual HTML metacharacters, braces become numeric character
/// references. They render the same, but a value such as `{CPF}` can no
/// longer be picked up by a later substitution pass.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}
