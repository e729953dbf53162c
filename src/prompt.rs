//! Prompt Templating
//!
//! Literal placeholder substitution for hook prompt templates.
//! Templates come from configuration and are trusted input; values are
//! inserted verbatim with no escaping.

/// Placeholder for the (trigger-stripped) paste-buffer text
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Placeholder for the captured selection text
pub const SELECTED_TEXT_PLACEHOLDER: &str = "{selected_text}";

/// Substitute placeholder tokens into `template`.
///
/// Scans left to right; the first binding whose token matches at the
/// current position is substituted and the scan resumes after the
/// inserted value, so bound values are never themselves scanned for
/// placeholders. Tokens with no binding pass through verbatim.
pub fn render(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(ch) = rest.chars().next() {
        for (token, value) in bindings {
            if !token.is_empty() && rest.starts_with(token) {
                out.push_str(value);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
