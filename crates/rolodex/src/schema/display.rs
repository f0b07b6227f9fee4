//! Human-readable name derivation and cell caption templating.

/// Derives a presentable name from an identifier: underscores become
/// spaces, the first character is uppercased, and the rest is lowercased.
pub(crate) fn pretty_name(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Fills a caption template, substituting `{field}`, `{group}`, and
/// `{label}`. Unrecognized braces are copied through verbatim.
pub(crate) fn render_label_format(
    template: &str,
    field: &str,
    group: &str,
    label: &str,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match match_placeholder(tail, field, group, label) {
            Some((replacement, consumed)) => {
                out.push_str(replacement);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Checks whether `tail` starts with a known placeholder and returns the
/// substitution plus the number of bytes it spans.
fn match_placeholder<'a>(
    tail: &str,
    field: &'a str,
    group: &'a str,
    label: &'a str,
) -> Option<(&'a str, usize)> {
    for (placeholder, replacement) in [
        ("{field}", field),
        ("{group}", group),
        ("{label}", label),
    ] {
        if tail.starts_with(placeholder) {
            return Some((replacement, placeholder.len()));
        }
    }
    None
}
