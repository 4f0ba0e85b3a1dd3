//! Canonical binding names

/// Canonicalize a label into a binding name.
///
/// Lower-cases the label and replaces every run of whitespace with a single
/// underscore: `"Raw Data"` becomes `raw_data`. Idempotent.
pub fn canonicalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_whitespace = false;

    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    out
}

/// Is `name` usable as a Python identifier in the generated modules?
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
