const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validates a domain identifier and returns its canonical form.
///
/// Canonical form is trimmed, lower-cased and without a trailing root dot, so
/// `Example.COM.` and `example.com` share a counter.
pub fn normalize_domain(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err("Domain cannot be empty".to_string());
    }
    if trimmed.len() > MAX_DOMAIN_LEN {
        return Err(format!("Domain cannot exceed {} characters", MAX_DOMAIN_LEN));
    }

    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    if !valid {
        return Err(
            "Domain contains invalid characters (only alphanumeric, hyphens, dots and underscores are allowed)"
                .to_string(),
        );
    }

    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err("Domain contains an empty label".to_string());
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!("Domain label cannot exceed {} characters", MAX_LABEL_LEN));
        }
    }

    Ok(trimmed.to_ascii_lowercase())
}
