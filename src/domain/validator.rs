//! Domain name validation utilities

/// Check whether a string is a syntactically plausible domain name.
///
/// Accepts `name.tld` shapes where the TLD is at least two letters and
/// the name is 1-63 alphanumeric/hyphen characters without a leading or
/// trailing hyphen. Total function: never fails, never allocates beyond
/// the lower-cased copy.
pub fn is_valid_domain(domain: &str) -> bool {
    if domain.len() < 4 {
        return false;
    }
    if !domain.contains('.') {
        return false;
    }

    let lower = domain.to_lowercase();
    let parts: Vec<&str> = lower.split('.').collect();

    // TLD: at least two characters, letters only
    let tld = parts[parts.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }

    // Name: 1-63 chars, alphanumeric with interior hyphens
    let name = parts[0];
    if name.is_empty() || name.len() > 63 {
        return false;
    }

    is_valid_label(name)
}

/// Split a domain into its lower-cased name and TLD.
///
/// The TLD is the segment after the last dot; it is empty when the
/// input has no dot at all.
pub fn split_domain(domain: &str) -> (String, String) {
    let lower = domain.to_lowercase();
    let parts: Vec<&str> = lower.split('.').collect();

    let name = parts.first().copied().unwrap_or_default().to_string();
    let tld = if parts.len() > 1 {
        parts[parts.len() - 1].to_string()
    } else {
        String::new()
    };

    (name, tld)
}

fn is_valid_label(name: &str) -> bool {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_alphanumeric() {
        return false;
    }

    match name.chars().last() {
        Some(last) if !last.is_ascii_alphanumeric() => return false,
        _ => {}
    }

    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
