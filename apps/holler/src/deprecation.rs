//! # Deprecation Warnings

/// Build the text of a deprecation warning.
pub fn deprecation_message(
    version: &str,
    message: &str,
    before: Option<&str>,
    after: Option<&str>,
) -> String {
    let mut lines = vec![format!(
        "Deprecation Warning (since v{}): {}",
        version, message
    )];
    if let Some(before) = before {
        lines.push(format!("  before: {}", before));
    }
    if let Some(after) = after {
        lines.push(format!("  after:  {}", after));
    }
    lines.join("\n")
}

/// Emit a deprecation warning through tracing.
pub fn deprecate(version: &str, message: &str, before: Option<&str>, after: Option<&str>) {
    tracing::warn!("{}", deprecation_message(version, message, before, after));
}
