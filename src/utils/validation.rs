//! Centralized validation and helper functions.

/// Maximum number of labels accepted on either side of a comparison.
///
/// At this size the padded `i32` cost matrix is 4 MB and the cubic solve
/// stays around 1e9 steps.
pub const MAX_LABELS: usize = 1_000;

/// Maximum length of a single label, in bytes
pub const MAX_LABEL_LENGTH: usize = 1024;

/// Default token marking an unknown placeholder in label files
pub const DEFAULT_UNKNOWN_TOKEN: &str = "?";

/// Check if adding another label would exceed `max`.
///
/// Call this with the current count BEFORE adding a new label.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```
/// use label_matcher::utils::validation::check_label_limit;
///
/// assert!(check_label_limit(9, 10).is_none());
/// assert!(check_label_limit(10, 10).is_some());
/// ```
#[must_use]
pub fn check_label_limit(count: usize, max: usize) -> Option<String> {
    if count >= max {
        Some(format!(
            "Too many labels: adding another would exceed maximum of {max}"
        ))
    } else {
        None
    }
}

/// Label validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty label")]
    EmptyLabel,
    #[error("Label too long: exceeds {MAX_LABEL_LENGTH} bytes")]
    LabelTooLong,
    #[error("Label contains control characters")]
    InvalidCharacters,
    #[error("Input appears to be binary, not text")]
    BinaryContent,
}

/// Validate a label read from user input and return it trimmed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyLabel` if nothing remains after trimming,
/// `ValidationError::LabelTooLong` if it exceeds [`MAX_LABEL_LENGTH`], or
/// `ValidationError::InvalidCharacters` if it contains control characters.
pub fn validate_label(raw: &str) -> Result<&str, ValidationError> {
    let label = raw.trim();

    if label.is_empty() {
        return Err(ValidationError::EmptyLabel);
    }

    if label.len() > MAX_LABEL_LENGTH {
        return Err(ValidationError::LabelTooLong);
    }

    if label.chars().any(char::is_control) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(label)
}

/// Reject content that is clearly not text.
///
/// # Errors
///
/// Returns `ValidationError::BinaryContent` if the content contains NUL bytes
/// or more than 5% non-printable bytes.
pub fn validate_text_content(content: &[u8]) -> Result<(), ValidationError> {
    if content.contains(&0) {
        return Err(ValidationError::BinaryContent);
    }

    let non_printable_count = content
        .iter()
        .filter(|&&b| b < 9 || (b > 13 && b < 32))
        .count();

    // Allow up to 5% non-printable characters for text files
    if content.len() > 100 && non_printable_count > content.len() / 20 {
        return Err(ValidationError::BinaryContent);
    }

    Ok(())
}
