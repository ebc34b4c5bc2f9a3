use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::label::{Label, UnknownFactory};
use crate::utils::validation::{
    check_label_limit, validate_label, validate_text_content, DEFAULT_UNKNOWN_TOKEN, MAX_LABELS,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid label file: {0}")]
    InvalidFormat(String),

    #[error("Invalid JSON label list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Too many labels: {0} exceeds maximum allowed")]
    TooManyLabels(usize),
}

/// Options controlling how label input is read
#[derive(Debug, Clone)]
pub struct LabelFormat {
    /// Entry that stands for an unknown placeholder
    pub unknown_token: String,
    /// Maximum number of labels per input
    pub max_labels: usize,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            unknown_token: DEFAULT_UNKNOWN_TOKEN.to_string(),
            max_labels: MAX_LABELS,
        }
    }
}

impl LabelFormat {
    fn label_for(&self, text: &str, unknowns: &mut UnknownFactory) -> Label {
        if text == self.unknown_token {
            unknowns.next_label()
        } else {
            Label::named(text)
        }
    }

    fn check_limit(&self, count: usize) -> Result<(), ParseError> {
        if check_label_limit(count, self.max_labels).is_some() {
            return Err(ParseError::TooManyLabels(count + 1));
        }
        Ok(())
    }
}

/// Parse a label file, dispatching on extension: `.json` files hold a JSON
/// array, anything else holds one label per line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_labels_file(
    path: &Path,
    format: &LabelFormat,
    unknowns: &mut UnknownFactory,
) -> Result<Vec<Label>, ParseError> {
    let content = std::fs::read(path)?;
    validate_text_content(&content)
        .map_err(|e| ParseError::InvalidFormat(format!("{}: {e}", path.display())))?;
    let text = String::from_utf8(content)
        .map_err(|_| ParseError::InvalidFormat(format!("{}: not valid UTF-8", path.display())))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let labels = if is_json {
        parse_labels_json(&text, format, unknowns)?
    } else {
        parse_labels_text(&text, format, unknowns)?
    };

    debug!(path = %path.display(), count = labels.len(), "parsed label file");
    Ok(labels)
}

/// Parse one label per line.
///
/// Blank lines and lines starting with `#` are skipped. A line equal to the
/// unknown token becomes a fresh unknown placeholder.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line holds an invalid label, or
/// `ParseError::TooManyLabels` if the limit is exceeded.
pub fn parse_labels_text(
    text: &str,
    format: &LabelFormat,
    unknowns: &mut UnknownFactory,
) -> Result<Vec<Label>, ParseError> {
    let mut labels = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let name = validate_label(trimmed)
            .map_err(|e| ParseError::InvalidFormat(format!("line {line_num}: {e}")))?;

        format.check_limit(labels.len())?;
        labels.push(format.label_for(name, unknowns));
    }

    Ok(labels)
}

/// Parse a JSON array of strings. `null` entries and entries equal to the
/// unknown token become fresh unknown placeholders.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not an array of strings or
/// nulls, `ParseError::InvalidFormat` for invalid labels, or
/// `ParseError::TooManyLabels` if the limit is exceeded.
pub fn parse_labels_json(
    text: &str,
    format: &LabelFormat,
    unknowns: &mut UnknownFactory,
) -> Result<Vec<Label>, ParseError> {
    let entries: Vec<Option<String>> = serde_json::from_str(text)?;
    if entries.len() > format.max_labels {
        return Err(ParseError::TooManyLabels(entries.len()));
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            None => Ok(unknowns.next_label()),
            Some(raw) => {
                let name = validate_label(raw)
                    .map_err(|e| ParseError::InvalidFormat(format!("entry {i}: {e}")))?;
                Ok(format.label_for(name, unknowns))
            }
        })
        .collect()
}

/// Parse a comma-separated inline list such as `alice,bob,?`.
///
/// An empty string is an empty list.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for empty or invalid entries, or
/// `ParseError::TooManyLabels` if the limit is exceeded.
pub fn parse_labels_inline(
    list: &str,
    format: &LabelFormat,
    unknowns: &mut UnknownFactory,
) -> Result<Vec<Label>, ParseError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut labels = Vec::new();
    for (i, raw) in list.split(',').enumerate() {
        let name = validate_label(raw)
            .map_err(|e| ParseError::InvalidFormat(format!("entry {}: {e}", i + 1)))?;
        format.check_limit(labels.len())?;
        labels.push(format.label_for(name, unknowns));
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_labels_text() {
        let text = "# speakers\nalice\n\n  bob  \n?\nalice\n?\n";
        let mut unknowns = UnknownFactory::new();

        let labels = parse_labels_text(text, &LabelFormat::default(), &mut unknowns).unwrap();
        assert_eq!(
            labels,
            vec![
                Label::named("alice"),
                Label::named("bob"),
                Label::unknown(0),
                Label::named("alice"),
                Label::unknown(1),
            ]
        );
        assert_eq!(unknowns.issued(), 2);
    }

    #[test]
    fn test_custom_unknown_token() {
        let format = LabelFormat {
            unknown_token: "<unk>".to_string(),
            ..LabelFormat::default()
        };
        let mut unknowns = UnknownFactory::new();

        let labels = parse_labels_text("?\n<unk>\n", &format, &mut unknowns).unwrap();
        assert_eq!(labels, vec![Label::named("?"), Label::unknown(0)]);
    }

    #[test]
    fn test_parse_labels_text_invalid_line() {
        let mut unknowns = UnknownFactory::new();
        let text = "alice\nb\u{1}ob\n";
        let err = parse_labels_text(text, &LabelFormat::default(), &mut unknowns).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_parse_labels_text_limit() {
        let format = LabelFormat {
            max_labels: 2,
            ..LabelFormat::default()
        };
        let mut unknowns = UnknownFactory::new();

        assert_eq!(
            parse_labels_text("a\nb\n", &format, &mut unknowns)
                .unwrap()
                .len(),
            2
        );
        assert!(matches!(
            parse_labels_text("a\nb\nc\n", &format, &mut unknowns),
            Err(ParseError::TooManyLabels(3))
        ));
    }

    #[test]
    fn test_parse_labels_json_limit() {
        let format = LabelFormat {
            max_labels: 2,
            ..LabelFormat::default()
        };
        let mut unknowns = UnknownFactory::new();

        assert_eq!(
            parse_labels_json(r#"["a", null]"#, &format, &mut unknowns)
                .unwrap()
                .len(),
            2
        );
        assert!(matches!(
            parse_labels_json(r#"["a", "b", null]"#, &format, &mut unknowns),
            Err(ParseError::TooManyLabels(3))
        ));
    }

    #[test]
    fn test_parse_labels_json() {
        let mut unknowns = UnknownFactory::new();
        let text = r#"["alice", null, "?", "bob"]"#;
        let labels = parse_labels_json(text, &LabelFormat::default(), &mut unknowns).unwrap();
        assert_eq!(
            labels,
            vec![
                Label::named("alice"),
                Label::unknown(0),
                Label::unknown(1),
                Label::named("bob"),
            ]
        );
    }

    #[test]
    fn test_parse_labels_json_invalid() {
        let mut unknowns = UnknownFactory::new();
        assert!(matches!(
            parse_labels_json(r#"{"a": 1}"#, &LabelFormat::default(), &mut unknowns),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(
            parse_labels_json(r#"["ok", ""]"#, &LabelFormat::default(), &mut unknowns),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_labels_inline() {
        let mut unknowns = UnknownFactory::new();
        let format = LabelFormat::default();

        let labels = parse_labels_inline("A, B,?", &format, &mut unknowns).unwrap();
        assert_eq!(
            labels,
            vec![Label::named("A"), Label::named("B"), Label::unknown(0)]
        );

        assert!(parse_labels_inline("", &format, &mut unknowns)
            .unwrap()
            .is_empty());
        assert!(parse_labels_inline("A,,B", &format, &mut unknowns).is_err());
    }

    #[test]
    fn test_parse_labels_file() {
        let mut unknowns = UnknownFactory::new();
        let format = LabelFormat::default();

        let mut txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(txt, "alice\nbob").unwrap();
        let labels = parse_labels_file(txt.path(), &format, &mut unknowns).unwrap();
        assert_eq!(labels, vec![Label::named("alice"), Label::named("bob")]);

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"["carol", null]"#).unwrap();
        let labels = parse_labels_file(json.path(), &format, &mut unknowns).unwrap();
        assert_eq!(labels, vec![Label::named("carol"), Label::unknown(0)]);
    }

    #[test]
    fn test_parse_labels_file_binary() {
        let mut unknowns = UnknownFactory::new();
        let mut bin = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        bin.write_all(b"BAM\x01\x00\x00\x00").unwrap();

        assert!(matches!(
            parse_labels_file(bin.path(), &LabelFormat::default(), &mut unknowns),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_labels_file_missing() {
        let mut unknowns = UnknownFactory::new();
        assert!(matches!(
            parse_labels_file(
                Path::new("/nonexistent/labels.txt"),
                &LabelFormat::default(),
                &mut unknowns
            ),
            Err(ParseError::Io(_))
        ));
    }
}
