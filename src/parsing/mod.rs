//! Readers for reference and hypothesis label sequences.
//!
//! Two input formats are supported:
//!
//! - **Line format** (default): one label per line, `#` comments and blank
//!   lines ignored
//! - **JSON** (`.json` extension): an array of strings, `null` entries are
//!   unknown placeholders
//!
//! In both formats an entry equal to the unknown token (`?` by default)
//! becomes a fresh [`Label::Unknown`](crate::core::label::Label::Unknown).
//! Use a single [`UnknownFactory`](crate::core::label::UnknownFactory) for
//! both sides of a comparison so every placeholder is a distinct instance.
//!
//! ## Example
//!
//! ```rust
//! use label_matcher::core::label::{Label, UnknownFactory};
//! use label_matcher::parsing::labels::{parse_labels_text, LabelFormat};
//!
//! let mut unknowns = UnknownFactory::new();
//! let text = "alice\n?\nbob\n";
//! let labels = parse_labels_text(text, &LabelFormat::default(), &mut unknowns).unwrap();
//!
//! assert_eq!(labels[0], Label::named("alice"));
//! assert!(labels[1].is_unknown());
//! ```

pub mod labels;
