//! # myotag
//!
//! A semantic annotation engine for free-text workout notes.
//!
//! Given a note like `"sore knee, lower back tight"`, myotag detects
//! body-part and symptom mentions, resolves overlapping matches, pairs each
//! symptom with its nearest body-part mention, and emits structured body
//! issue records suitable for highlighting and persistence.
//!
//! ## Features
//!
//! - Pure Rust, no I/O, no runtime configuration
//! - Case-insensitive, word-bounded keyword matching with longest-alias
//!   precedence ("lower back" beats "back")
//! - Alias fan-out: one mention can expand into several canonical muscle
//!   groups ("shoulder" covers all three delts)
//! - Byte-accurate token spans valid for slicing the original text, for
//!   highlighting overlays
//! - Referentially transparent entry point, safe to call per keystroke and
//!   from multiple threads
//!
//! ## Example
//!
//! ```
//! use myotag::{detect, MuscleGroup};
//!
//! let detection = detect("shoulder pain after bench");
//!
//! assert_eq!(detection.issues.len(), 3);
//! assert_eq!(detection.issues[0].body_part, MuscleGroup::FrontDelt);
//! assert_eq!(detection.issues[0].symptom, "pain");
//! ```

pub mod analysis;
pub mod detect;
pub mod error;
pub mod extract;
pub mod lexicon;

pub use analysis::{KeywordPattern, Scanner, SemanticToken, TokenKind};
pub use detect::{Detection, detect};
pub use error::{MyotagError, Result};
pub use extract::{DetectedIssue, extract_issues};
pub use lexicon::{MuscleGroup, Severity, groups_of, severity_of};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
