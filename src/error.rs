//! Error types for the myotag library.
//!
//! All fallible operations in this crate return [`Result`], which wraps
//! [`MyotagError`]. The detection facade itself is infallible; errors can
//! only arise while assembling the engine (pattern compilation from the
//! lexicon tables) or when parsing canonical identifiers from text.
//!
//! # Examples
//!
//! ```
//! use myotag::error::{MyotagError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MyotagError::pattern("empty keyword set"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for myotag operations.
#[derive(Error, Debug)]
pub enum MyotagError {
    /// Pattern compilation errors (invalid or degenerate keyword sets)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// An identifier did not name a canonical muscle group
    #[error("Unknown muscle group: {0}")]
    UnknownMuscleGroup(String),

    /// Lexicon table errors (missing or inconsistent entries)
    #[error("Lexicon error: {0}")]
    Lexicon(String),
}

/// Result type alias for operations that may fail with MyotagError.
pub type Result<T> = std::result::Result<T, MyotagError>;

impl MyotagError {
    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        MyotagError::Pattern(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        MyotagError::Lexicon(msg.into())
    }
}
