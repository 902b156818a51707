//! Text analysis for workout notes: pattern compilation and scanning.

pub mod pattern;
pub mod scanner;
pub mod token;

pub use pattern::KeywordPattern;
pub use scanner::Scanner;
pub use token::{SemanticToken, TokenKind};
