//! Issue extraction: pairing scanned tokens into persistable records.

pub mod issue;
pub mod pairer;

pub use issue::DetectedIssue;
pub use pairer::extract_issues;
