//! Field inference heuristics.
//!
//! Decides whether a table's first row is a header, which columns or cells
//! hold first name, last name, and email, and how to pull an email out of
//! free-form cell content.

pub mod detect;
pub mod email;
pub mod header;
pub mod headerless;
pub mod patterns;

/// A name/email triple discovered in the table, before id and alias
/// assignment. Emitted only when an email was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Discovered first name, possibly empty.
    pub first_name: String,
    /// Discovered last name, possibly empty.
    pub last_name: String,
    /// The resolved email address.
    pub email: String,
}
