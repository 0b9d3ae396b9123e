use crate::heuristics::detect::TableMode;

/// A derived record for one discovered email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Sequential positive id, unique within one extraction run.
    pub id: usize,
    /// Discovered first name, possibly empty.
    pub first_name: String,
    /// Discovered last name, possibly empty.
    pub last_name: String,
    /// The email address found in the source table. Always syntactically
    /// valid: a record is only emitted when an email was resolved.
    pub original_email: String,
    /// Generated alias address derived from `original_email`.
    pub alias_email: String,
}

impl Record {
    /// Create a new Record.
    pub const fn new(
        id: usize,
        first_name: String,
        last_name: String,
        original_email: String,
        alias_email: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            original_email,
            alias_email,
        }
    }
}

/// The complete, immutable result of one processing run.
///
/// Callers own the single current instance and replace it wholesale on each
/// new upload; there is no partial update or merge across runs.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Which extraction strategy was applied.
    pub mode: TableMode,
    /// One record per discovered email, in table order.
    pub records: Vec<Record>,
    /// Number of emails discovered (equals `records.len()`).
    pub emails_found: usize,
}

impl Extraction {
    /// Create a new Extraction result.
    pub const fn new(mode: TableMode, records: Vec<Record>, emails_found: usize) -> Self {
        Self {
            mode,
            records,
            emails_found,
        }
    }

    /// Returns true if no records were produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
