use serde::{Deserialize, Serialize};

/// One salesperson from the configured roster.
///
/// `code` must match the prefix of `dimension_key` in the settlement table;
/// reports are emitted in roster order, employees without transactions get
/// zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub code: String,
    pub name: String,
}

impl Employee {
    /// Composite tag as stored in the settlement table ("code,name").
    pub fn dimension_key(&self) -> String {
        format!("{},{}", self.code, self.name)
    }
}
