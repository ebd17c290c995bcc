//! Enums for recoded source fields.

use serde::{Deserialize, Serialize};

/// Textual yes/no domain for the binary-coded `over_time` and `attrition`
/// source columns. Serializes as `Yes` / `No`, matching the `CHECK (... IN
/// ('Yes', 'No'))` constraints in the generated schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    /// Recode a binary source value. Anything outside {0, 1} is rejected;
    /// a third output value must never be produced.
    pub fn from_binary(value: u8) -> Option<Self> {
        match value {
            0 => Some(Flag::No),
            1 => Some(Flag::Yes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "Yes",
            Flag::No => "No",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
