//! Whole-number progress value, 0 to 100.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Progress of a workflow or an enrollment. Serialized as a bare number.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Saturates at 100.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self::HUNDRED
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ValidationError::TooLarge {
                field: "percentage",
                max: 100,
                actual: value.into(),
            });
        }
        Ok(Self(value))
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
