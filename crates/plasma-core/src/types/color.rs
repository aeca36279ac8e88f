use serde::{Deserialize, Serialize};
use std::fmt;

/// Token class identifier. Values of different colors never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn new(id: u32) -> Self {
        Color(id)
    }

    pub const fn id(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Color {
    fn from(id: u32) -> Self {
        Color(id)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
