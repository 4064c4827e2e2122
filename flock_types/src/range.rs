use serde::{Deserialize, Serialize};

/// A request for one logical page of results.
///
/// Pages are 1-based positions into the result set, independent of the
/// transport's native cursor tokens. A page below 1 is rejected by the
/// sources (`SourceError::InvalidRange`) before any cursor state moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRange {
    pub page: u32,
}

impl StatusRange {
    pub fn new(page: u32) -> Self {
        Self { page }
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        Self { page: 1 }
    }
}
