//! Events delivered by the live push stream.

use serde::{Deserialize, Serialize};

use crate::{Status, StatusId, UserId};

/// One event from the live stream. The stream dispatcher offers every
/// entry to every registered filter source via
/// `FilterSource::matches`; sources never see the stream itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    /// A newly published status.
    Status(Status),
    /// A deletion notice for a previously delivered status.
    Deleted { id: StatusId, user_id: UserId },
}

impl Entry {
    /// The contained status, if this entry carries one.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Entry::Status(s) => Some(s),
            Entry::Deleted { .. } => None,
        }
    }
}
