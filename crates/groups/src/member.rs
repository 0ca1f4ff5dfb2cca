use serde::{Deserialize, Serialize};

use fairshare_core::{Entity, MemberId};

/// A participant in a group.
///
/// Immutable for the engine's purposes; joins, leaves, and renames are handled
/// by the membership collaborator, which supplies a fresh roster per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub display_name: String,
}

impl Member {
    pub fn new(id: MemberId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
