//! Strongly typed agent identifier.
//!
//! An `AgentId` is the index of an agent in the arena (`gw-agent`) and the
//! key under which the grid (`gw-grid`) tracks its placement.  The inner
//! integer is `pub` to allow direct indexing via `id.0 as usize`, but
//! callers should prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of an agent in arena storage.  Ids are handed out sequentially at
/// model construction and stay valid for the whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
