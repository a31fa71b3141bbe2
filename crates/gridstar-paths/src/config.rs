//! Search configuration.

/// How the engine tests whether a position already has a node in the open
/// set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Membership {
    /// O(1) lookup in a per-cell flag table. Improving an open position
    /// pushes a fresh node; the superseded one is skipped when pulled.
    #[default]
    Table,
    /// O(n) scan of the open set. An open position's node has its key
    /// lowered in place, so no superseded nodes exist.
    Scan,
}

/// Tunables for [`AstarSearch`](crate::AstarSearch).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Open-set membership strategy.
    pub membership: Membership,
}

impl SearchConfig {
    /// Return a copy using the given membership strategy.
    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }
}
