//! Summary of a snowfall run, for logs and `--json` output.

use serde::Serialize;
use snowfall_engine::edit::EditSession;

use crate::block;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnowReport {
    /// Total blocks changed.
    pub affected: usize,
    /// Water frozen to ice.
    pub ice: usize,
    /// Snow layers placed.
    pub snow: usize,
    /// Columns in the region.
    pub columns: usize,
    /// The change budget ran out before the pass finished.
    pub limit_reached: bool,
}

impl SnowReport {
    pub fn from_session(session: &EditSession<'_>, columns: usize, limit_reached: bool) -> Self {
        let changes = session.changed_blocks();
        Self {
            affected: changes.len(),
            ice: changes.iter().filter(|c| c.new == block::ICE).count(),
            snow: changes.iter().filter(|c| c.new == block::SNOW).count(),
            columns,
            limit_reached,
        }
    }
}
