//! Budgeted editing on top of a shared `World`.

use crate::error::{EditError, EditResult};
use crate::grid::BlockGrid;
use crate::world::World;
use crate::world::block::BlockId;
use crate::world::position::BlockPos;

/// One confirmed block change made through a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChange {
    pub pos: BlockPos,
    pub old: BlockId,
    pub new: BlockId,
}

/// A bounded batch of edits against a world.
///
/// Every write that actually changes a block counts against the optional
/// limit and is recorded. Once `changes() == limit`, the next `set_block`
/// call fails with `MutationLimitExceeded` without touching the world.
pub struct EditSession<'w> {
    world: &'w World,
    limit: Option<usize>,
    changes: Vec<BlockChange>,
}

impl<'w> EditSession<'w> {
    pub fn new(world: &'w World, limit: Option<usize>) -> Self {
        Self {
            world,
            limit,
            changes: Vec::new(),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// Number of blocks changed so far.
    pub fn changes(&self) -> usize {
        self.changes.len()
    }

    pub fn changed_blocks(&self) -> &[BlockChange] {
        &self.changes
    }
}

impl BlockGrid for EditSession<'_> {
    fn block_type(&self, pos: BlockPos) -> BlockId {
        self.world.get_block(pos)
    }

    fn set_block(&mut self, pos: BlockPos, block: BlockId) -> EditResult<bool> {
        if let Some(limit) = self.limit {
            if self.changes.len() >= limit {
                tracing::debug!("Edit refused at {:?}: limit of {} changes reached", pos, limit);
                return Err(EditError::MutationLimitExceeded { limit });
            }
        }

        let old = self.world.set_block(pos, block);
        if old == block {
            return Ok(false);
        }
        self.changes.push(BlockChange { pos, old, new: block });
        Ok(true)
    }
}
