use crate::error::EditResult;
use crate::world::World;
use crate::world::block::BlockId;
use crate::world::position::BlockPos;

/// Read/write access to block storage, as seen by an editing operation.
pub trait BlockGrid {
    fn block_type(&self, pos: BlockPos) -> BlockId;

    /// Write `block` at `pos`. Returns `true` iff the stored block changed.
    ///
    /// Implementations that enforce a change budget fail with
    /// `EditError::MutationLimitExceeded` once it is exhausted.
    fn set_block(&mut self, pos: BlockPos, block: BlockId) -> EditResult<bool>;
}

/// Direct, unbudgeted access to the world.
impl BlockGrid for World {
    fn block_type(&self, pos: BlockPos) -> BlockId {
        self.get_block(pos)
    }

    fn set_block(&mut self, pos: BlockPos, block: BlockId) -> EditResult<bool> {
        Ok(World::set_block(self, pos, block) != block)
    }
}
