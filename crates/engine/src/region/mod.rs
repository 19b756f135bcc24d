//! Bounded volumes that editing operations walk column by column.

mod cuboid;
mod cylinder;

pub use cuboid::CuboidRegion;
pub use cylinder::CylinderRegion;

use crate::world::position::{BlockPos, ColumnPos};

/// A volume with a fixed vertical extent and a horizontal footprint.
///
/// `columns()` yields every distinct (x, z) of the footprint exactly once.
/// The iterator is lazy and borrowed from the region; ask for a fresh one to
/// walk the footprint again.
pub trait Region {
    fn min_y(&self) -> i64;
    fn max_y(&self) -> i64;
    fn columns(&self) -> Box<dyn Iterator<Item = ColumnPos> + '_>;
    fn contains(&self, pos: BlockPos) -> bool;

    fn column_count(&self) -> usize {
        self.columns().count()
    }
}
