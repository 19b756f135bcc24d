use super::Region;
use crate::world::position::{BlockPos, ColumnPos};

/// Axis-aligned box between two corners (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuboidRegion {
    min: BlockPos,
    max: BlockPos,
}

impl CuboidRegion {
    /// Corners may be given in any order.
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn min(&self) -> BlockPos {
        self.min
    }

    pub fn max(&self) -> BlockPos {
        self.max
    }
}

impl Region for CuboidRegion {
    fn min_y(&self) -> i64 {
        self.min.y
    }

    fn max_y(&self) -> i64 {
        self.max.y
    }

    /// X-major, then Z, both ascending.
    fn columns(&self) -> Box<dyn Iterator<Item = ColumnPos> + '_> {
        let (min, max) = (self.min, self.max);
        Box::new((min.x..=max.x).flat_map(move |x| (min.z..=max.z).map(move |z| ColumnPos::new(x, z))))
    }

    fn contains(&self, pos: BlockPos) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x)
            && (self.min.y..=self.max.y).contains(&pos.y)
            && (self.min.z..=self.max.z).contains(&pos.z)
    }

    /// Saturates at `usize::MAX` for footprints wider than that.
    fn column_count(&self) -> usize {
        let width = (self.max.x as i128 - self.min.x as i128 + 1) as u128;
        let length = (self.max.z as i128 - self.min.z as i128 + 1) as u128;
        width
            .checked_mul(length)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX)
    }
}
