//! Snowfall: freeze exposed still water and lay snow on exposed floors.
//!
//! Each column of the region is scanned from the top of the region down.
//! The first block that is not air decides the column:
//!
//! | top block                 | action                         |
//! |---------------------------|--------------------------------|
//! | still water               | replace it with ice            |
//! | solid (not pass-through)  | place a snow layer on top      |
//! | anything else             | nothing                        |
//!
//! Scanning never continues past that first block, so a flower standing in
//! a pond shields the water under it.

use snowfall_engine::error::EditResult;
use snowfall_engine::grid::BlockGrid;
use snowfall_engine::operation::{BlockChangeCount, Operation};
use snowfall_engine::region::Region;
use snowfall_engine::world::block::BlockId;
use snowfall_engine::world::position::{BlockPos, ColumnPos};

use crate::block;

/// What the downward scan does with one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStep {
    /// Empty; keep scanning down.
    Skip,
    /// Freeze this cell and end the column.
    PlaceIceHere,
    /// Put snow in the cell above and end the column.
    PlaceSnowAbove,
    /// End the column without writing.
    StopNoAction,
}

pub fn classify(id: BlockId) -> ColumnStep {
    match id {
        block::STATIONARY_WATER => ColumnStep::PlaceIceHere,
        block::AIR => ColumnStep::Skip,
        id if block::can_pass_through(id) => ColumnStep::StopNoAction,
        _ => ColumnStep::PlaceSnowAbove,
    }
}

/// One snowfall pass over a region.
///
/// Writes at most one block per column. The grid and region are borrowed for
/// the lifetime of the operation; the only state kept between passes is the
/// cumulative change count.
pub struct SimulateSnow<'a, G: BlockGrid + ?Sized, R: Region + ?Sized> {
    grid: &'a mut G,
    region: &'a R,
    affected: usize,
}

impl<'a, G: BlockGrid + ?Sized, R: Region + ?Sized> SimulateSnow<'a, G, R> {
    pub fn new(grid: &'a mut G, region: &'a R) -> Self {
        Self {
            grid,
            region,
            affected: 0,
        }
    }

    /// Run a full pass and return how many blocks it changed.
    ///
    /// A budget error from the grid is returned as-is. Blocks changed before
    /// it are kept and already counted in `blocks_changed()`.
    pub fn run(&mut self) -> EditResult<usize> {
        let region = self.region;
        let (min_y, max_y) = (region.min_y(), region.max_y());
        tracing::debug!("Snowfall pass: scanning y {} down to {}", max_y, min_y);

        let mut changed = 0;
        for column in region.columns() {
            let Some((pos, block)) = self.scan_column(column, min_y, max_y) else {
                continue;
            };
            match self.grid.set_block(pos, block) {
                Ok(true) => {
                    changed += 1;
                    self.affected += 1;
                    tracing::trace!("Snowfall: {:?} -> {:?}", pos, block);
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Snowfall stopped after {} changes: {}", changed, e);
                    return Err(e);
                }
            }
        }

        tracing::debug!("Snowfall pass complete: {} blocks changed", changed);
        Ok(changed)
    }

    /// Find the single write (if any) this column calls for.
    fn scan_column(&self, column: ColumnPos, min_y: i64, max_y: i64) -> Option<(BlockPos, BlockId)> {
        for y in (min_y..=max_y).rev() {
            let pos = column.at(y);
            match classify(self.grid.block_type(pos)) {
                ColumnStep::Skip => continue,
                ColumnStep::PlaceIceHere => return Some((pos, block::ICE)),
                // Nothing exists above the top of the coordinate range.
                ColumnStep::PlaceSnowAbove => return pos.above().map(|above| (above, block::SNOW)),
                ColumnStep::StopNoAction => return None,
            }
        }
        None
    }
}

impl<G: BlockGrid + ?Sized, R: Region + ?Sized> Operation for SimulateSnow<'_, G, R> {
    /// The whole pass runs in one resume; there is never a follow-up.
    fn resume(&mut self) -> EditResult<Option<Box<dyn Operation>>> {
        self.run()?;
        Ok(None)
    }

    fn cancel(&mut self) {}
}

impl<G: BlockGrid + ?Sized, R: Region + ?Sized> BlockChangeCount for SimulateSnow<'_, G, R> {
    fn blocks_changed(&self) -> usize {
        self.affected
    }
}
