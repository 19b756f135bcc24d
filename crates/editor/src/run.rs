//! One snowfall run over a world, as driven by the binary.

use anyhow::Result;
use snowfall_engine::edit::EditSession;
use snowfall_engine::error::EditError;
use snowfall_engine::operation::{self, BlockChangeCount};
use snowfall_engine::world::World;

use crate::config::RunConfig;
use crate::operations::SimulateSnow;
use crate::report::SnowReport;

/// Let snow fall on the configured region of `world`.
///
/// Running out of change budget is not an error here: the blocks changed so
/// far stay in the world and the report has `limit_reached` set.
pub fn run_snowfall(world: &World, config: &RunConfig) -> Result<SnowReport> {
    let region = config.region();
    let columns = region.column_count();
    tracing::info!(
        "Snowfall over {} columns around ({}, {}), y {}..={}",
        columns,
        config.center.x,
        config.center.z,
        region.min_y(),
        region.max_y(),
    );

    let mut session = EditSession::new(world, config.max_changes);
    let mut snowfall = SimulateSnow::new(&mut session, region.as_ref());
    let limit_reached = match operation::complete(&mut snowfall) {
        Ok(()) => false,
        Err(EditError::MutationLimitExceeded { limit }) => {
            tracing::warn!("Change limit of {} reached; keeping partial snowfall", limit);
            true
        }
    };
    tracing::info!("Snowfall changed {} blocks", snowfall.blocks_changed());

    Ok(SnowReport::from_session(&session, columns, limit_reached))
}
