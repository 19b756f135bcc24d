//! Snowfall over the demo world through a real `EditSession`.

use snowfall_editor::block;
use snowfall_editor::config::RunConfig;
use snowfall_editor::demo::{self, CHANNEL_X, PILLAR_TOP, POND_RADIUS, SURFACE_Y};
use snowfall_editor::operations::SimulateSnow;
use snowfall_editor::report::SnowReport;
use snowfall_editor::run::run_snowfall;
use snowfall_engine::edit::EditSession;
use snowfall_engine::error::EditError;
use snowfall_engine::operation::{self, BlockChangeCount};
use snowfall_engine::region::{CylinderRegion, Region};
use snowfall_engine::world::World;
use snowfall_engine::world::block::BlockId;
use snowfall_engine::world::position::{BlockPos, ColumnPos};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn snowfield() -> World {
    let world = World::new();
    demo::generate_snowfield(&world, 2);
    world
}

/// Read a vertical column of block IDs from the world.
fn column(world: &World, x: i64, z: i64, y_range: std::ops::RangeInclusive<i64>) -> Vec<BlockId> {
    y_range.map(|y| world.get_block(BlockPos::new(x, y, z))).collect()
}

fn in_pond(c: ColumnPos) -> bool {
    c.x * c.x + c.z * c.z <= POND_RADIUS * POND_RADIUS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn demo_world_has_expected_surfaces() {
    let world = snowfield();
    assert_eq!(world.chunk_count(), 16);
    assert_eq!(world.get_block(BlockPos::new(0, SURFACE_Y, 0)), block::STATIONARY_WATER);
    assert_eq!(world.get_block(BlockPos::new(CHANNEL_X, SURFACE_Y, 0)), block::WATER);
    assert_eq!(world.get_block(BlockPos::new(-6, PILLAR_TOP, 3)), block::STONE);
    assert_eq!(world.get_block(BlockPos::new(20, SURFACE_Y, 20)), block::GRASS);
    assert_eq!(world.get_block(BlockPos::new(20, 0, 20)), block::BEDROCK);
}

#[test]
fn snowfall_freezes_pond_and_covers_grass() {
    let world = snowfield();
    let region = CylinderRegion::new(ColumnPos::new(0, 0), 10.0, 0, 64);
    let mut session = EditSession::new(&world, None);

    let mut snowfall = SimulateSnow::new(&mut session, &region);
    operation::complete(&mut snowfall).unwrap();
    let changed = snowfall.blocks_changed();

    let mut expected = 0;
    for c in region.columns() {
        let surface = world.get_block(c.at(SURFACE_Y));
        if in_pond(c) {
            assert_eq!(surface, block::ICE, "pond not frozen at {c:?}");
            expected += 1;
        } else if c.x == CHANNEL_X {
            assert_eq!(surface, block::WATER, "channel touched at {c:?}");
            assert_eq!(world.get_block(c.at(SURFACE_Y + 1)), block::AIR);
        } else if (c.x, c.z) == (-6, 3) {
            assert_eq!(world.get_block(c.at(PILLAR_TOP + 1)), block::SNOW);
            expected += 1;
        } else if demo::is_flower_spot(c.x, c.z) {
            assert_eq!(world.get_block(c.at(SURFACE_Y + 1)), block::YELLOW_FLOWER);
            assert_eq!(world.get_block(c.at(SURFACE_Y + 2)), block::AIR);
        } else {
            assert_eq!(world.get_block(c.at(SURFACE_Y + 1)), block::SNOW, "no snow at {c:?}");
            expected += 1;
        }
    }

    assert_eq!(changed, expected);
    assert_eq!(session.changes(), expected);
}

#[test]
fn snowfall_stays_inside_footprint() {
    let world = snowfield();
    let region = CylinderRegion::new(ColumnPos::new(0, 0), 10.0, 0, 64);
    let mut session = EditSession::new(&world, None);
    SimulateSnow::new(&mut session, &region).run().unwrap();

    for change in session.changed_blocks() {
        assert!(region.contains(change.pos.column().at(0)), "write outside footprint: {:?}", change);
    }
    assert_eq!(column(&world, 12, 0, 4..=6), vec![block::GRASS, block::AIR, block::AIR]);
}

#[test]
fn low_ceiling_hides_the_pillar_top() {
    // With the region topping out at y=6 the pillar reads as solid at y=6,
    // and the snow overwrites the stone at y=7.
    let world = snowfield();
    let region = CylinderRegion::new(ColumnPos::new(-6, 3), 0.0, 0, 6);
    let mut session = EditSession::new(&world, None);

    assert_eq!(SimulateSnow::new(&mut session, &region).run().unwrap(), 1);
    assert_eq!(world.get_block(BlockPos::new(-6, 7, 3)), block::SNOW);
    assert_eq!(
        column(&world, -6, 3, 5..=9),
        vec![block::STONE, block::STONE, block::SNOW, block::STONE, block::AIR]
    );
}

#[test]
fn session_limit_stops_snowfall_midway() {
    let world = snowfield();
    let region = CylinderRegion::new(ColumnPos::new(0, 0), 10.0, 0, 64);
    let mut session = EditSession::new(&world, Some(5));

    let mut snowfall = SimulateSnow::new(&mut session, &region);
    let result = operation::complete(&mut snowfall);
    assert_eq!(result, Err(EditError::MutationLimitExceeded { limit: 5 }));
    assert_eq!(snowfall.blocks_changed(), 5);

    let report = SnowReport::from_session(&session, region.column_count(), true);
    assert_eq!(report.affected, 5);
    assert_eq!(report.ice + report.snow, 5);
    assert!(report.limit_reached);
}

#[test]
fn report_counts_ice_and_snow_separately() {
    let world = snowfield();
    let region = CylinderRegion::new(ColumnPos::new(0, 0), 10.0, 0, 64);
    let mut session = EditSession::new(&world, None);
    SimulateSnow::new(&mut session, &region).run().unwrap();

    let columns = region.column_count();
    let report = SnowReport::from_session(&session, columns, false);
    let pond = region.columns().filter(|c| in_pond(*c)).count();

    assert_eq!(report.ice, pond);
    assert_eq!(report.ice + report.snow, report.affected);
    assert!(report.affected < columns);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["ice"], pond);
    assert_eq!(json["limit_reached"], false);
    assert_eq!(json["columns"], columns);
}

#[test]
fn run_snowfall_reports_budget_exhaustion_as_partial_success() {
    let world = snowfield();
    let config = RunConfig::from_args(["--max-changes", "7"].map(String::from)).unwrap();

    let report = run_snowfall(&world, &config).unwrap();

    assert!(report.limit_reached);
    assert_eq!(report.affected, 7);
    assert_eq!(report.ice + report.snow, 7);
    assert_eq!(report.columns, config.region().column_count());
}

#[test]
fn run_snowfall_without_budget_finishes() {
    let world = snowfield();
    let config = RunConfig::default();

    let report = run_snowfall(&world, &config).unwrap();

    assert!(!report.limit_reached);
    assert_eq!(world.get_block(BlockPos::new(0, SURFACE_Y, 0)), block::ICE);
    assert!(report.affected > 7);
    assert!(report.affected < report.columns);
}
