//! Demo terrain with one of every surface snowfall cares about.

use snowfall_engine::world::World;
use snowfall_engine::world::chunk::Chunk;
use snowfall_engine::world::position::{BlockPos, ChunkPos, LocalBlockPos};

use crate::block;

/// Grass surface height of the demo world.
pub const SURFACE_Y: i64 = 4;
/// Radius of the still-water pond centred on the origin.
pub const POND_RADIUS: i64 = 4;
/// The flowing-water channel runs along this x.
pub const CHANNEL_X: i64 = 8;
/// Top of the stone pillar at (-6, 3).
pub const PILLAR_TOP: i64 = 8;

/// Flat world: bedrock at y=0, stone y=1..=3, grass at y=4. On top of that:
/// - a still-water pond of radius `POND_RADIUS` around (0, 0),
/// - a flowing-water channel along x = `CHANNEL_X`, z in -8..=8,
/// - yellow flowers scattered on the grass,
/// - a stone pillar at (-6, 3) reaching y = `PILLAR_TOP`.
pub fn generate_snowfield(world: &World, chunk_radius: i32) {
    for cx in -chunk_radius..chunk_radius {
        for cz in -chunk_radius..chunk_radius {
            let mut chunk = Chunk::new();
            for x in 0..16u8 {
                for z in 0..16u8 {
                    chunk.set_block(LocalBlockPos { x, y: 0, z }, block::BEDROCK);
                    for y in 1..SURFACE_Y {
                        chunk.set_block(LocalBlockPos { x, y, z }, block::STONE);
                    }
                    chunk.set_block(LocalBlockPos { x, y: SURFACE_Y, z }, block::GRASS);
                }
            }
            world.insert_chunk(ChunkPos::new(i64::from(cx), i64::from(cz)), chunk);
        }
    }

    for x in -POND_RADIUS..=POND_RADIUS {
        for z in -POND_RADIUS..=POND_RADIUS {
            if x * x + z * z <= POND_RADIUS * POND_RADIUS {
                world.set_block(BlockPos::new(x, SURFACE_Y, z), block::STATIONARY_WATER);
            }
        }
    }

    for z in -8..=8 {
        world.set_block(BlockPos::new(CHANNEL_X, SURFACE_Y, z), block::WATER);
    }

    let extent = chunk_radius as i64 * 16;
    for x in -extent..extent {
        for z in -extent..extent {
            if is_flower_spot(x, z) {
                world.set_block(BlockPos::new(x, SURFACE_Y + 1, z), block::YELLOW_FLOWER);
            }
        }
    }

    for y in SURFACE_Y + 1..=PILLAR_TOP {
        world.set_block(BlockPos::new(-6, y, 3), block::STONE);
    }
}

/// Flowers grow on dry grass at a sparse, fixed pattern.
pub fn is_flower_spot(x: i64, z: i64) -> bool {
    let dry = x * x + z * z > POND_RADIUS * POND_RADIUS && x != CHANNEL_X && (x, z) != (-6, 3);
    dry && (x * 7 + z * 13).rem_euclid(11) == 0
}
