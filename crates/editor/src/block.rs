//! Legacy numeric block ids and the property lookups edit operations need.
//!
//! Only the ids referenced by operations, the demo world, or the
//! pass-through table are named here. Anything else is treated as an opaque
//! solid block.

use snowfall_engine::world::block::BlockId;

pub const AIR: BlockId = BlockId(0);
pub const STONE: BlockId = BlockId(1);
pub const GRASS: BlockId = BlockId(2);
pub const DIRT: BlockId = BlockId(3);
pub const COBBLESTONE: BlockId = BlockId(4);
pub const SAPLING: BlockId = BlockId(6);
pub const BEDROCK: BlockId = BlockId(7);
pub const WATER: BlockId = BlockId(8);
pub const STATIONARY_WATER: BlockId = BlockId(9);
pub const LAVA: BlockId = BlockId(10);
pub const STATIONARY_LAVA: BlockId = BlockId(11);
pub const SAND: BlockId = BlockId(12);
pub const GRAVEL: BlockId = BlockId(13);
pub const LOG: BlockId = BlockId(17);
pub const LEAVES: BlockId = BlockId(18);
pub const GLASS: BlockId = BlockId(20);
pub const POWERED_RAIL: BlockId = BlockId(27);
pub const DETECTOR_RAIL: BlockId = BlockId(28);
pub const WEB: BlockId = BlockId(30);
pub const LONG_GRASS: BlockId = BlockId(31);
pub const DEAD_BUSH: BlockId = BlockId(32);
pub const YELLOW_FLOWER: BlockId = BlockId(37);
pub const RED_FLOWER: BlockId = BlockId(38);
pub const BROWN_MUSHROOM: BlockId = BlockId(39);
pub const RED_MUSHROOM: BlockId = BlockId(40);
pub const TORCH: BlockId = BlockId(50);
pub const FIRE: BlockId = BlockId(51);
pub const REDSTONE_WIRE: BlockId = BlockId(55);
pub const CROPS: BlockId = BlockId(59);
pub const SIGN_POST: BlockId = BlockId(63);
pub const LADDER: BlockId = BlockId(65);
pub const RAILS: BlockId = BlockId(66);
pub const WALL_SIGN: BlockId = BlockId(68);
pub const LEVER: BlockId = BlockId(69);
pub const STONE_PRESSURE_PLATE: BlockId = BlockId(70);
pub const WOODEN_PRESSURE_PLATE: BlockId = BlockId(72);
pub const REDSTONE_TORCH_OFF: BlockId = BlockId(75);
pub const REDSTONE_TORCH_ON: BlockId = BlockId(76);
pub const STONE_BUTTON: BlockId = BlockId(77);
/// The thin snow layer, not the full snow block.
pub const SNOW: BlockId = BlockId(78);
pub const ICE: BlockId = BlockId(79);
pub const SNOW_BLOCK: BlockId = BlockId(80);
pub const REED: BlockId = BlockId(83);
pub const PORTAL: BlockId = BlockId(90);
pub const REDSTONE_REPEATER_OFF: BlockId = BlockId(93);
pub const REDSTONE_REPEATER_ON: BlockId = BlockId(94);
pub const PUMPKIN_STEM: BlockId = BlockId(104);
pub const MELON_STEM: BlockId = BlockId(105);
pub const VINE: BlockId = BlockId(106);
pub const NETHER_WART: BlockId = BlockId(115);
pub const END_PORTAL: BlockId = BlockId(119);

/// Can entities (and snow) pass through this block without it acting as a
/// floor? Air, water, plants and thin fixtures do. Lava and unknown ids do
/// not.
pub fn can_pass_through(id: BlockId) -> bool {
    matches!(
        id,
        AIR | WATER
            | STATIONARY_WATER
            | SAPLING
            | POWERED_RAIL
            | DETECTOR_RAIL
            | WEB
            | LONG_GRASS
            | DEAD_BUSH
            | YELLOW_FLOWER
            | RED_FLOWER
            | BROWN_MUSHROOM
            | RED_MUSHROOM
            | TORCH
            | FIRE
            | REDSTONE_WIRE
            | CROPS
            | SIGN_POST
            | LADDER
            | RAILS
            | WALL_SIGN
            | LEVER
            | STONE_PRESSURE_PLATE
            | WOODEN_PRESSURE_PLATE
            | REDSTONE_TORCH_OFF
            | REDSTONE_TORCH_ON
            | STONE_BUTTON
            | SNOW
            | REED
            | PORTAL
            | REDSTONE_REPEATER_OFF
            | REDSTONE_REPEATER_ON
            | PUMPKIN_STEM
            | MELON_STEM
            | VINE
            | NETHER_WART
            | END_PORTAL
    )
}
