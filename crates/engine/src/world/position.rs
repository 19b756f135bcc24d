/// Absolute block position in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl BlockPos {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The cell directly on top of this one, or `None` at the top of the
    /// addressable range.
    pub const fn above(&self) -> Option<Self> {
        match self.y.checked_add(1) {
            Some(y) => Some(Self::new(self.x, y, self.z)),
            None => None,
        }
    }

    pub const fn column(&self) -> ColumnPos {
        ColumnPos::new(self.x, self.z)
    }

    /// The chunk this block belongs to.
    pub const fn chunk(&self) -> ChunkPos {
        ChunkPos {
            x: self.x >> 4,
            z: self.z >> 4,
        }
    }

    /// Position within the chunk (0..16 on x/z, unbounded y).
    pub const fn local(&self) -> LocalBlockPos {
        LocalBlockPos {
            x: (self.x & 0xF) as u8,
            y: self.y,
            z: (self.z & 0xF) as u8,
        }
    }
}

/// Horizontal base of a vertical column of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnPos {
    pub x: i64,
    pub z: i64,
}

impl ColumnPos {
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// The cell of this column at height `y`.
    pub const fn at(&self, y: i64) -> BlockPos {
        BlockPos::new(self.x, y, self.z)
    }
}

/// Chunk column position (each chunk is 16x16 blocks horizontally).
///
/// Kept at full `i64` width so every block column maps to its own chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i64,
    pub z: i64,
}

impl ChunkPos {
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }
}

/// Block position local to a chunk (x, z in 0..16).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalBlockPos {
    pub x: u8,
    pub y: i64,
    pub z: u8,
}

impl LocalBlockPos {
    pub const fn section_index(&self) -> i64 {
        self.y >> 4
    }

    pub const fn section_local_y(&self) -> u8 {
        (self.y.rem_euclid(16)) as u8
    }
}
