/// Opaque block identifier. The engine stores these without interpreting them.
/// The editor layer assigns meaning to specific IDs (e.g. 9 = still water,
/// 78 = snow layer).
///
/// The only semantic the engine enforces is that `BlockId::AIR` (0) is the
/// "empty" block: unloaded chunks read as AIR and all-air sections are freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockId(pub u16);

impl BlockId {
    /// The universal "empty" block.
    pub const AIR: BlockId = BlockId(0);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn is_air(self) -> bool {
        self.0 == Self::AIR.0
    }
}
