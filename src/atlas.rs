use crate::geometry::Rect;

/// Grid layout of a tile atlas image.
///
/// The column count is a property of the atlas image, not of the tilemap
/// that indexes into it: `TilesetFloor.png` is 22 cells wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AtlasLayout {
    /// Cells per atlas row.
    pub columns: u32,
    /// Side length of one square cell in pixels.
    pub cell_size: u32,
}

impl AtlasLayout {
    pub const DEFAULT_COLUMNS: u32 = 22;

    pub fn new(columns: u32, cell_size: u32) -> Self {
        Self { columns: columns.max(1), cell_size }
    }

    /// Source rectangle for a 1-based tile ID (row-major order).
    ///
    /// IDs `<= 0` mean "no tile" and return `None`.
    pub fn source_rect(&self, id: i32) -> Option<Rect> {
        if id <= 0 {
            return None;
        }
        let index = (id - 1) as u32;
        let col = index % self.columns;
        let row = index / self.columns;
        let size = self.cell_size as f32;
        Some(Rect::new(col as f32 * size, row as f32 * size, size, size))
    }
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLUMNS, 16)
    }
}
