//! The whiteboard's pixel surface

use std::path::Path;

use tiny_skia::Pixmap;

use crate::RasterError;

/// Canvas width used by the whiteboard application.
pub const WHITEBOARD_WIDTH: u32 = 800;
/// Canvas height used by the whiteboard application.
pub const WHITEBOARD_HEIGHT: u32 = 600;

/// An owned 2D raster target with fixed dimensions.
///
/// Created once per whiteboard view, cleared to opaque white on creation
/// and on every [`clear`](Surface::clear). There is exactly one owner; the
/// shape interpreter mutates it in place.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Create a surface cleared to opaque white.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidDimensions { width, height })?;
        let mut surface = Self { pixmap };
        surface.clear();
        Ok(surface)
    }

    /// Create a surface with the whiteboard's 800x600 dimensions.
    pub fn whiteboard() -> Self {
        // Statically valid dimensions; new() cannot fail here.
        match Self::new(WHITEBOARD_WIDTH, WHITEBOARD_HEIGHT) {
            Ok(surface) => surface,
            Err(_) => unreachable!("whiteboard dimensions are non-zero"),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Clear the full extent to opaque white.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::WHITE);
    }

    /// Raw premultiplied RGBA pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// One pixel as premultiplied `[r, g, b, a]`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only checks the linear index, so an x past the row
        // end would wrap into the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Encode the current contents as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RasterError::Png(e.to_string()))
    }

    /// Write a PNG snapshot of the current contents.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        self.pixmap
            .save_png(path.as_ref())
            .map_err(|e| RasterError::Png(e.to_string()))
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}
