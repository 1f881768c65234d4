use std::sync::Arc;
use tiny_skia::Pixmap;

/// Immutable full-canvas raster capture.
///
/// Clones share the same pixel buffer, so a capture can sit in the history
/// stack and in the active drawing session at the same time.
#[derive(Clone)]
pub struct Snapshot {
    pixmap: Arc<Pixmap>,
}

impl Snapshot {
    pub(crate) fn new(pixmap: Pixmap) -> Self {
        Self {
            pixmap: Arc::new(pixmap),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Premultiplied RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Returns true if both handles point at the same capture
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.pixmap, &other.pixmap)
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
