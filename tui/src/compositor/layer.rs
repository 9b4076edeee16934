//! A single compositor layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// An off-screen buffer placed somewhere on the terminal
pub struct Layer {
    /// Where the layer lands on the output
    pub bounds: Rect,
    /// Draw order; higher is nearer the viewer
    pub z_index: i32,
    /// Hidden layers are skipped when compositing
    pub visible: bool,
    /// Content, in layer-local coordinates (origin 0,0)
    pub buffer: Buffer,
}

impl Layer {
    pub(super) fn new(bounds: Rect, z_index: i32) -> Self {
        Self {
            bounds,
            z_index,
            visible: true,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
        }
    }
}
