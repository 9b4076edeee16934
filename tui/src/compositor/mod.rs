//! Layered Compositor
//!
//! Manages z-ordered layers for rendering. Each layer has its own buffer
//! and can be positioned, resized and hidden independently.
//!
//! The quiz uses three: the screen, the status bar, and a toast that
//! floats over the screen while a notification is live.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
pub struct Compositor {
    /// All layers by ID
    layers: HashMap<LayerId, Layer>,
    /// Layers sorted by z-index for rendering
    render_order: Vec<LayerId>,
    /// Next layer ID to assign
    next_id: u32,
    /// Output buffer (composited result)
    output: Buffer,
    /// Total area
    area: Rect,
}

impl Compositor {
    /// Create a new compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(bounds, z_index));
        self.update_render_order();

        id
    }

    /// Get mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    /// Move and resize a layer, clearing its content
    pub fn place_layer(&mut self, id: LayerId, bounds: Rect) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.bounds != bounds {
                layer.bounds = bounds;
                // Buffer uses origin coordinates
                layer.buffer = Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height));
            }
        }
    }

    /// Set layer visibility
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        // Back to front
        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, &self.area, layer);
                }
            }
        }

        &self.output
    }

    /// Blit a layer onto the output buffer
    ///
    /// Every cell of a visible layer overwrites what is below, so a toast
    /// fully hides the screen behind it.
    fn blit_layer(output: &mut Buffer, area: &Rect, layer: &Layer) {
        let lb = &layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x + lx;
                let dst_y = lb.y + ly;

                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let src_idx = layer.buffer.index_of(lx, ly);
                if src_idx >= layer.buffer.content.len() {
                    continue;
                }

                let dst_idx = output.index_of(dst_x, dst_y);
                if dst_idx < output.content.len() {
                    output.content[dst_idx] = layer.buffer.content[src_idx].clone();
                }
            }
        }
    }

    /// Update render order based on z-indices
    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order
            .sort_by_key(|id| self.layers.get(id).map(|l| l.z_index).unwrap_or(0));
    }
}
