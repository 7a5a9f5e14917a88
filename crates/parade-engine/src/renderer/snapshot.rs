use bytemuck::{Pod, Zeroable};
use glam::DVec2;

use crate::components::body::OrbitalBody;

/// Per-body position handed to the rendering sink.
/// Must match the host protocol: 2 floats = 8 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyPosition {
    /// X in the center's coordinate space.
    pub x: f32,
    /// Y in the center's coordinate space.
    pub y: f32,
}

impl BodyPosition {
    pub const FLOATS: usize = 2;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Position snapshot rebuilt once per frame, in body order.
pub struct PositionBuffer {
    positions: Vec<BodyPosition>,
}

impl PositionBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
        }
    }

    /// Project every body around `center` and overwrite the snapshot.
    pub fn write(&mut self, bodies: &[OrbitalBody], center: DVec2) {
        self.positions.clear();
        self.positions.extend(bodies.iter().map(|body| {
            let p = body.position(center);
            BodyPosition {
                x: p.x as f32,
                y: p.y as f32,
            }
        }));
    }

    pub fn positions(&self) -> &[BodyPosition] {
        &self.positions
    }

    /// Flat `[x0, y0, x1, y1, ...]` view.
    fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Raw pointer to position data for zero-copy reads from WASM memory.
    pub fn positions_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

impl Default for PositionBuffer {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}
