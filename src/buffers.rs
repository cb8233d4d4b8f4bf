//! Buffer states handed to the render primitives.
//!
//! Each struct holds exactly the fields its primitive consumes. Positions are
//! flat `[x0, y0, x1, y1, ...]` arrays and are shared between the line, error
//! and marker states of one trace. An empty position buffer tells the
//! primitive to draw nothing.
use std::sync::Arc;

use crate::color::Rgba;

/// Flat `f32` data that can be uploaded as raw bytes.
pub trait PackedBuffer {
    fn as_floats(&self) -> &[f32];

    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_floats())
    }
}

impl PackedBuffer for [f32] {
    fn as_floats(&self) -> &[f32] {
        self
    }
}

impl PackedBuffer for Vec<f32> {
    fn as_floats(&self) -> &[f32] {
        self
    }
}

impl PackedBuffer for Arc<[f32]> {
    fn as_floats(&self) -> &[f32] {
        self
    }
}

pub(crate) fn empty_positions() -> Arc<[f32]> {
    Arc::new([])
}

/// Buffer states that carry a flat position buffer.
pub trait Positioned {
    fn positions(&self) -> &[f32];
}

macro_rules! positioned {
    ($($ty:ty),*) => {
        $(impl Positioned for $ty {
            fn positions(&self) -> &[f32] {
                &self.positions
            }
        })*
    };
}

positioned!(LineBuffer, ErrorBuffer, ScatterBuffer, FancyScatterBuffer);

/// State of the line primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBuffer {
    pub positions: Arc<[f32]>,
    pub color: Rgba,
    /// Render width (twice the requested width).
    pub width: f32,
    /// Half-plane fill flags.
    pub fill: [bool; 4],
    pub fill_color: [Rgba; 4],
    /// Dash lengths in pixels.
    pub dashes: Vec<f32>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            positions: empty_positions(),
            color: [0.0, 0.0, 0.0, 1.0],
            width: 1.0,
            fill: [false; 4],
            fill_color: [[0.0, 0.0, 0.0, 1.0]; 4],
            dashes: vec![1.0],
        }
    }
}

/// State of one error-bar primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBuffer {
    pub positions: Arc<[f32]>,
    /// Four floats per point: `[neg_x, pos_x, neg_y, pos_y]`.
    pub errors: Arc<[f32]>,
    pub line_width: f32,
    pub cap_size: f32,
    pub color: Rgba,
}

impl Default for ErrorBuffer {
    fn default() -> Self {
        Self {
            positions: empty_positions(),
            errors: empty_positions(),
            line_width: 1.0,
            cap_size: 0.0,
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// State of the uniform-style marker primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterBuffer {
    pub positions: Arc<[f32]>,
    pub size: f32,
    pub color: Rgba,
    pub border_size: f32,
    pub border_color: Rgba,
}

impl Default for ScatterBuffer {
    fn default() -> Self {
        Self {
            positions: empty_positions(),
            size: 12.0,
            color: [0.0, 0.0, 0.0, 1.0],
            border_size: 1.0,
            border_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// State of the per-point marker primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FancyScatterBuffer {
    pub positions: Arc<[f32]>,
    /// Rendered sizes, one per point.
    pub sizes: Vec<f32>,
    /// RGBA fill colors, four floats per point.
    pub colors: Vec<f32>,
    pub glyphs: Vec<char>,
    pub border_widths: Vec<f32>,
    /// RGBA border colors, four floats per point.
    pub border_colors: Vec<f32>,
}

impl FancyScatterBuffer {
    /// Number of markers in the buffer.
    pub fn len(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
