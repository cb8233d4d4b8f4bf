//! Converts 2D scatter/line trace descriptions into packed buffers for GPU render primitives.
//!
//! - Two conversion paths: a fast one for uniform styling on linear axes and a
//!   per-point one for log axes, error bars and per-point marker styling
//! - Keeps the line, error-bar and marker primitives of a trace consistent on every update
//! - Maps primitive hits back to the original data points
//!
//! Quick start:
//!
//! ```
//! use scatter_gl::{Color, HeadlessContext, MarkerOptions, Mode, Scene, TraceOptions};
//!
//! let mut scene = Scene::new(HeadlessContext::new());
//! let id = scene
//!     .add_trace(
//!         TraceOptions::new()
//!             .with_x(vec![1.0, 2.0, f64::NAN, 4.0])
//!             .with_y(vec![1.0, 4.0, 9.0, 16.0])
//!             .with_mode(Mode::LINES_MARKERS)
//!             .with_marker(MarkerOptions::default().with_color(Color::from_rgb(0.2, 0.6, 1.0))),
//!     )
//!     .unwrap();
//!
//! let trace = scene.trace(id).unwrap();
//! assert_eq!(trace.id_to_index(), &[0, 1, 3]);
//! assert_eq!(scene.bounds().to_array(), [1.0, 1.0, 4.0, 16.0]);
//! ```
pub mod axis;
pub mod axis_scale;
pub mod bounds;
pub mod bubble;
pub mod buffers;
pub mod color;
pub mod colorscale;
pub mod convert;
pub mod error;
pub mod error_bars;
pub mod headless;
pub mod line_style;
pub mod options;
pub mod path;
pub mod pick;
pub mod render;
pub mod scene;
pub mod style;
pub mod symbol;
pub mod trace;

pub(crate) mod builders;
pub(crate) mod fancy;
pub(crate) mod fast;

// Iced re-exports.
pub use iced::Color;

// Re-exports of public types.
pub use axis::{Autorange, Axes, Axis, ExpandOptions, Extreme};
pub use axis_scale::AxisScale;
pub use bounds::Bounds;
pub use bubble::{BubbleSizing, SizeMode};
pub use buffers::{
    ErrorBuffer, FancyScatterBuffer, LineBuffer, PackedBuffer, Positioned, ScatterBuffer,
};
pub use color::{Paint, Rgba, parse_color};
pub use colorscale::{ColorMapping, Colorscale};
pub use convert::Converted;
pub use error::SceneError;
pub use error_bars::{ErrorBarOptions, ErrorBounds, ErrorKind};
pub use headless::{HeadlessContext, HeadlessPrimitive};
pub use line_style::{FillMode, LineDash, LineOptions};
pub use options::{HoverInfo, MarkerLine, MarkerOptions, Mode, TraceId, TraceOptions, Visibility};
pub use path::{ConversionPath, TraceFlags};
pub use pick::{PickHit, PickInfo};
pub use render::{ActiveMarkerRenderer, RenderContext, RenderHandle, RenderObject, RenderPrimitive};
pub use scene::Scene;
pub use style::StyleValue;
pub use trace::Trace;
