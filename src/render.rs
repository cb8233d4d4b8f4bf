//! The contract between a trace and the primitives that draw it.
use core::fmt;

use crate::buffers::{ErrorBuffer, FancyScatterBuffer, LineBuffer, ScatterBuffer};

/// A GPU-backed drawing primitive fed with full state replacements.
pub trait RenderPrimitive<S> {
    /// Replace the primitive's state. An empty position buffer draws nothing.
    fn update(&mut self, state: &S);

    /// Release the primitive's resources.
    fn dispose(&mut self);
}

/// Creates the four primitive kinds a trace draws with.
pub trait RenderContext {
    type Line: RenderPrimitive<LineBuffer>;
    type Error: RenderPrimitive<ErrorBuffer>;
    type Scatter: RenderPrimitive<ScatterBuffer>;
    type FancyScatter: RenderPrimitive<FancyScatterBuffer>;

    fn create_line(&mut self) -> Self::Line;
    fn create_error(&mut self) -> Self::Error;
    fn create_scatter(&mut self) -> Self::Scatter;
    fn create_fancy_scatter(&mut self) -> Self::FancyScatter;
}

/// Unique identifier for one render object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub(crate) u64);

impl RenderHandle {
    pub(crate) fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RenderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Render({})", self.0)
    }
}

/// A primitive owned by a trace, tagged with its handle.
#[derive(Debug)]
pub struct RenderObject<P> {
    handle: RenderHandle,
    primitive: P,
}

impl<P> RenderObject<P> {
    pub(crate) fn new(primitive: P) -> Self {
        Self {
            handle: RenderHandle::new(),
            primitive,
        }
    }

    pub fn handle(&self) -> RenderHandle {
        self.handle
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub(crate) fn update<S>(&mut self, state: &S)
    where
        P: RenderPrimitive<S>,
    {
        RenderPrimitive::<S>::update(&mut self.primitive, state);
    }

    pub(crate) fn dispose<S>(mut self)
    where
        P: RenderPrimitive<S>,
    {
        RenderPrimitive::<S>::dispose(&mut self.primitive);
    }
}

/// Which marker primitive currently holds the trace's markers.
///
/// At most one of the two marker primitives has a non-empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveMarkerRenderer {
    #[default]
    None,
    /// The uniform-style primitive.
    Fast,
    /// The per-point primitive.
    Fancy,
}
