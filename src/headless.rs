//! A rendering context that keeps primitive state in memory instead of on a GPU.
//!
//! Useful for tests, for exporting buffers, and for CPU-side hit testing.
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use glam::DVec2;

use crate::{
    buffers::{
        ErrorBuffer, FancyScatterBuffer, LineBuffer, PackedBuffer, Positioned, ScatterBuffer,
    },
    pick::{PickHit, nearest_point},
    render::{RenderContext, RenderPrimitive},
};

/// Creates [`HeadlessPrimitive`]s and counts how many are alive.
#[derive(Debug, Clone, Default)]
pub struct HeadlessContext {
    live: Arc<AtomicUsize>,
    created: Arc<AtomicUsize>,
}

impl HeadlessContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives created and not yet disposed.
    pub fn live_objects(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Primitives created over the context's lifetime.
    pub fn created_objects(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    fn create<S>(&mut self) -> HeadlessPrimitive<S> {
        self.live.fetch_add(1, Ordering::Relaxed);
        self.created.fetch_add(1, Ordering::Relaxed);
        HeadlessPrimitive {
            state: None,
            updates: 0,
            disposed: false,
            live: Arc::clone(&self.live),
        }
    }
}

impl RenderContext for HeadlessContext {
    type Line = HeadlessPrimitive<LineBuffer>;
    type Error = HeadlessPrimitive<ErrorBuffer>;
    type Scatter = HeadlessPrimitive<ScatterBuffer>;
    type FancyScatter = HeadlessPrimitive<FancyScatterBuffer>;

    fn create_line(&mut self) -> Self::Line {
        self.create()
    }

    fn create_error(&mut self) -> Self::Error {
        self.create()
    }

    fn create_scatter(&mut self) -> Self::Scatter {
        self.create()
    }

    fn create_fancy_scatter(&mut self) -> Self::FancyScatter {
        self.create()
    }
}

/// Records the last state pushed to it.
#[derive(Debug)]
pub struct HeadlessPrimitive<S> {
    state: Option<S>,
    updates: usize,
    disposed: bool,
    live: Arc<AtomicUsize>,
}

impl<S> HeadlessPrimitive<S> {
    /// The last state pushed, if any.
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Number of updates received.
    pub fn update_count(&self) -> usize {
        self.updates
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<S: Positioned> HeadlessPrimitive<S> {
    /// Whether the primitive currently draws anything.
    pub fn is_drawing(&self) -> bool {
        self.state.as_ref().is_some_and(|s| !s.positions().is_empty())
    }

    /// Size of the position buffer from the last update, as uploaded.
    pub fn position_bytes(&self) -> usize {
        self.state
            .as_ref()
            .map_or(0, |s| s.positions().as_bytes().len())
    }

    /// Nearest drawn point to `target` (in linearized units) within `radius`.
    pub fn hit_test(&self, target: DVec2, radius: f64) -> Option<PickHit> {
        let state = self.state.as_ref()?;
        nearest_point(state.positions(), target, radius)
    }
}

impl<S: Clone> RenderPrimitive<S> for HeadlessPrimitive<S> {
    fn update(&mut self, state: &S) {
        if self.disposed {
            log::warn!("update pushed to a disposed primitive");
            return;
        }
        self.state = Some(state.clone());
        self.updates += 1;
    }

    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.state = None;
            self.live.fetch_sub(1, Ordering::Relaxed);
        }
    }
}
