//! Minimal multi-trace driver: owns the context, the axes and every trace.
use indexmap::IndexMap;

use crate::{
    axis::Axes,
    axis_scale::AxisScale,
    bounds::Bounds,
    error::SceneError,
    options::{TraceId, TraceOptions},
    pick::{PickHit, PickInfo},
    render::{RenderContext, RenderHandle},
    trace::Trace,
};

/// A set of traces drawn against one pair of axes.
///
/// Traces are kept in insertion order. Each render object handle maps back to
/// the trace that owns it so primitive hits can be resolved.
pub struct Scene<C: RenderContext> {
    ctx: C,
    axes: Axes,
    traces: IndexMap<TraceId, Trace<C>>,
    handles: IndexMap<RenderHandle, TraceId>,
}

impl<C: RenderContext> Scene<C> {
    /// An empty scene with linear axes.
    pub fn new(ctx: C) -> Self {
        Self {
            ctx,
            axes: Axes::linear(),
            traces: IndexMap::new(),
            handles: IndexMap::new(),
        }
    }

    pub fn with_x_scale(mut self, scale: AxisScale) -> Self {
        self.axes.x.scale = scale;
        self
    }

    pub fn with_y_scale(mut self, scale: AxisScale) -> Self {
        self.axes.y.scale = scale;
        self
    }

    /// Convert `options` into a new trace.
    pub fn add_trace(&mut self, options: TraceOptions) -> Result<TraceId, SceneError> {
        let id = options.id;
        if self.traces.contains_key(&id) {
            log::warn!("{id} added twice");
            return Err(SceneError::DuplicateTrace(id));
        }
        let trace = Trace::new(&mut self.ctx, options, &mut self.axes);
        for handle in trace.handles() {
            self.handles.insert(handle, id);
        }
        log::debug!("{id}: added ({} traces)", self.traces.len() + 1);
        self.traces.insert(id, trace);
        Ok(id)
    }

    /// Replace the options of an existing trace.
    pub fn update_trace(&mut self, id: TraceId, options: TraceOptions) -> Result<(), SceneError> {
        let Some(trace) = self.traces.get_mut(&id) else {
            log::warn!("update of unknown {id}");
            return Err(SceneError::UnknownTrace(id));
        };
        trace.update(options, &mut self.axes);
        self.rebuild_autorange();
        Ok(())
    }

    /// Remove a trace and release its render objects.
    pub fn remove_trace(&mut self, id: TraceId) -> Result<(), SceneError> {
        let Some(trace) = self.traces.shift_remove(&id) else {
            log::warn!("removal of unknown {id}");
            return Err(SceneError::UnknownTrace(id));
        };
        for handle in trace.handles() {
            self.handles.shift_remove(&handle);
        }
        trace.dispose();
        self.rebuild_autorange();
        Ok(())
    }

    /// Resolve a hit reported by the render object behind `handle`.
    pub fn pick(&self, handle: RenderHandle, hit: PickHit) -> Result<PickInfo, SceneError> {
        let id = self.trace_for_handle(handle)?;
        let trace = self.traces.get(&id).ok_or(SceneError::UnknownTrace(id))?;
        trace.handle_pick(hit).ok_or_else(|| {
            log::warn!(
                "{id}: pick of point {} outside {} kept points",
                hit.point_id,
                trace.id_to_index().len()
            );
            SceneError::PointOutOfRange {
                trace: id,
                point_id: hit.point_id,
            }
        })
    }

    /// The trace owning the render object behind `handle`.
    pub fn trace_for_handle(&self, handle: RenderHandle) -> Result<TraceId, SceneError> {
        self.handles.get(&handle).copied().ok_or_else(|| {
            log::warn!("pick on unknown {handle}");
            SceneError::UnknownHandle(handle)
        })
    }

    /// Union of every trace's bounds; [`Bounds::EMPTY`] without traces.
    pub fn bounds(&self) -> Bounds {
        self.traces
            .values()
            .map(Trace::bounds)
            .fold(Bounds::EMPTY, |acc, b| acc.union(&b))
    }

    /// Change the axis scales and re-run every trace.
    pub fn set_scales(&mut self, x: AxisScale, y: AxisScale) {
        self.axes.x.scale = x;
        self.axes.y.scale = y;
        self.relayout();
    }

    /// Reset the autorange and re-run every trace against the current axes.
    pub fn relayout(&mut self) {
        log::debug!("relayout of {} traces", self.traces.len());
        self.axes.reset_autorange();
        for trace in self.traces.values_mut() {
            trace.refresh(&mut self.axes);
        }
    }

    fn rebuild_autorange(&mut self) {
        self.axes.reset_autorange();
        for trace in self.traces.values() {
            self.axes.merge_autorange(trace.autorange_contribution());
        }
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn trace(&self, id: TraceId) -> Option<&Trace<C>> {
        self.traces.get(&id)
    }

    /// Traces in insertion order.
    pub fn traces(&self) -> impl Iterator<Item = &Trace<C>> {
        self.traces.values()
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Remove every trace, releasing their render objects.
    pub fn clear(&mut self) {
        for (_, trace) in self.traces.drain(..) {
            trace.dispose();
        }
        self.handles.clear();
        self.axes.reset_autorange();
    }
}
