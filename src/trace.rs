//! One chart series and the five render objects that draw it.
use glam::DVec2;

use crate::{
    Color,
    axis::Axes,
    bounds::Bounds,
    buffers::{ErrorBuffer, FancyScatterBuffer, LineBuffer, ScatterBuffer},
    convert::{Converted, convert},
    options::{HoverInfo, TraceId, TraceOptions},
    path::{ConversionPath, TraceFlags},
    pick::{PickHit, PickInfo},
    render::{ActiveMarkerRenderer, RenderContext, RenderHandle, RenderObject},
    style::StyleValue,
};

/// A 2D point/line/error series bound to a rendering context.
///
/// Every update recomputes all buffers from scratch and pushes them to the
/// render objects in drawing order: line, x errors, y errors, then markers.
pub struct Trace<C: RenderContext> {
    options: TraceOptions,
    color: StyleValue<Color>,
    flags: TraceFlags,
    converted: Converted,
    /// What this trace last contributed to the axes' autorange.
    contribution: Axes,

    line: RenderObject<C::Line>,
    error_x: RenderObject<C::Error>,
    error_y: RenderObject<C::Error>,
    scatter: RenderObject<C::Scatter>,
    fancy_scatter: RenderObject<C::FancyScatter>,
}

fn display_color(options: &TraceOptions, flags: &TraceFlags) -> StyleValue<Color> {
    if flags.has_markers {
        options.marker.color.resolve()
    } else {
        StyleValue::Scalar(options.line.color)
    }
}

impl<C: RenderContext> Trace<C> {
    /// Allocate the render objects against `ctx` and run the first update.
    pub fn new(ctx: &mut C, options: TraceOptions, axes: &mut Axes) -> Self {
        let flags = TraceFlags::from_options(&options);
        let mut contribution = axes.detached();
        let converted = convert(&options, &mut contribution, &flags);
        axes.merge_autorange(&contribution);
        let mut trace = Self {
            color: display_color(&options, &flags),
            options,
            flags,
            converted,
            contribution,
            line: RenderObject::new(ctx.create_line()),
            error_x: RenderObject::new(ctx.create_error()),
            error_y: RenderObject::new(ctx.create_error()),
            scatter: RenderObject::new(ctx.create_scatter()),
            fancy_scatter: RenderObject::new(ctx.create_fancy_scatter()),
        };
        trace.push();
        trace
    }

    /// Replace the trace's options and rebuild every buffer.
    ///
    /// The trace keeps its id; an id carried by `options` is ignored.
    pub fn update(&mut self, mut options: TraceOptions, axes: &mut Axes) {
        options.id = self.options.id;
        self.flags = TraceFlags::from_options(&options);
        self.color = display_color(&options, &self.flags);
        let mut contribution = axes.detached();
        self.converted = convert(&options, &mut contribution, &self.flags);
        axes.merge_autorange(&contribution);
        self.contribution = contribution;
        self.options = options;
        self.push();
    }

    fn push(&mut self) {
        self.line.update(&self.converted.line);
        self.error_x.update(&self.converted.error_x);
        self.error_y.update(&self.converted.error_y);
        self.scatter.update(&self.converted.scatter);
        self.fancy_scatter.update(&self.converted.fancy_scatter);
    }

    /// Autorange entries from the last update, against the axes' scales at the time.
    pub fn autorange_contribution(&self) -> &Axes {
        &self.contribution
    }

    /// Re-run the conversion with the current options, e.g. after an axis change.
    pub fn refresh(&mut self, axes: &mut Axes) {
        let options = self.options.clone();
        self.update(options, axes);
    }

    /// Map a primitive hit back to the original data point.
    ///
    /// Returns `None` when the hit's point id is not a kept point.
    pub fn handle_pick(&self, hit: PickHit) -> Option<PickInfo> {
        let index = *self.converted.id_to_index.get(hit.point_id)?;
        Some(PickInfo {
            trace: self.options.id,
            point_index: index,
            data_coord: hit.data_coord,
            trace_coord: self.trace_coord(index),
            text: self.options.text.get(index).cloned(),
            color: self.color.get(index).copied(),
            name: self.options.name.clone(),
            hover_info: self.options.hover_info,
        })
    }

    fn trace_coord(&self, index: usize) -> DVec2 {
        let o = &self.options;
        let coord = |values: &Option<Vec<f64>>, start: f64, step: f64| match values {
            Some(values) => values.get(index).copied().unwrap_or(f64::NAN),
            None => start + step * index as f64,
        };
        DVec2::new(coord(&o.x, o.x0, o.dx), coord(&o.y, o.y0, o.dy))
    }

    /// Release all five render objects.
    pub fn dispose(self) {
        log::debug!("{}: disposing", self.options.id);
        self.line.dispose::<LineBuffer>();
        self.error_x.dispose::<ErrorBuffer>();
        self.error_y.dispose::<ErrorBuffer>();
        self.scatter.dispose::<ScatterBuffer>();
        self.fancy_scatter.dispose::<FancyScatterBuffer>();
    }

    pub fn id(&self) -> TraceId {
        self.options.id
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    pub fn flags(&self) -> TraceFlags {
        self.flags
    }

    pub fn path(&self) -> ConversionPath {
        self.converted.path
    }

    /// Original index of each point in the compacted buffers.
    pub fn id_to_index(&self) -> &[usize] {
        &self.converted.id_to_index
    }

    /// Data-space bounds of the kept points, including error extents.
    pub fn bounds(&self) -> Bounds {
        self.converted.bounds
    }

    /// Display color: the marker colors when markers are drawn, else the line color.
    pub fn color(&self) -> &StyleValue<Color> {
        &self.color
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn hover_info(&self) -> HoverInfo {
        self.options.hover_info
    }

    pub fn active_marker(&self) -> ActiveMarkerRenderer {
        self.converted.active_marker
    }

    /// The buffer states pushed on the last update.
    pub fn buffers(&self) -> &Converted {
        &self.converted
    }

    pub fn line(&self) -> &RenderObject<C::Line> {
        &self.line
    }

    pub fn error_x(&self) -> &RenderObject<C::Error> {
        &self.error_x
    }

    pub fn error_y(&self) -> &RenderObject<C::Error> {
        &self.error_y
    }

    pub fn scatter(&self) -> &RenderObject<C::Scatter> {
        &self.scatter
    }

    pub fn fancy_scatter(&self) -> &RenderObject<C::FancyScatter> {
        &self.fancy_scatter
    }

    /// Handles of the five render objects, in drawing order.
    pub fn handles(&self) -> [RenderHandle; 5] {
        [
            self.line.handle(),
            self.error_x.handle(),
            self.error_y.handle(),
            self.scatter.handle(),
            self.fancy_scatter.handle(),
        ]
    }
}
