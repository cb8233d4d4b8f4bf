use glam::DVec2;
use rand_distr::{Distribution, Normal};
use scatter_gl::{
    ActiveMarkerRenderer, Axes, AxisScale, BubbleSizing, Color, Colorscale, ConversionPath,
    ErrorBarOptions, ErrorKind, FillMode, HeadlessContext, LineOptions, MarkerOptions, Mode, Paint,
    Trace, TraceOptions,
};

fn build(options: TraceOptions, axes: &mut Axes) -> Trace<HeadlessContext> {
    let mut ctx = HeadlessContext::new();
    Trace::new(&mut ctx, options, axes)
}

#[test]
fn nan_pairs_are_compacted_out() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_x(vec![1.0, 2.0, f64::NAN, 4.0])
            .with_y(vec![1.0, f64::NAN, 3.0, 4.0])
            .with_mode(Mode::LINES),
        &mut axes,
    );

    assert_eq!(trace.path(), ConversionPath::Fast);
    assert_eq!(trace.id_to_index(), &[0, 3]);
    let line = trace.line().primitive().state().unwrap();
    assert_eq!(&*line.positions, &[1.0, 1.0, 4.0, 4.0]);
    assert_eq!(trace.bounds().to_array(), [1.0, 1.0, 4.0, 4.0]);
    assert_eq!(trace.active_marker(), ActiveMarkerRenderer::None);
}

#[test]
fn short_size_array_reuses_its_first_entry() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])
            .with_mode(Mode::MARKERS)
            .with_marker(MarkerOptions::default().with_size(vec![5.0, 10.0])),
        &mut axes,
    );

    assert_eq!(trace.path(), ConversionPath::Fancy);
    let markers = trace.fancy_scatter().primitive().state().unwrap();
    // Rendered sizes are four times the resolved [5, 10, 5].
    assert_eq!(markers.sizes, vec![20.0, 40.0, 20.0]);
}

#[test]
fn tozeroy_sets_the_second_fill_flag() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 1.0], [1.0, 2.0]])
            .with_mode(Mode::LINES)
            .with_fill(FillMode::ToZeroY, None),
        &mut axes,
    );
    let line = trace.line().primitive().state().unwrap();
    assert_eq!(line.fill, [false, true, false, false]);
}

#[test]
fn error_thickness_is_halved() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 1.0], [1.0, 2.0]])
            .with_error_x(ErrorBarOptions::new(ErrorKind::Constant(0.1)).with_thickness(4.0)),
        &mut axes,
    );
    let error_x = trace.error_x().primitive().state().unwrap();
    assert_eq!(error_x.line_width, 2.0);
    assert_eq!(error_x.cap_size, 4.0);
    assert!(trace.error_y().primitive().state().unwrap().positions.is_empty());
}

#[test]
fn random_gaps_keep_buffers_consistent() {
    let mut rng = rand::rng();
    let normal = Normal::new(0.0f64, 1.0f64).unwrap();

    for round in 0..20 {
        let n = 50 + round * 7;
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        for _ in 0..n {
            let a = normal.sample(&mut rng);
            let b = normal.sample(&mut rng);
            // Roughly a sixth of each coordinate goes missing.
            x.push(if a > 1.0 { f64::NAN } else { a * 10.0 });
            y.push(if b < -1.0 { f64::NAN } else { b * 10.0 });
        }
        let finite = x
            .iter()
            .zip(&y)
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .count();

        let errors = round % 2 == 1;
        let mut options = TraceOptions::new()
            .with_x(x.clone())
            .with_y(y.clone())
            .with_mode(Mode::LINES_MARKERS);
        if errors {
            options = options.with_error_y(ErrorBarOptions::new(ErrorKind::Percent(20.0)));
        }

        let mut axes = Axes::linear();
        let trace = build(options, &mut axes);
        let ids = trace.id_to_index();

        assert_eq!(ids.len(), finite);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.iter().all(|&i| i < n && x[i].is_finite() && y[i].is_finite()));

        let buffers = trace.buffers();
        assert_eq!(buffers.line.positions.len(), 2 * ids.len());

        let bounds = trace.bounds();
        for &i in ids {
            assert!(bounds.contains(DVec2::new(x[i], y[i])));
            if errors {
                let e = (y[i] * 0.2).abs();
                assert!(bounds.min.y <= y[i] - e + 1e-9);
                assert!(bounds.max.y >= y[i] + e - 1e-9);
            }
        }

        if errors {
            assert_eq!(trace.path(), ConversionPath::Fancy);
            assert_eq!(buffers.fancy_scatter.colors.len(), 4 * ids.len());
            assert_eq!(buffers.fancy_scatter.border_colors.len(), 4 * ids.len());
            assert_eq!(buffers.error_y.errors.len(), 4 * ids.len());
        } else {
            assert_eq!(trace.path(), ConversionPath::Fast);
        }
    }
}

#[test]
fn log_axes_transform_and_filter() {
    let mut axes = Axes::new(AxisScale::Log, AxisScale::Log);
    let trace = build(
        TraceOptions::new()
            .with_x(vec![1.0, 10.0, 0.0, 1000.0])
            .with_y(vec![100.0, -5.0, 10.0, 10.0])
            .with_mode(Mode::LINES),
        &mut axes,
    );
    assert_eq!(trace.path(), ConversionPath::Fancy);
    assert_eq!(trace.id_to_index(), &[0, 3]);
    let positions = &trace.buffers().line.positions;
    let expected = [0.0, 2.0, 3.0, 1.0];
    for (got, want) in positions.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6);
    }
}

#[test]
fn log_error_bars_are_measured_in_decades() {
    let mut axes = Axes::new(AxisScale::Linear, AxisScale::Log);
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 10.0]])
            .with_mode(Mode::LINES)
            .with_error_y(ErrorBarOptions::new(ErrorKind::Constant(90.0))),
        &mut axes,
    );
    let errors = &trace.buffers().error_y.errors;
    // 10 - 90 is not representable on a log axis, so the low delta is 0.
    assert_eq!(errors[2], 0.0);
    assert!((errors[3] - 1.0).abs() < 1e-6);
    assert!((trace.bounds().max.y - 2.0).abs() < 1e-9);
}

#[test]
fn marker_colors_compose_both_opacities() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 0.0], [1.0, 1.0]])
            .with_mode(Mode::MARKERS)
            .with_opacity(0.5)
            .with_marker(
                MarkerOptions::default()
                    .with_color(vec![
                        Color::from_rgb(1.0, 0.0, 0.0),
                        Color::from_rgb(0.0, 0.0, 1.0),
                    ])
                    .with_opacity(vec![1.0, 0.5]),
            ),
        &mut axes,
    );
    let markers = &trace.buffers().fancy_scatter;
    assert_eq!(markers.colors, vec![1.0, 0.0, 0.0, 0.5, 0.0, 0.0, 1.0, 0.25]);
}

#[test]
fn colorscale_markers_follow_the_data_range() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])
            .with_mode(Mode::MARKERS)
            .with_marker(MarkerOptions::default().with_color(Paint::mapped(
                vec![10.0, f64::NAN, 20.0],
                Colorscale::bluered(),
            ))),
        &mut axes,
    );
    let colors = &trace.buffers().fancy_scatter.colors;
    assert_eq!(&colors[0..4], &[0.0, 0.0, 1.0, 1.0]);
    assert_eq!(&colors[8..12], &[1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn bubble_sizes_pad_the_autorange() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 0.0], [5.0, 1.0]])
            .with_mode(Mode::MARKERS)
            .with_marker(
                MarkerOptions::default()
                    .with_size(vec![40.0, 160.0])
                    .with_sizing(BubbleSizing::area(1.0)),
            ),
        &mut axes,
    );
    // sqrt(40 / 2) and sqrt(160 / 2), times four for the renderer.
    let sizes = &trace.buffers().fancy_scatter.sizes;
    assert!((sizes[0] - 4.0 * 20f32.sqrt()).abs() < 1e-4);
    assert!((sizes[1] - 4.0 * 80f32.sqrt()).abs() < 1e-4);
    assert!(axes.x.autorange.encloses(5.0, 80f64.sqrt()));
    assert!(axes.y.autorange.encloses(0.0, 20f64.sqrt()));
    assert!(axes.x.autorange.is_padded());
}

#[test]
fn line_alpha_drops_with_marker_opacity() {
    let mut axes = Axes::linear();
    let trace = build(
        TraceOptions::new()
            .with_points(&[[0.0, 0.0], [1.0, 1.0]])
            .with_line(LineOptions::default().with_color(Color::from_rgb(0.0, 1.0, 0.0)))
            .with_marker(MarkerOptions::default().with_opacity(0.25)),
        &mut axes,
    );
    assert_eq!(trace.path(), ConversionPath::Fast);
    let line = &trace.buffers().line;
    assert_eq!(line.color, [0.0, 1.0, 0.0, 0.25]);
    assert_eq!(line.fill_color[0], [0.0, 1.0, 0.0, 0.5]);
    assert_eq!(trace.buffers().scatter.color[3], 0.25);
}
