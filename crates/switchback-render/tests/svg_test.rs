use switchback_core::{LayoutConstants, LevelGraph, NodeSpec, RouteConfig, RowSpec};
use switchback_render::layout_level_map;
use switchback_render::model::{LayoutPoint, PathPrimitive, TurnDirection};
use switchback_render::svg::{SvgStyle, path_data, render_svg};

fn p(x: f64, y: f64) -> LayoutPoint {
    LayoutPoint { x, y }
}

#[test]
fn segment_path_data_is_a_move_and_a_line() {
    let d = path_data(&PathPrimitive::Segment {
        from: p(185.0, 100.0),
        to: p(275.0, 100.0),
    });
    assert_eq!(d, "M185,100L275,100");
}

#[test]
fn cubic_path_data_uses_one_curve_command() {
    let d = path_data(&PathPrimitive::Cubic {
        from: p(275.0, 100.0),
        c1: p(275.0, 160.0),
        c2: p(185.0, 160.0),
        to: p(185.0, 220.0),
    });
    assert_eq!(d, "M275,100C275,160,185,160,185,220");
}

#[test]
fn zigzag_path_data_runs_line_arc_line_arc_line() {
    let d = path_data(&PathPrimitive::ZigZag {
        from: p(230.0, 100.0),
        to: p(275.0, 220.0),
        lane_x: 350.0,
        corner_radius: 50.0,
        turn: TurnDirection::Clockwise,
    });
    assert_eq!(
        d,
        "M230,100L300,100A50,50,0,0,1,350,150L350,170A50,50,0,0,1,300,220L275,220"
    );
}

#[test]
fn counter_clockwise_zigzag_flips_the_sweep_and_the_approach_side() {
    let d = path_data(&PathPrimitive::ZigZag {
        from: p(185.0, 100.0),
        to: p(230.0, 220.0),
        lane_x: 110.0,
        corner_radius: 50.0,
        turn: TurnDirection::CounterClockwise,
    });
    assert_eq!(
        d,
        "M185,100L160,100A50,50,0,0,0,110,150L110,170A50,50,0,0,0,160,220L230,220"
    );
}

#[test]
fn rendered_document_carries_nodes_connectors_and_style() {
    let graph = LevelGraph::new(vec![
        RowSpec::single(NodeSpec::new("Intro", "flag", true)),
        RowSpec::pair(
            NodeSpec::new("Caves & Crags", "pick", false),
            NodeSpec::new("Cliffs", "rope", false),
        ),
    ]);
    let layout = layout_level_map(
        &graph,
        &LayoutConstants::default(),
        &RouteConfig::new(),
        460.0,
    )
    .expect("layout ok");

    let style = SvgStyle::default();
    let svg = render_svg(&layout, &style);

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"width="460" height="330""#));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<path").count(), 1, "the fan-out is one path");
    assert!(svg.contains("Caves &amp; Crags"), "labels are escaped");
    assert!(svg.contains(&format!(r#"fill="{}""#, style.node_fill_unlocked)));
    assert!(svg.contains(&format!(r#"fill="{}""#, style.node_fill_locked)));
    assert!(svg.contains(r#"class="level locked""#));
    assert!(svg.contains(r#"data-icon="pick""#));
    assert!(svg.contains(&format!(r#"stroke="{}""#, style.path_stroke)));
}

#[test]
fn background_rect_is_opt_in() {
    let graph = LevelGraph::new(vec![RowSpec::single(NodeSpec::new("Intro", "flag", true))]);
    let layout = layout_level_map(
        &graph,
        &LayoutConstants::default(),
        &RouteConfig::new(),
        300.0,
    )
    .expect("layout ok");

    let plain = render_svg(&layout, &SvgStyle::default());
    assert!(!plain.contains("<rect"));

    let mut style = SvgStyle::default();
    style.background = Some("#fafafa".to_string());
    let painted = render_svg(&layout, &style);
    assert!(painted.contains(r##"<rect x="0" y="0" width="300" height="210" fill="#fafafa"/>"##));
}
