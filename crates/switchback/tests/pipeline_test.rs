use switchback::render::{PathPrimitive, SvgStyle, layout_level_map, render_svg};
use switchback::{LayoutConstants, LevelGraph, NodeSpec, RouteConfig, RowSpec};

#[test]
fn facade_exposes_the_whole_pipeline() {
    let graph = LevelGraph::new(vec![
        RowSpec::single(NodeSpec::new("Basics", "flag", true)),
        RowSpec::single(NodeSpec::new("Forest", "tree", true)),
        RowSpec::pair(
            NodeSpec::new("River", "boat", false),
            NodeSpec::new("Bridge", "hammer", false),
        ),
    ]);

    let layout = layout_level_map(
        &graph,
        &LayoutConstants::default(),
        &RouteConfig::new(),
        480.0,
    )
    .expect("layout ok");

    assert_eq!(layout.nodes.len(), 4);
    // Descent Basics -> Forest, then the fan-out into the pair.
    assert_eq!(layout.connectors.len(), 2);
    assert!(
        layout
            .connectors
            .iter()
            .all(|c| matches!(c, PathPrimitive::ZigZag { .. }))
    );

    let svg = render_svg(&layout, &SvgStyle::default());
    assert!(svg.contains("Bridge"));
    assert_eq!(svg.matches("<circle").count(), 4);
}
