#![forbid(unsafe_code)]

//! Headless layout, connector routing, and SVG rendering for level maps.
//!
//! Data flows one way: rows -> centers (layout) -> primitives (routing);
//! rendering consumes both. Every pass is a pure function of the graph and
//! the constants, recomputed wholesale when the viewport width changes.

pub mod layout;
pub mod model;
pub mod route;
pub mod svg;

use switchback_core::{LayoutConstants, LevelGraph, RouteConfig};

use crate::model::{Bounds, DrawCommand, LevelMapLayout, LevelNodeLayout, PathPrimitive};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] switchback_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Runs one full pass: validate, lay out centers, route connectors, and
/// assemble the drawable output.
///
/// Configuration errors (non-positive sizes or gaps) and structural errors
/// (row cardinality outside 1..=2, out-of-range lane overrides) surface
/// here before any geometry is computed.
pub fn layout_level_map(
    graph: &LevelGraph,
    constants: &LayoutConstants,
    route_config: &RouteConfig,
    viewport_width: f64,
) -> Result<LevelMapLayout> {
    constants.validate()?;
    route_config.validate()?;
    graph.validate()?;
    if !(viewport_width.is_finite() && viewport_width > 0.0) {
        return Err(switchback_core::Error::InvalidConstant {
            name: "viewport_width",
            value: viewport_width,
        }
        .into());
    }

    let centers_layout = layout::layout_centers(graph, constants, viewport_width);
    let center_x = layout::center_line_x(viewport_width);
    let connectors = route::route_connectors(graph, &centers_layout.centers, center_x, route_config)?;

    let mut nodes = Vec::with_capacity(centers_layout.centers.len());
    let mut flat = 0usize;
    for (row, r) in graph.rows.iter().enumerate() {
        for (index_in_row, spec) in r.nodes.iter().enumerate() {
            let c = centers_layout.centers[flat];
            nodes.push(LevelNodeLayout {
                x: c.x,
                y: c.y,
                row,
                index_in_row,
                label: spec.label.clone(),
                icon: spec.icon.clone(),
                unlocked: spec.unlocked,
            });
            flat += 1;
        }
    }

    let bounds = layout_bounds(&nodes, &connectors, constants.node_size);

    Ok(LevelMapLayout {
        nodes,
        connectors,
        viewport_width,
        center_x,
        node_size: constants.node_size,
        total_height: centers_layout.total_height,
        bounds,
    })
}

fn layout_bounds(
    nodes: &[LevelNodeLayout],
    connectors: &[PathPrimitive],
    node_size: f64,
) -> Option<Bounds> {
    let half = node_size / 2.0;
    let mut points: Vec<(f64, f64)> = Vec::new();
    for n in nodes {
        points.push((n.x - half, n.y - half));
        points.push((n.x + half, n.y + half));
    }
    for primitive in connectors {
        for cmd in primitive.commands() {
            match cmd {
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => points.push((p.x, p.y)),
                DrawCommand::CubicTo { c1, c2, to } => {
                    points.push((c1.x, c1.y));
                    points.push((c2.x, c2.y));
                    points.push((to.x, to.y));
                }
                DrawCommand::Arc { to, .. } => points.push((to.x, to.y)),
            }
        }
    }
    Bounds::from_points(points)
}
