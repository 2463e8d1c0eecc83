use switchback_core::geom::{self, Point};
use switchback_core::{LayoutConstants, LevelGraph};

use crate::model::LayoutPoint;

/// Node centers in row-major order plus the total content height.
#[derive(Debug, Clone, PartialEq)]
pub struct CentersLayout {
    pub centers: Vec<LayoutPoint>,
    pub total_height: f64,
}

/// Horizontal center line the rows are balanced around.
pub fn center_line_x(viewport_width: f64) -> f64 {
    viewport_width / 2.0
}

/// Computes one center per node, appended in row-major order -- the ordering
/// contract the connector router depends on.
///
/// Pure arithmetic: rows are centered around the viewport's center line, row
/// `r` sits at `top_margin + r * v_gap`, and same-row centers step by
/// `node_size + h_gap`. Rows of length 0 contribute no centers but still
/// occupy a row slot, so offsets computed from row lengths stay aligned.
pub fn layout_centers(
    graph: &LevelGraph,
    constants: &LayoutConstants,
    viewport_width: f64,
) -> CentersLayout {
    let center_x = center_line_x(viewport_width);
    let step = constants.node_size + constants.h_gap;

    tracing::debug!(
        rows = graph.rows.len(),
        nodes = graph.flat_len(),
        viewport_width,
        "layout pass"
    );

    let mut centers: Vec<LayoutPoint> = Vec::with_capacity(graph.flat_len());
    for (r, row) in graph.rows.iter().enumerate() {
        let len = row.len() as f64;
        let row_width = len * constants.node_size + (len - 1.0).max(0.0) * constants.h_gap;
        let start_x = center_x - row_width / 2.0 + constants.node_size / 2.0;
        let row_y = constants.top_margin + r as f64 * constants.v_gap;
        for i in 0..row.len() {
            let p: Point = geom::point(start_x + i as f64 * step, row_y);
            centers.push(p.into());
        }
    }

    let total_height = if graph.rows.is_empty() {
        constants.top_margin + constants.bottom_padding
    } else {
        constants.top_margin
            + (graph.rows.len() - 1) as f64 * constants.v_gap
            + constants.node_size
            + constants.bottom_padding
    };

    CentersLayout {
        centers,
        total_height,
    }
}
