#![forbid(unsafe_code)]

//! `switchback` renders a vertically scrolling level map: rows of one or
//! two selectable nodes, joined by straight segments, cubic S-curves, and
//! rounded zig-zag connectors chosen by a cardinality-driven rule table.
//!
//! The crate is headless: it computes node placements and drawable path
//! primitives from a [`LevelGraph`] plus spacing constants, and leaves
//! actual painting (or the bundled SVG emission, behind the `render`
//! feature) to the host.
//!
//! # Features
//!
//! - `render`: enable layout, connector routing, and SVG output
//!   (`switchback::render`)

pub use switchback_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use switchback_render::model::{
        Bounds, DrawCommand, LayoutPoint, LevelMapLayout, LevelNodeLayout, PathPrimitive,
        TurnDirection,
    };
    pub use switchback_render::svg::{SvgStyle, path_data, render_svg};
    pub use switchback_render::{
        Error, Result, layout_level_map,
        layout::{CentersLayout, center_line_x, layout_centers},
        route::{ConnectionPlan, ConnectorKind, LaneSide, PlannedConnector, plan_connections,
            route_connectors},
    };
}
