#![forbid(unsafe_code)]

//! Level-map semantic model (headless).
//!
//! A level map is an ordered sequence of rows, each holding one or two
//! selectable nodes. This crate owns the row/node model, the spacing and
//! routing configuration, and the error taxonomy; the layout and connector
//! routing passes live in `switchback-render`.

pub mod config;
pub mod error;
pub mod geom;
pub mod model;

pub use config::{LaneOverride, LayoutConstants, RouteConfig};
pub use error::{Error, Result};
pub use model::{LevelGraph, NodeSpec, RowSpec};
