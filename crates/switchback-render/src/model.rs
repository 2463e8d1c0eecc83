use serde::{Deserialize, Serialize};
use switchback_core::geom;

/// Serializable 2D point. Layout math runs on [`switchback_core::geom`]
/// types; outputs carry plain fields so a pass result can be snapshotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl From<geom::Point> for LayoutPoint {
    fn from(p: geom::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<LayoutPoint> for geom::Point {
    fn from(p: LayoutPoint) -> Self {
        geom::point(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

/// Turn sense of a zig-zag connector's two corner arcs, in y-down screen
/// coordinates. Clockwise pairs with a lane right of the center line,
/// counter-clockwise with a lane to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Clockwise,
    CounterClockwise,
}

/// A drawable connector between two node centers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathPrimitive {
    /// Straight segment between two same-row nodes.
    Segment { from: LayoutPoint, to: LayoutPoint },
    /// Cubic S-bend; both control points sit at the midpoint height with
    /// their endpoint's x, so vertically stacked endpoints get a smooth
    /// S-curve.
    Cubic {
        from: LayoutPoint,
        c1: LayoutPoint,
        c2: LayoutPoint,
        to: LayoutPoint,
    },
    /// Rounded over-and-down jog: horizontal run to a vertical lane, down
    /// the lane, horizontal run to the destination, with arc corners. This
    /// is intentionally a rectangular jog, not a smooth curve.
    ZigZag {
        from: LayoutPoint,
        to: LayoutPoint,
        lane_x: f64,
        corner_radius: f64,
        turn: TurnDirection,
    },
}

/// One drawing-API call. Every [`PathPrimitive`] flattens to a short
/// sequence of these (line, cubic bezier, or line+arc+line+arc+line).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    MoveTo(LayoutPoint),
    LineTo(LayoutPoint),
    CubicTo {
        c1: LayoutPoint,
        c2: LayoutPoint,
        to: LayoutPoint,
    },
    Arc {
        radius: f64,
        clockwise: bool,
        to: LayoutPoint,
    },
}

impl PathPrimitive {
    pub fn from_point(&self) -> LayoutPoint {
        match self {
            Self::Segment { from, .. } | Self::Cubic { from, .. } | Self::ZigZag { from, .. } => {
                *from
            }
        }
    }

    pub fn to_point(&self) -> LayoutPoint {
        match self {
            Self::Segment { to, .. } | Self::Cubic { to, .. } | Self::ZigZag { to, .. } => *to,
        }
    }

    /// Flattens the primitive into drawing commands.
    pub fn commands(&self) -> Vec<DrawCommand> {
        match *self {
            Self::Segment { from, to } => vec![DrawCommand::MoveTo(from), DrawCommand::LineTo(to)],
            Self::Cubic { from, c1, c2, to } => {
                vec![DrawCommand::MoveTo(from), DrawCommand::CubicTo { c1, c2, to }]
            }
            Self::ZigZag {
                from,
                to,
                lane_x,
                corner_radius,
                turn,
            } => {
                // The horizontal runs stop one corner radius short of the
                // lane on the approach side; both arcs share that side.
                let clockwise = turn == TurnDirection::Clockwise;
                let inset_x = if clockwise {
                    lane_x - corner_radius
                } else {
                    lane_x + corner_radius
                };
                vec![
                    DrawCommand::MoveTo(from),
                    DrawCommand::LineTo(LayoutPoint {
                        x: inset_x,
                        y: from.y,
                    }),
                    DrawCommand::Arc {
                        radius: corner_radius,
                        clockwise,
                        to: LayoutPoint {
                            x: lane_x,
                            y: from.y + corner_radius,
                        },
                    },
                    DrawCommand::LineTo(LayoutPoint {
                        x: lane_x,
                        y: to.y - corner_radius,
                    }),
                    DrawCommand::Arc {
                        radius: corner_radius,
                        clockwise,
                        to: LayoutPoint {
                            x: inset_x,
                            y: to.y,
                        },
                    },
                    DrawCommand::LineTo(to),
                ]
            }
        }
    }
}

/// Placement of one node, in the same row-major order as the input graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelNodeLayout {
    /// Center coordinates. Consumers subtract half the node size for the
    /// top-left corner.
    pub x: f64,
    pub y: f64,
    pub row: usize,
    pub index_in_row: usize,
    pub label: String,
    pub icon: String,
    pub unlocked: bool,
}

/// Output of one full layout + routing pass. Recomputed wholesale whenever
/// the viewport width changes; comparing successive values for equality
/// lets a consumer skip redraws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelMapLayout {
    pub nodes: Vec<LevelNodeLayout>,
    pub connectors: Vec<PathPrimitive>,
    pub viewport_width: f64,
    pub center_x: f64,
    pub node_size: f64,
    pub total_height: f64,
    pub bounds: Option<Bounds>,
}
