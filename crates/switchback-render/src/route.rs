//! Connector routing.
//!
//! Routing runs in two stages. `plan_connections` is a pure classification
//! pass over row cardinalities: it assigns every adjacency slot (the
//! connection between consecutive flat node indices) to exactly one planned
//! connector, by a fixed rule table. `route_connectors` then turns the plan
//! plus the laid-out centers into drawable primitives. Splitting the stages
//! keeps the rule table in one place and makes the no-gaps/no-duplicates
//! ownership invariant directly testable.

use switchback_core::geom;
use switchback_core::{Error, LevelGraph, Result, RouteConfig};

use crate::model::{LayoutPoint, PathPrimitive, TurnDirection};

/// Side of the center line a zig-zag's vertical lane runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneSide {
    Left,
    Right,
}

impl LaneSide {
    pub fn turn(self) -> TurnDirection {
        match self {
            Self::Right => TurnDirection::Clockwise,
            Self::Left => TurnDirection::CounterClockwise,
        }
    }
}

/// Routing rule that claimed a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Straight segment between a row's two nodes.
    RowPair,
    /// Single node fanning out to the far node of a two-node row below.
    /// The zig-zag subsumes that row's own pair segment.
    FanOut,
    /// First node of a two-node row funneling into a single node below.
    FanIn,
    /// Single node descending to the next single node; lane sides alternate
    /// per occurrence among these transitions only.
    Descent { lane: LaneSide },
    /// Default cubic S-curve for any slot no specialized rule owns.
    Curve,
}

/// One planned connector: endpoints as flat row-major node indices, plus
/// the adjacency slots it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedConnector {
    pub kind: ConnectorKind,
    /// Row the connector starts in; per-transition lane overrides key on this.
    pub row: usize,
    pub from: usize,
    pub to: usize,
    pub slots: Vec<usize>,
}

/// Classification result. Slot `s` is the connection between flat nodes `s`
/// and `s + 1`; every slot is owned by exactly one connector.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPlan {
    pub connectors: Vec<PlannedConnector>,
    /// `slot_owner[s]` indexes into `connectors`.
    pub slot_owner: Vec<usize>,
}

/// Classifies every adjacency slot by the cardinality rule table.
///
/// Rule order per row: the specialized transition connectors are classified
/// first (1-to-2 fan-out, 2-to-1 fan-in, 1-to-1 alternating descent), then each
/// two-node row whose pair slot is still unowned gets a straight segment,
/// and any remaining slot falls through to the generic S-curve.
pub fn plan_connections(graph: &LevelGraph) -> Result<ConnectionPlan> {
    graph.validate()?;

    let offsets = graph.row_offsets();
    let rows = graph.rows.len();
    let flat_len = graph.flat_len();
    let slot_count = flat_len.saturating_sub(1);

    // Specialized transition connectors, keyed by upper row.
    let mut transitions: Vec<Option<PlannedConnector>> = vec![None; rows.saturating_sub(1)];
    let mut descents = 0usize;
    for r in 0..rows.saturating_sub(1) {
        let above = graph.rows[r].len();
        let below = graph.rows[r + 1].len();
        let planned = match (above, below) {
            (1, 2) => Some(PlannedConnector {
                kind: ConnectorKind::FanOut,
                row: r,
                from: offsets[r],
                to: offsets[r + 1] + 1,
                slots: vec![offsets[r], offsets[r + 1]],
            }),
            (2, 1) => Some(PlannedConnector {
                kind: ConnectorKind::FanIn,
                row: r,
                from: offsets[r],
                to: offsets[r + 1],
                slots: vec![offsets[r + 1] - 1],
            }),
            (1, 1) => {
                descents += 1;
                // Odd occurrences route right-down-left, even ones mirror.
                let lane = if descents % 2 == 1 {
                    LaneSide::Right
                } else {
                    LaneSide::Left
                };
                Some(PlannedConnector {
                    kind: ConnectorKind::Descent { lane },
                    row: r,
                    from: offsets[r],
                    to: offsets[r + 1],
                    slots: vec![offsets[r]],
                })
            }
            _ => None,
        };
        tracing::trace!(row = r, above, below, claimed = planned.is_some(), "transition");
        transitions[r] = planned;
    }

    const UNOWNED: usize = usize::MAX;
    const RESERVED: usize = usize::MAX - 1;

    let mut connectors: Vec<PlannedConnector> = Vec::new();
    let mut slot_owner: Vec<usize> = vec![UNOWNED; slot_count];

    fn own(slot_owner: &mut [usize], slots: &[usize], idx: usize) {
        for &s in slots {
            debug_assert_eq!(slot_owner[s], usize::MAX, "slot {s} claimed twice");
            slot_owner[s] = idx;
        }
    }

    // Reserve the slots claimed by specialized connectors so the straight
    // and fallback rules skip them; emission stays in row order below.
    for t in transitions.iter().flatten() {
        for &s in &t.slots {
            slot_owner[s] = RESERVED;
        }
    }

    for r in 0..rows {
        // Pair segment, unless a fan-out from the row above subsumed it.
        if graph.rows[r].len() == 2 {
            let pair_slot = offsets[r];
            if slot_owner[pair_slot] == UNOWNED {
                let idx = connectors.len();
                connectors.push(PlannedConnector {
                    kind: ConnectorKind::RowPair,
                    row: r,
                    from: pair_slot,
                    to: pair_slot + 1,
                    slots: vec![pair_slot],
                });
                own(&mut slot_owner, &[pair_slot], idx);
            }
        }

        // Specialized connector leaving this row.
        if r + 1 < rows {
            if let Some(t) = transitions[r].take() {
                let idx = connectors.len();
                let slots = t.slots.clone();
                connectors.push(t);
                for &s in &slots {
                    slot_owner[s] = idx;
                }
            }
        }

        // Whatever is left in this row's slot range falls through to the
        // generic S-curve, one per adjacent flat pair.
        let row_slots_end = offsets[r + 1].min(slot_count);
        for s in offsets[r]..row_slots_end {
            if slot_owner[s] == UNOWNED {
                let idx = connectors.len();
                connectors.push(PlannedConnector {
                    kind: ConnectorKind::Curve,
                    row: r,
                    from: s,
                    to: s + 1,
                    slots: vec![s],
                });
                own(&mut slot_owner, &[s], idx);
            }
        }
    }

    debug_assert!(
        slot_owner.iter().all(|&o| o < connectors.len()),
        "every slot must be owned after planning"
    );

    Ok(ConnectionPlan {
        connectors,
        slot_owner,
    })
}

/// Builds drawable primitives from a classification plan and laid-out
/// centers.
///
/// Fails fast (never partially routes) when the centers sequence disagrees
/// with the graph, or a lane override names a transition the graph does not
/// have; silent index drift here would render visually wrong connectors
/// without crashing, which is the failure mode this check exists to rule
/// out.
pub fn route_connectors(
    graph: &LevelGraph,
    centers: &[LayoutPoint],
    center_x: f64,
    config: &RouteConfig,
) -> Result<Vec<PathPrimitive>> {
    let plan = plan_connections(graph)?;
    config.check_overrides(graph.rows.len())?;

    let expected = graph.flat_len();
    if centers.len() != expected {
        return Err(Error::CenterCountMismatch {
            expected,
            actual: centers.len(),
        });
    }

    let mut primitives = Vec::with_capacity(plan.connectors.len());
    for c in &plan.connectors {
        let from = centers[c.from];
        let to = centers[c.to];
        let primitive = match c.kind {
            ConnectorKind::RowPair => PathPrimitive::Segment { from, to },
            ConnectorKind::FanOut => zigzag(from, to, center_x, LaneSide::Right, c.row, config),
            ConnectorKind::FanIn => zigzag(from, to, center_x, LaneSide::Left, c.row, config),
            ConnectorKind::Descent { lane } => zigzag(from, to, center_x, lane, c.row, config),
            ConnectorKind::Curve => s_curve(from, to),
        };
        primitives.push(primitive);
    }
    Ok(primitives)
}

fn zigzag(
    from: LayoutPoint,
    to: LayoutPoint,
    center_x: f64,
    lane: LaneSide,
    row: usize,
    config: &RouteConfig,
) -> PathPrimitive {
    let offset = config.lane_offset_for(row);
    let lane_x = match lane {
        LaneSide::Right => center_x + offset,
        LaneSide::Left => center_x - offset,
    };
    PathPrimitive::ZigZag {
        from,
        to,
        lane_x,
        corner_radius: config.corner_radius,
        turn: lane.turn(),
    }
}

fn s_curve(from: LayoutPoint, to: LayoutPoint) -> PathPrimitive {
    let mid_y = geom::midpoint(from.into(), to.into()).y;
    PathPrimitive::Cubic {
        from,
        c1: LayoutPoint {
            x: from.x,
            y: mid_y,
        },
        c2: LayoutPoint { x: to.x, y: mid_y },
        to,
    }
}
