use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spacing constants for one layout pass. All distances are in the same
/// unit as the viewport width (typically logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    /// Node diameter; centers are spaced `node_size + h_gap` apart within a row.
    pub node_size: f64,
    /// Horizontal gap between node edges in a two-node row.
    pub h_gap: f64,
    /// Vertical distance between consecutive row baselines.
    pub v_gap: f64,
    /// Y of the first row's centers.
    pub top_margin: f64,
    /// Extra space below the last row, included in the total content height.
    pub bottom_padding: f64,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            node_size: 60.0,
            h_gap: 30.0,
            v_gap: 120.0,
            top_margin: 100.0,
            bottom_padding: 50.0,
        }
    }
}

impl LayoutConstants {
    /// Rejects non-positive sizes/gaps and negative margins. Run once
    /// before any layout pass; the passes themselves are pure arithmetic.
    pub fn validate(&self) -> Result<()> {
        positive("node_size", self.node_size)?;
        positive("h_gap", self.h_gap)?;
        positive("v_gap", self.v_gap)?;
        non_negative("top_margin", self.top_margin)?;
        non_negative("bottom_padding", self.bottom_padding)?;
        Ok(())
    }
}

/// Lane-offset override for a single row transition, replacing the default
/// [`RouteConfig::lane_offset`] magnitude for the connector that leaves
/// `above_row`. This is how one-off visual tuning (e.g. a narrower lane for
/// a specific pair) is expressed; connectors are never matched by label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneOverride {
    pub above_row: usize,
    pub lane_offset: f64,
}

/// Connector routing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Horizontal magnitude of the vertical lane a zig-zag connector runs
    /// along, measured from the viewport center line.
    pub lane_offset: f64,
    /// Corner radius of a zig-zag connector's two arcs.
    pub corner_radius: f64,
    pub lane_overrides: Vec<LaneOverride>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteConfig {
    pub const DEFAULT_LANE_OFFSET: f64 = 120.0;
    pub const DEFAULT_CORNER_RADIUS: f64 = 50.0;

    pub fn new() -> Self {
        Self {
            lane_offset: Self::DEFAULT_LANE_OFFSET,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            lane_overrides: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("lane_offset", self.lane_offset)?;
        positive("corner_radius", self.corner_radius)?;
        for o in &self.lane_overrides {
            positive("lane_override.lane_offset", o.lane_offset)?;
        }
        Ok(())
    }

    /// Lane-offset magnitude for the transition leaving `above_row`. When
    /// several overrides name the same transition the last one wins.
    pub fn lane_offset_for(&self, above_row: usize) -> f64 {
        self.lane_overrides
            .iter()
            .rev()
            .find(|o| o.above_row == above_row)
            .map(|o| o.lane_offset)
            .unwrap_or(self.lane_offset)
    }

    /// Checks every override against the graph's transition count.
    pub fn check_overrides(&self, row_count: usize) -> Result<()> {
        for o in &self.lane_overrides {
            if row_count < 2 || o.above_row >= row_count - 1 {
                return Err(Error::OverrideOutOfRange {
                    above_row: o.above_row,
                    row_count,
                });
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConstant { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConstant { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants_validate() {
        LayoutConstants::default().validate().expect("defaults");
        RouteConfig::new().validate().expect("defaults");
    }

    #[test]
    fn route_config_deserializes_missing_fields_to_defaults() {
        let cfg: RouteConfig = serde_json::from_str("{}").expect("empty object");
        assert_eq!(cfg, RouteConfig::new());
        assert_eq!(cfg.lane_offset, 120.0);
        assert_eq!(cfg.corner_radius, 50.0);
        assert!(cfg.lane_overrides.is_empty());
    }

    #[test]
    fn non_positive_constants_are_rejected() {
        let mut c = LayoutConstants::default();
        c.v_gap = 0.0;
        let err = c.validate().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidConstant { name: "v_gap", .. }
        ));

        let mut c = LayoutConstants::default();
        c.node_size = f64::NAN;
        assert!(c.validate().is_err());

        let mut r = RouteConfig::new();
        r.corner_radius = -1.0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn last_override_wins() {
        let mut cfg = RouteConfig::new();
        cfg.lane_overrides.push(LaneOverride {
            above_row: 2,
            lane_offset: 80.0,
        });
        cfg.lane_overrides.push(LaneOverride {
            above_row: 2,
            lane_offset: 60.0,
        });
        assert_eq!(cfg.lane_offset_for(2), 60.0);
        assert_eq!(cfg.lane_offset_for(0), 120.0);
    }

    #[test]
    fn overrides_must_name_existing_transitions() {
        let mut cfg = RouteConfig::new();
        cfg.lane_overrides.push(LaneOverride {
            above_row: 3,
            lane_offset: 80.0,
        });
        assert!(cfg.check_overrides(5).is_ok());
        let err = cfg.check_overrides(4).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::OverrideOutOfRange {
                above_row: 3,
                row_count: 4
            }
        ));
    }
}
