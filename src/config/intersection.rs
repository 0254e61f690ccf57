use serde::{Deserialize, Serialize};
use anyhow::{Result, anyhow};
use super::{is_positive, Validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct IntersectionConfig {
    #[serde(default)]
    pub intersection: IntersectionGeometry,
    #[serde(default)]
    pub signals: SignalTiming,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IntersectionGeometry {
    pub screen_width: f32,
    pub screen_height: f32,
    pub road_width: f32,
    /// Distance from the road centre line to each lane's centre.
    pub lane_offset: f32,
    /// How far past the exit edge a "go" target is placed.
    pub offscreen_distance: f32,
}

impl Default for IntersectionGeometry {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            road_width: 100.0,
            lane_offset: 15.0,
            offscreen_distance: 1000.0,
        }
    }
}

impl IntersectionGeometry {
    pub fn center_x(&self) -> f32 {
        self.screen_width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.screen_height / 2.0
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalTiming {
    pub green_time: f32,
    pub yellow_time: f32,
}

impl Default for SignalTiming {
    fn default() -> Self {
        Self {
            green_time: 10.0,
            yellow_time: 3.0,
        }
    }
}

impl SignalTiming {
    /// Green and yellow for one axis, then the same for the other.
    pub fn cycle_length(&self) -> f32 {
        2.0 * (self.green_time + self.yellow_time)
    }
}

impl Validate for IntersectionConfig {
    fn validate(&self) -> Result<()> {
        let geometry = &self.intersection;

        if !is_positive(geometry.screen_width) || !is_positive(geometry.screen_height) {
            return Err(anyhow!("Screen dimensions must be positive"));
        }

        if !is_positive(geometry.road_width) {
            return Err(anyhow!("Road width must be positive"));
        }

        if geometry.road_width >= geometry.screen_width.min(geometry.screen_height) {
            return Err(anyhow!(
                "Road width {} leaves no approach inside a {}x{} screen",
                geometry.road_width,
                geometry.screen_width,
                geometry.screen_height
            ));
        }

        if !is_positive(geometry.lane_offset) || geometry.lane_offset >= geometry.road_width / 2.0 {
            return Err(anyhow!(
                "Lane offset {} must be in range (0, {})",
                geometry.lane_offset,
                geometry.road_width / 2.0
            ));
        }

        if !is_positive(geometry.offscreen_distance) {
            return Err(anyhow!("Offscreen distance must be positive"));
        }

        let signals = &self.signals;
        if !is_positive(signals.green_time) || !is_positive(signals.yellow_time) {
            return Err(anyhow!("Green and yellow times must be positive"));
        }

        Ok(())
    }
}
