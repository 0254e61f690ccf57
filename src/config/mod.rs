use anyhow::Result;

pub mod intersection;
pub mod vehicles;

pub use intersection::*;
pub use vehicles::*;

#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    pub intersection: IntersectionConfig,
    pub vehicles: VehiclesConfig,
}

impl SimulationConfig {
    pub fn load_from_files(intersection_path: &str, vehicles_path: &str) -> Result<Self> {
        let intersection_content = std::fs::read_to_string(intersection_path)?;
        let vehicles_content = std::fs::read_to_string(vehicles_path)?;

        Self::from_toml_strs(&intersection_content, &vehicles_content)
    }

    pub fn from_toml_strs(intersection_content: &str, vehicles_content: &str) -> Result<Self> {
        let intersection: IntersectionConfig = toml::from_str(intersection_content)?;
        let vehicles: VehiclesConfig = toml::from_str(vehicles_content)?;

        let config = SimulationConfig { intersection, vehicles };
        config.validate()?;

        Ok(config)
    }

    /// Checks both halves, then the cross-file constraints.
    pub fn validate(&self) -> Result<()> {
        self.intersection.validate()?;
        self.vehicles.validate()?;

        // A spawn interval shorter than the time needed to clear the spawn zone
        // only throttles spawning; it is the caller's call, not an error.
        let vehicle = &self.vehicles.vehicle;
        let clear_time = (vehicle.length + vehicle.gap) / vehicle.speed;
        if self.vehicles.spawn.interval < clear_time {
            log::warn!(
                "Spawn interval {:.2}s is shorter than the {:.2}s a vehicle needs to clear the spawn zone; spawns will be gated",
                self.vehicles.spawn.interval,
                clear_time
            );
        }

        let geometry = &self.intersection.intersection;
        if vehicle.width / 2.0 > geometry.road_width / 2.0 - geometry.lane_offset {
            return Err(anyhow::anyhow!(
                "Vehicle width {} does not fit in a lane offset {} from the centre of a {} wide road",
                vehicle.width,
                geometry.lane_offset,
                geometry.road_width
            ));
        }

        Ok(())
    }
}

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// NaN and infinities fail both checks; TOML accepts `nan` and `inf`.
pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
