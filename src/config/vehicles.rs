use serde::{Deserialize, Serialize};
use anyhow::{Result, anyhow};
use super::{is_non_negative, is_positive, Validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VehiclesConfig {
    #[serde(default)]
    pub vehicle: VehicleParams,
    #[serde(default)]
    pub spawn: SpawnParams,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VehicleParams {
    pub length: f32,
    pub width: f32,
    /// Constant travel speed in pixels per second.
    pub speed: f32,
    /// Minimum bumper-to-bumper distance behind a leader.
    pub gap: f32,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            length: 40.0,
            width: 20.0,
            speed: 100.0,
            gap: 10.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SpawnParams {
    /// Seconds that must pass between two spawns on one approach.
    pub interval: f32,
    /// Upper bound of a uniform random extra delay added per spawn. Zero keeps spawning periodic.
    pub jitter: f32,
    pub seed: Option<u64>,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            interval: 2.0,
            jitter: 0.0,
            seed: None,
        }
    }
}

impl Validate for VehiclesConfig {
    fn validate(&self) -> Result<()> {
        let vehicle = &self.vehicle;
        if !is_positive(vehicle.length) || !is_positive(vehicle.width) {
            return Err(anyhow!("Vehicle dimensions must be positive"));
        }

        if !is_positive(vehicle.speed) {
            return Err(anyhow!("Vehicle speed must be positive"));
        }

        if !is_non_negative(vehicle.gap) {
            return Err(anyhow!("Following gap must be finite and non-negative"));
        }

        let spawn = &self.spawn;
        if !is_non_negative(spawn.interval) {
            return Err(anyhow!("Spawn interval must be finite and non-negative"));
        }

        if !is_non_negative(spawn.jitter) {
            return Err(anyhow!("Spawn jitter must be finite and non-negative"));
        }

        Ok(())
    }
}
