use super::{Approach, ApproachTable, SimulationState, Vehicle};
use crate::config::{SimulationConfig, SpawnParams, VehicleParams};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// Spawns vehicles at the four approaches and removes the ones that have
/// driven off screen.
pub struct TrafficManager {
    approaches: ApproachTable,
    vehicle: VehicleParams,
    spawn: SpawnParams,
    /// Interval each approach must wait before its next spawn.
    next_intervals: [f32; 4],
    rng: StdRng,
}

impl TrafficManager {
    pub fn new(approaches: ApproachTable, vehicle: VehicleParams, spawn: SpawnParams, seed: Option<u64>) -> Self {
        let mut rng = if let Some(seed) = seed.or(spawn.seed) {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        let mut next_intervals = [spawn.interval; 4];
        for interval in &mut next_intervals {
            *interval = Self::draw_interval(&spawn, &mut rng);
        }

        Self {
            approaches,
            vehicle,
            spawn,
            next_intervals,
            rng,
        }
    }

    pub fn from_config(config: &SimulationConfig, seed: Option<u64>) -> Self {
        Self::new(
            ApproachTable::new(&config.intersection.intersection),
            config.vehicles.vehicle.clone(),
            config.vehicles.spawn.clone(),
            seed,
        )
    }

    pub fn update_spawning(&mut self, state: &mut SimulationState) {
        for approach in Approach::ALL {
            let i = approach.index();
            if state.time - state.last_spawn_time[i] <= self.next_intervals[i] {
                continue;
            }

            if !self.is_spawn_zone_clear(approach, state) {
                log::trace!("Spawn on {} approach blocked at t={:.2}s", approach, state.time);
                continue;
            }

            self.spawn_vehicle(approach, state);
            state.last_spawn_time[i] = state.time;
            self.next_intervals[i] = Self::draw_interval(&self.spawn, &mut self.rng);
        }
    }

    /// True when no vehicle of `approach` is within one vehicle length plus
    /// the gap of the spawn point.
    pub fn is_spawn_zone_clear(&self, approach: Approach, state: &SimulationState) -> bool {
        let geometry = self.approaches.get(approach);
        let zone_end = geometry.spawn_progress() + self.vehicle.length + self.vehicle.gap;

        state.vehicles_on(approach).all(|v| v.progress() >= zone_end)
    }

    pub fn spawn_vehicle(&mut self, approach: Approach, state: &mut SimulationState) {
        let id = state.allocate_id();
        let vehicle = Vehicle::new(id, self.approaches.get(approach), &self.vehicle, state.time);

        log::debug!("Spawned vehicle {} on {} approach at t={:.2}s", id.0, approach, state.time);
        state.add_vehicle(vehicle);
    }

    pub fn update_despawning(&self, state: &mut SimulationState) {
        let now = state.time;
        let before = state.vehicles.len();

        state.vehicles.retain(|vehicle| {
            if !self.has_exited(vehicle) {
                return true;
            }
            log::debug!(
                "Vehicle {} left via {} approach exit after {:.2}s",
                vehicle.id.0,
                vehicle.approach,
                now - vehicle.spawn_time
            );
            false
        });

        state.total_exited += (before - state.vehicles.len()) as u32;
    }

    /// True once the rear has cleared the exit edge by half a length.
    pub fn has_exited(&self, vehicle: &Vehicle) -> bool {
        let exit = self.approaches.get(vehicle.approach).exit_progress();
        vehicle.progress() > exit + vehicle.length / 2.0
    }

    fn draw_interval(spawn: &SpawnParams, rng: &mut StdRng) -> f32 {
        if spawn.jitter > 0.0 {
            spawn.interval + rng.gen_range(0.0..spawn.jitter)
        } else {
            spawn.interval
        }
    }
}
