use super::{ApproachTable, LaneQueues, LightState, SignalState, SimulationState, Vehicle};
use crate::config::{SimulationConfig, VehicleParams};

/// Constant-speed motion toward a target that is recomputed every tick from the
/// signal and the vehicle ahead. Works in signed progress so the four
/// approaches share one code path.
pub struct MotionModel {
    approaches: ApproachTable,
    gap: f32,
}

impl MotionModel {
    pub fn new(approaches: ApproachTable, vehicle: &VehicleParams) -> Self {
        Self {
            approaches,
            gap: vehicle.gap,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            ApproachTable::new(&config.intersection.intersection),
            &config.vehicles.vehicle,
        )
    }

    /// Moves every vehicle one tick. Targets are computed against the
    /// positions at the start of the tick and applied afterwards.
    pub fn update(&self, state: &mut SimulationState, queues: &LaneQueues) {
        let dt = state.dt;
        let signals = state.signals;

        let updates: Vec<(usize, f32)> = queues
            .with_leaders()
            .map(|(index, leader)| {
                let vehicle = &state.vehicles[index];
                let leader = leader.map(|l| &state.vehicles[l]);
                let progress = self.next_progress(vehicle, dt, signal_for(&signals, vehicle), leader);
                (index, progress)
            })
            .collect();

        for (index, progress) in updates {
            state.vehicles[index].set_progress(progress);
        }
    }

    /// Advances a single vehicle in place.
    pub fn update_vehicle(&self, vehicle: &mut Vehicle, dt: f32, light: LightState, leader: Option<&Vehicle>) {
        let progress = self.next_progress(vehicle, dt, light, leader);
        vehicle.set_progress(progress);
    }

    /// The progress a vehicle is allowed to reach this tick.
    pub fn target_progress(&self, vehicle: &Vehicle, light: LightState, leader: Option<&Vehicle>) -> f32 {
        let geometry = self.approaches.get(vehicle.approach);
        let stop_line = geometry.stop_line_progress();

        // Once the front is over the line the vehicle has committed to crossing.
        let signal_target = if light == LightState::Green || vehicle.front_progress() > stop_line {
            geometry.go_progress()
        } else {
            stop_line - vehicle.length / 2.0
        };

        match leader {
            Some(leader) => {
                let leader_target = leader.rear_progress() - self.gap - vehicle.length / 2.0;
                signal_target.min(leader_target)
            }
            None => signal_target,
        }
    }

    fn next_progress(&self, vehicle: &Vehicle, dt: f32, light: LightState, leader: Option<&Vehicle>) -> f32 {
        let dt = dt.max(0.0);
        let target = self.target_progress(vehicle, light, leader);
        let progress = vehicle.progress();

        // A target behind the vehicle holds it in place; it never reverses.
        if progress < target {
            (progress + vehicle.speed * dt).min(target)
        } else {
            progress
        }
    }
}

fn signal_for(signals: &SignalState, vehicle: &Vehicle) -> LightState {
    signals.light_for_approach(vehicle.approach)
}
