use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::simulation::{LaneQueues, MotionModel, SignalController, SignalState, SimulationState, TrafficManager};
use anyhow::Result;
use super::SimulationBackend;

/// Single-threaded tick driver. Each tick runs, in order: signal update,
/// spawning, lane ordering, motion, exit pruning.
pub struct CpuBackend {
    signals: SignalController,
    motion: MotionModel,
    traffic: TrafficManager,
}

impl CpuBackend {
    pub fn new(config: &SimulationConfig, seed: Option<u64>) -> Self {
        Self {
            signals: SignalController::new(config.intersection.signals),
            motion: MotionModel::from_config(config),
            traffic: TrafficManager::from_config(config, seed),
        }
    }

    /// Sets the step and runs one tick. A rejected step leaves `state` as it was.
    pub fn step(&mut self, state: &mut SimulationState, dt: f32) -> Result<SignalState> {
        check_time_step(dt)?;
        state.dt = dt;
        self.update(state)?;
        Ok(state.signals)
    }
}

impl SimulationBackend for CpuBackend {
    fn update(&mut self, state: &mut SimulationState) -> Result<()> {
        let dt = state.dt;
        check_time_step(dt)?;

        state.time += dt;
        state.signals = self.signals.signal_state(state.time);

        self.traffic.update_spawning(state);

        // Leaders are assigned from positions before anyone moves this tick.
        let queues = LaneQueues::build(&state.vehicles);
        self.motion.update(state, &queues);

        self.traffic.update_despawning(state);

        Ok(())
    }

    fn get_name(&self) -> &'static str {
        "CPU"
    }
}

fn check_time_step(dt: f32) -> Result<(), SimError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimError::InvalidTimeStep(dt));
    }
    Ok(())
}
