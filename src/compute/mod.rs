use crate::simulation::SimulationState;
use anyhow::Result;

pub mod cpu;

pub use cpu::*;

pub trait SimulationBackend {
    /// Runs one tick of `state.dt` seconds.
    fn update(&mut self, state: &mut SimulationState) -> Result<()>;
    fn get_name(&self) -> &'static str;
}
