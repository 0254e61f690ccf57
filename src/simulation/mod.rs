use nalgebra::Point2;
use std::time::{Duration, Instant};

pub mod approach;
pub mod signal;
pub mod ordering;
pub mod physics;
pub mod traffic;
pub mod snapshot;

pub use approach::*;
pub use signal::*;
pub use ordering::*;
pub use physics::*;
pub use traffic::*;
pub use snapshot::*;

pub type Point = Point2<f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct VehicleId(pub usize);

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub approach: Approach,
    /// Centre coordinate along the approach's travel axis.
    pub position: f32,
    /// Centre coordinate on the cross axis, fixed by the approach's lane.
    pub lane_offset: f32,
    pub speed: f32,
    pub length: f32,
    pub width: f32,
    pub color: ColorTag,
    pub spawn_time: f32,
}

impl Vehicle {
    pub fn new(id: VehicleId, geometry: &ApproachGeometry, params: &crate::config::VehicleParams, spawn_time: f32) -> Self {
        Self {
            id,
            approach: geometry.approach,
            position: geometry.spawn,
            lane_offset: geometry.cross_offset,
            speed: params.speed,
            length: params.length,
            width: params.width,
            color: geometry.approach.color(),
            spawn_time,
        }
    }

    /// Signed distance travelled along the approach; grows as the vehicle moves.
    pub fn progress(&self) -> f32 {
        self.approach.sign() * self.position
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.position = self.approach.sign() * progress;
    }

    pub fn front_progress(&self) -> f32 {
        self.progress() + self.length / 2.0
    }

    pub fn rear_progress(&self) -> f32 {
        self.progress() - self.length / 2.0
    }

    pub fn center(&self) -> Point {
        match self.approach.axis() {
            Axis::Vertical => Point::new(self.lane_offset, self.position),
            Axis::Horizontal => Point::new(self.position, self.lane_offset),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    pub vehicles: Vec<Vehicle>,
    /// Elapsed simulation time in seconds.
    pub time: f32,
    /// Step the next tick advances by.
    pub dt: f32,
    /// Lights computed on the most recent tick.
    pub signals: SignalState,
    /// Per approach, indexed by [`Approach::index`].
    pub last_spawn_time: [f32; 4],
    pub next_vehicle_id: usize,
    pub total_spawned: u32,
    pub total_exited: u32,
}

impl SimulationState {
    pub fn new(dt: f32) -> Self {
        Self {
            vehicles: Vec::new(),
            time: 0.0,
            dt,
            signals: Phase::NorthSouthGreen.signal_state(),
            last_spawn_time: [0.0; 4],
            next_vehicle_id: 0,
            total_spawned: 0,
            total_exited: 0,
        }
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.next_vehicle_id = self.next_vehicle_id.max(vehicle.id.0 + 1);
        self.vehicles.push(vehicle);
        self.total_spawned += 1;
    }

    pub fn allocate_id(&mut self) -> VehicleId {
        let id = VehicleId(self.next_vehicle_id);
        self.next_vehicle_id += 1;
        id
    }

    pub fn active_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    pub fn vehicles_on(&self, approach: Approach) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(move |v| v.approach == approach)
    }

    pub fn last_spawn(&self, approach: Approach) -> f32 {
        self.last_spawn_time[approach.index()]
    }

    pub fn approach_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for vehicle in &self.vehicles {
            counts[vehicle.approach.index()] += 1;
        }
        counts
    }
}

#[derive(Debug, Clone)]
pub struct PerformanceMetrics {
    pub frame_time: Duration,
    pub simulation_time: Duration,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            frame_time: Duration::ZERO,
            simulation_time: Duration::ZERO,
        }
    }
}

#[derive(Debug)]
pub struct PerformanceTracker {
    samples: Vec<PerformanceMetrics>,
    max_samples: usize,
    current_frame_start: Option<Instant>,
    current_sim_start: Option<Instant>,
    last_sim_time: Duration,
}

impl PerformanceTracker {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: Vec::with_capacity(max_samples),
            max_samples: max_samples.max(1),
            current_frame_start: None,
            current_sim_start: None,
            last_sim_time: Duration::ZERO,
        }
    }

    pub fn start_frame(&mut self) {
        self.current_frame_start = Some(Instant::now());
    }

    pub fn start_simulation(&mut self) {
        self.current_sim_start = Some(Instant::now());
    }

    pub fn end_simulation(&mut self) {
        if let Some(start) = self.current_sim_start.take() {
            self.last_sim_time = start.elapsed();
        }
    }

    pub fn end_frame(&mut self) {
        if let Some(start) = self.current_frame_start.take() {
            let metrics = PerformanceMetrics {
                frame_time: start.elapsed(),
                simulation_time: self.last_sim_time,
            };

            if self.samples.len() >= self.max_samples {
                self.samples.remove(0);
            }
            self.samples.push(metrics);
        }
    }

    pub fn average_frame_time(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }

        let total: Duration = self.samples.iter().map(|s| s.frame_time).sum();
        total / self.samples.len() as u32
    }

    pub fn average_simulation_time(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }

        let total: Duration = self.samples.iter().map(|s| s.simulation_time).sum();
        total / self.samples.len() as u32
    }

    pub fn fps(&self) -> f32 {
        let avg_frame_time = self.average_frame_time();
        if avg_frame_time.is_zero() {
            return 0.0;
        }
        1.0 / avg_frame_time.as_secs_f32()
    }
}
