//! Read-only views handed to whatever draws the intersection.

use serde::Serialize;
use super::{Approach, Axis, ColorTag, SignalState, SimulationState, Vehicle, VehicleId};

/// Axis-aligned screen rectangle, top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleView {
    pub id: VehicleId,
    pub approach: Approach,
    pub position: f32,
    pub center: (f32, f32),
    pub length: f32,
    pub width: f32,
    pub color: ColorTag,
    pub rect: Rect,
}

impl VehicleView {
    pub fn of(vehicle: &Vehicle) -> Self {
        let center = vehicle.center();
        Self {
            id: vehicle.id,
            approach: vehicle.approach,
            position: vehicle.position,
            center: (center.x, center.y),
            length: vehicle.length,
            width: vehicle.width,
            color: vehicle.color,
            rect: screen_rect(vehicle),
        }
    }
}

/// North/south traffic is drawn tall and narrow, east/west wide and short.
pub fn screen_rect(vehicle: &Vehicle) -> Rect {
    let center = vehicle.center();
    let (width, height) = match vehicle.approach.axis() {
        Axis::Vertical => (vehicle.width, vehicle.length),
        Axis::Horizontal => (vehicle.length, vehicle.width),
    };

    Rect {
        x: center.x - width / 2.0,
        y: center.y - height / 2.0,
        width,
        height,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub time: f32,
    pub signals: SignalState,
    pub vehicles: Vec<VehicleView>,
}

impl FrameSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            time: state.time,
            signals: state.signals,
            vehicles: state.vehicles.iter().map(VehicleView::of).collect(),
        }
    }
}
