//! The four fixed approaches and the geometry each one is driven by.
//!
//! Every approach is reduced to a descriptor: an axis, a sign of motion and a
//! handful of coordinates along that axis. Motion and ordering work in signed
//! progress (`sign * coordinate`), so one code path serves all four directions.

use serde::{Deserialize, Serialize};
use crate::config::IntersectionGeometry;

/// Direction of travel, named after the edge a vehicle enters from.
///
/// `South` vehicles enter at `y = 0` and travel toward `+y`; `West` vehicles
/// enter at `x = screen_width` and travel toward `-x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    South,
    North,
    West,
    East,
}

impl Approach {
    pub const ALL: [Approach; 4] = [Approach::South, Approach::North, Approach::West, Approach::East];

    pub fn index(self) -> usize {
        match self {
            Approach::South => 0,
            Approach::North => 1,
            Approach::West => 2,
            Approach::East => 3,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Approach::South | Approach::North => Axis::Vertical,
            Approach::West | Approach::East => Axis::Horizontal,
        }
    }

    /// +1 when travel increases the coordinate, -1 otherwise.
    pub fn sign(self) -> f32 {
        match self {
            Approach::South | Approach::East => 1.0,
            Approach::North | Approach::West => -1.0,
        }
    }

    pub fn signal_group(self) -> SignalGroup {
        match self.axis() {
            Axis::Vertical => SignalGroup::NorthSouth,
            Axis::Horizontal => SignalGroup::EastWest,
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            Approach::South => ColorTag::Blue,
            Approach::North => ColorTag::Red,
            Approach::West => ColorTag::Green,
            Approach::East => ColorTag::Orange,
        }
    }
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Approach::South => "south",
            Approach::North => "north",
            Approach::West => "west",
            Approach::East => "east",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalGroup {
    NorthSouth,
    EastWest,
}

/// Display colour per approach; the renderer maps these to real colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Red,
    Green,
    Orange,
}

/// Fixed coordinates of one approach, all measured along its travel axis
/// except `cross_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproachGeometry {
    pub approach: Approach,
    pub spawn: f32,
    pub stop_line: f32,
    /// Screen edge the approach drives out through.
    pub exit_bound: f32,
    /// Lane centre on the cross axis.
    pub cross_offset: f32,
    pub offscreen_distance: f32,
}

impl ApproachGeometry {
    pub fn sign(&self) -> f32 {
        self.approach.sign()
    }

    pub fn progress_of(&self, coordinate: f32) -> f32 {
        self.sign() * coordinate
    }

    pub fn coordinate_of(&self, progress: f32) -> f32 {
        self.sign() * progress
    }

    pub fn spawn_progress(&self) -> f32 {
        self.progress_of(self.spawn)
    }

    pub fn stop_line_progress(&self) -> f32 {
        self.progress_of(self.stop_line)
    }

    pub fn exit_progress(&self) -> f32 {
        self.progress_of(self.exit_bound)
    }

    /// Where an unconstrained vehicle heads: far beyond the exit edge.
    pub fn go_progress(&self) -> f32 {
        self.exit_progress() + self.offscreen_distance
    }
}

/// Descriptors for all four approaches, indexed by [`Approach::index`].
#[derive(Debug, Clone)]
pub struct ApproachTable {
    entries: [ApproachGeometry; 4],
}

impl ApproachTable {
    pub fn new(geometry: &IntersectionGeometry) -> Self {
        let cx = geometry.center_x();
        let cy = geometry.center_y();
        let half_road = geometry.road_width / 2.0;
        let lane = geometry.lane_offset;
        let offscreen = geometry.offscreen_distance;

        let build = |approach, spawn, stop_line, exit_bound, cross_offset| ApproachGeometry {
            approach,
            spawn,
            stop_line,
            exit_bound,
            cross_offset,
            offscreen_distance: offscreen,
        };

        Self {
            entries: [
                build(Approach::South, 0.0, cy - half_road, geometry.screen_height, cx - lane),
                build(Approach::North, geometry.screen_height, cy + half_road, 0.0, cx + lane),
                build(Approach::West, geometry.screen_width, cx + half_road, 0.0, cy - lane),
                build(Approach::East, 0.0, cx - half_road, geometry.screen_width, cy + lane),
            ],
        }
    }

    pub fn get(&self, approach: Approach) -> &ApproachGeometry {
        &self.entries[approach.index()]
    }
}
