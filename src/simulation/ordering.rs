use super::{Approach, Vehicle};

/// Per-tick lane queues: indices into the vehicle list, grouped by approach and
/// sorted frontmost first. Built fresh every tick; never stored on vehicles.
#[derive(Debug, Clone, Default)]
pub struct LaneQueues {
    queues: [Vec<usize>; 4],
}

impl LaneQueues {
    pub fn build(vehicles: &[Vehicle]) -> Self {
        let mut queues: [Vec<usize>; 4] = Default::default();

        for (index, vehicle) in vehicles.iter().enumerate() {
            queues[vehicle.approach.index()].push(index);
        }

        // Furthest progress first; on a tie the later spawn counts as ahead.
        for queue in &mut queues {
            queue.sort_by(|&a, &b| {
                vehicles[b]
                    .progress()
                    .total_cmp(&vehicles[a].progress())
                    .then_with(|| vehicles[b].id.cmp(&vehicles[a].id))
            });
        }

        Self { queues }
    }

    /// Vehicle indices for one approach, nearest to exiting first.
    pub fn queue(&self, approach: Approach) -> &[usize] {
        &self.queues[approach.index()]
    }

    /// Leader of the vehicle at `rank` in its approach's queue.
    pub fn leader_at(&self, approach: Approach, rank: usize) -> Option<usize> {
        if rank == 0 {
            return None;
        }
        self.queue(approach).get(rank - 1).copied()
    }

    /// Every vehicle index paired with its leader's index.
    pub fn with_leaders(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.queues.iter().flat_map(|queue| {
            queue
                .iter()
                .enumerate()
                .map(move |(rank, &index)| (index, rank.checked_sub(1).map(|r| queue[r])))
        })
    }
}
