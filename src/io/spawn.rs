//! Boundary to whatever instantiates tiles in the world
//!
//! The core only hands out spawn requests and keeps the returned handles so a
//! section can release everything it created in one go.

use log::trace;
use std::collections::HashMap;

use crate::algorithm::random::RandomSource;
use crate::spatial::section::WorldPosition;
use crate::spatial::tiles::TileKind;

/// Opaque identifier of one spawned tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileHandle(pub u64);

/// Everything a spawner needs to create one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Kind of tile to create
    pub kind: TileKind,
    /// World position of the tile
    pub position: WorldPosition,
    /// Launch direction, only set for positron spawners
    pub direction: Option<[i32; 2]>,
}

impl SpawnRequest {
    /// Build a request, rolling a launch direction where the kind needs one
    pub fn new<R: RandomSource + ?Sized>(
        kind: TileKind,
        position: WorldPosition,
        rng: &mut R,
    ) -> Self {
        let direction = (kind == TileKind::PositronSpawner).then(|| launch_direction(rng));
        Self {
            kind,
            position,
            direction,
        }
    }
}

/// Direction with each axis drawn from {-1, 0, 1}
pub fn launch_direction<R: RandomSource + ?Sized>(rng: &mut R) -> [i32; 2] {
    let x = rng.next_int_range(-1, 2);
    let y = rng.next_int_range(-1, 2);
    [x, y]
}

/// Creates and destroys tiles on behalf of sections
pub trait TileSpawner {
    /// Instantiate one tile and return its handle
    fn spawn(&mut self, request: &SpawnRequest) -> TileHandle;

    /// Destroy a previously spawned tile
    fn release(&mut self, handle: TileHandle);
}

/// In-memory spawner that keeps a ledger of live tiles
#[derive(Debug, Default)]
pub struct SpawnLedger {
    live: HashMap<TileHandle, SpawnRequest>,
    next_handle: u64,
    spawned_total: usize,
    released_total: usize,
}

impl SpawnLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles currently alive
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of tiles ever spawned
    pub const fn spawned_total(&self) -> usize {
        self.spawned_total
    }

    /// Number of tiles ever released
    pub const fn released_total(&self) -> usize {
        self.released_total
    }

    /// Request that created a live tile
    pub fn get(&self, handle: TileHandle) -> Option<&SpawnRequest> {
        self.live.get(&handle)
    }

    /// Live tile counts indexed by tile code
    pub fn live_counts_by_kind(&self) -> [usize; TileKind::ALL.len()] {
        let mut counts = [0; TileKind::ALL.len()];
        for request in self.live.values() {
            if let Some(count) = counts.get_mut(request.kind.code() as usize) {
                *count += 1;
            }
        }
        counts
    }
}

impl TileSpawner for SpawnLedger {
    fn spawn(&mut self, request: &SpawnRequest) -> TileHandle {
        let handle = TileHandle(self.next_handle);
        self.next_handle += 1;
        self.spawned_total += 1;
        self.live.insert(handle, *request);
        handle
    }

    fn release(&mut self, handle: TileHandle) {
        if self.live.remove(&handle).is_some() {
            self.released_total += 1;
        } else {
            trace!("Release of unknown tile handle {}", handle.0);
        }
    }
}
