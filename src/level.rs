use crate::geometry::{PxRange, RangeSet};
use crate::Px;
use std::collections::HashMap;
use std::hash::Hash;

/// Packs labelled things onto horizontal tracks ("levels") so that nothing on the same track
/// overlaps.
///
/// Placement is greedy first-fit: each newcomer goes onto the lowest track where none of its
/// ranges hit anything already there, and a new track is opened when none fits. That is
/// deterministic for a given insertion order but not guaranteed to use the fewest tracks.
#[derive(Debug, Clone)]
pub struct LevelManager<K> {
    tracks: Vec<RangeSet>,
    levels: HashMap<K, usize>,
}

impl<K> Default for LevelManager<K> {
    fn default() -> Self {
        LevelManager {
            tracks: Vec::new(),
            levels: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy> LevelManager<K> {
    pub fn new() -> LevelManager<K> {
        LevelManager::default()
    }

    /// Place `key`, which covers every range in `ranges`, on the first track with room for
    /// all of them
    pub fn assign(&mut self, key: K, ranges: &[PxRange]) {
        let free = self
            .tracks
            .iter()
            .position(|track| ranges.iter().all(|range| !track.intersects(range)));

        let level = match free {
            Some(level) => level,
            None => {
                self.tracks.push(RangeSet::default());
                log::trace!("opened level {}", self.tracks.len() - 1);
                self.tracks.len() - 1
            }
        };

        let track = &mut self.tracks[level];
        for range in ranges {
            track.insert(*range);
        }
        self.levels.insert(key, level);
    }

    pub fn level_of(&self, key: K) -> Option<usize> {
        self.levels.get(&key).copied()
    }

    /// The number of levels in use, i.e. the highest assigned level plus one, or zero when
    /// nothing has been assigned
    pub fn max_level(&self) -> usize {
        self.levels.values().max().map_or(0, |level| level + 1)
    }

    /// The right edge of the rightmost range placed on any level
    pub fn extent(&self) -> Px {
        self.tracks
            .iter()
            .filter_map(RangeSet::extent)
            .fold(Px::ZERO, Px::max)
    }

    /// Forget every level and assignment
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.levels.clear();
    }
}
