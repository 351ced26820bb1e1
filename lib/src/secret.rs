use crate::config::GameConfig;
use rand::Rng;
use std::collections::HashMap;
use std::collections::HashSet;

/// The hidden code, stored as a table from each used value to the set of
/// zero-based positions where that value occurs.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Secret {
    positions_per_value: HashMap<u8, HashSet<usize>>,
    length: usize,
}

impl Secret {
    /// Generates a secret under the given settings, drawing values from `rng`.
    ///
    /// The settings must already be validated: when duplicates are disallowed,
    /// the value range must hold at least `code_length` distinct values so
    /// that the redraw loop always terminates.
    pub fn generate<R: Rng>(config: &GameConfig, rng: &mut R) -> Secret {
        let mut positions_per_value: HashMap<u8, HashSet<usize>> = HashMap::new();
        for index in 0..config.code_length {
            let mut value = rng.gen_range(config.min_value..=config.max_value);
            if !config.duplicates_allowed {
                // Redraw until the value is not already in the code.
                while positions_per_value.contains_key(&value) {
                    value = rng.gen_range(config.min_value..=config.max_value);
                }
            }
            positions_per_value
                .entry(value)
                .or_insert_with(HashSet::new)
                .insert(index);
        }
        Secret {
            positions_per_value,
            length: config.code_length,
        }
    }

    /// Builds a secret holding the given values in the given order.
    pub fn from_values(values: &[u8]) -> Secret {
        let mut positions_per_value: HashMap<u8, HashSet<usize>> = HashMap::new();
        for (index, value) in values.iter().enumerate() {
            positions_per_value
                .entry(*value)
                .or_insert_with(HashSet::new)
                .insert(index);
        }
        Secret {
            positions_per_value,
            length: values.len(),
        }
    }

    /// The number of positions in the code.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` iff the code has no positions.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The number of positions that hold the given value.
    pub fn occurrence_count(&self, value: u8) -> usize {
        self.positions_per_value
            .get(&value)
            .map_or(0, |positions| positions.len())
    }

    /// Returns `true` iff the given value sits at the given position.
    pub fn is_at(&self, value: u8, index: usize) -> bool {
        self.positions_per_value
            .get(&value)
            .map_or(false, |positions| positions.contains(&index))
    }

    /// Iterates over the distinct values used in the code.
    pub fn used_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.positions_per_value.keys().copied()
    }
}
