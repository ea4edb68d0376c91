//! Memoization of pipeline evaluations by input digest.

use crate::error::PlantResult;
use crate::inputs::PlantInputs;
use crate::pipeline::{PlantOutputs, evaluate_pipeline};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

/// Entries kept by `EvaluationCache::new`.
pub const DEFAULT_CAPACITY: usize = 64;

/// SHA-256 over the YAML form of `inputs`, hex encoded.
///
/// YAML keeps `.nan`, `.inf` and `-.inf` apart; JSON writes all three as
/// `null`, so it cannot key inputs that were never coerced.
pub fn inputs_digest(inputs: &PlantInputs) -> PlantResult<String> {
    let mut hasher = Sha256::new();

    let inputs_yaml = serde_yaml::to_string(inputs)?;
    hasher.update(inputs_yaml.as_bytes());

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

/// Outputs keyed by input digest. Holds at most `capacity` entries and
/// evicts the oldest first.
#[derive(Debug)]
pub struct EvaluationCache {
    entries: HashMap<String, PlantOutputs>,
    order: VecDeque<String>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for EvaluationCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached outputs for `inputs`, evaluating on a miss.
    pub fn evaluate(&mut self, inputs: &PlantInputs) -> PlantOutputs {
        let key = match inputs_digest(inputs) {
            Ok(key) => key,
            Err(err) => {
                warn!(error = %err, "inputs digest failed, evaluating uncached");
                self.misses += 1;
                return evaluate_pipeline(inputs);
            }
        };

        if let Some(outputs) = self.entries.get(&key) {
            self.hits += 1;
            return outputs.clone();
        }

        self.misses += 1;
        debug!(digest = %key, "evaluation cache miss");
        let outputs = evaluate_pipeline(inputs);

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, outputs.clone());
        outputs
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
