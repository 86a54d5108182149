//! In-memory collection of (label, score) pairs.

use crate::config::KsConfig;
use crate::error::{KsError, Result};
use crate::ks::aggregate::validate_labels;
use crate::ks::evaluate;
use crate::ks::table::SummaryTable;

/// Pure-Rust accumulator behind the Python `KsEvaluator`
#[derive(Clone, Debug)]
pub struct KsAccumulator {
    true_labels: Vec<f64>,
    scores: Vec<f64>,
    config: KsConfig,
}

impl KsAccumulator {
    pub fn new(config: KsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            true_labels: Vec::new(),
            scores: Vec::new(),
            config,
        })
    }

    /// Add one observation. Bad labels and non-finite scores are rejected
    /// without touching the collected data.
    pub fn update(&mut self, true_label: f64, score: f64) -> Result<()> {
        validate_labels(&[true_label])?;
        if !score.is_finite() {
            return Err(KsError::invalid(format!("score is not finite ({})", score)));
        }
        self.true_labels.push(true_label);
        self.scores.push(score);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn true_labels(&self) -> &[f64] {
        &self.true_labels
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn config(&self) -> &KsConfig {
        &self.config
    }

    /// Summary table over everything collected so far
    pub fn summary(&self) -> Result<SummaryTable> {
        evaluate(&self.scores, &self.true_labels, &self.config)
    }

    pub fn reset(&mut self) {
        self.true_labels.clear();
        self.scores.clear();
    }
}
