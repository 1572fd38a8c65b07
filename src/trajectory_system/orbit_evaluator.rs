use log::{debug, warn};

/// Eccentricity estimate from the apoapsis and periapsis found in `radii`:
/// `(max - min) / (max + min)`.
///
/// Returns `None` for an empty window or one where every radius is zero.
pub fn eccentricity_from(radii: &[f64]) -> Option<f64> {
    let (min, max) = radii
        .iter()
        .fold(None, |bounds: Option<(f64, f64)>, &radius| match bounds {
            None => Some((radius, radius)),
            Some((min, max)) => Some((min.min(radius), max.max(radius))),
        })?;

    let sum = max + min;
    if sum <= 0.0 {
        return None;
    }
    Some((max - min) / sum)
}

#[derive(Debug, Clone)]
pub struct OrbitEvaluator {
    samples: Vec<f64>,
    eccentricity: f64,
    window_ticks: u64,
    recomputations: u64,
}

impl OrbitEvaluator {
    pub fn new(window_ticks: u64, initial_eccentricity: f64) -> Self {
        OrbitEvaluator {
            samples: Vec::new(),
            eccentricity: initial_eccentricity,
            window_ticks: window_ticks.max(1),
            recomputations: 0,
        }
    }

    pub fn record_sample(&mut self, distance: f64) {
        self.samples.push(distance);
    }

    /// Recomputes the eccentricity when `tick` closes a sampling window and starts
    /// the next window. Returns the new value if one was computed.
    ///
    /// An empty or degenerate window keeps the previous eccentricity.
    pub fn maybe_recompute(&mut self, tick: u64) -> Option<f64> {
        if tick == 0 || tick % self.window_ticks != 0 {
            return None;
        }

        let result = eccentricity_from(&self.samples);
        match result {
            Some(eccentricity) => {
                debug!(
                    "tick {tick}: eccentricity {eccentricity:.4} over {} samples",
                    self.samples.len()
                );
                self.eccentricity = eccentricity;
                self.recomputations += 1;
            }
            None => warn!(
                "tick {tick}: no usable samples, keeping eccentricity {:.4}",
                self.eccentricity
            ),
        }
        self.samples.clear();
        result
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn window_ticks(&self) -> u64 {
        self.window_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_eccentricity_formula() {
        let e = eccentricity_from(&[100.0, 80.0, 120.0, 90.0]).unwrap();
        assert_abs_diff_eq!(e, 40.0 / 200.0, epsilon = 1e-12);

        assert_eq!(eccentricity_from(&[95.0, 95.0, 95.0]), Some(0.0));
        assert_eq!(eccentricity_from(&[]), None);
        assert_eq!(eccentricity_from(&[0.0, 0.0]), None);
    }

    #[test]
    fn test_eccentricity_stays_in_unit_interval() {
        let windows: [&[f64]; 4] = [
            &[1.0, 1_000_000.0],
            &[69.0, 120.0, 70.5],
            &[0.0, 5.0],
            &[42.0],
        ];
        for radii in windows {
            let e = eccentricity_from(radii).unwrap();
            assert!((0.0..=1.0).contains(&e), "{e} out of range for {radii:?}");
        }
    }

    #[test]
    fn test_recompute_only_at_window_boundaries() {
        let mut evaluator = OrbitEvaluator::new(300, 1.0);

        for tick in 1..=900u64 {
            evaluator.record_sample(100.0 + (tick % 7) as f64);
            let result = evaluator.maybe_recompute(tick);
            assert_eq!(result.is_some(), tick % 300 == 0, "tick {tick}");
        }
        assert_eq!(evaluator.recomputations(), 3);
        assert_eq!(evaluator.sample_count(), 0);
    }

    #[test]
    fn test_window_does_not_reuse_old_samples() {
        let mut evaluator = OrbitEvaluator::new(3, 1.0);

        for (tick, radius) in [(1, 50.0), (2, 150.0), (3, 100.0)] {
            evaluator.record_sample(radius);
            evaluator.maybe_recompute(tick);
        }
        assert_abs_diff_eq!(evaluator.eccentricity(), 0.5, epsilon = 1e-12);

        for (tick, radius) in [(4, 100.0), (5, 100.0), (6, 100.0)] {
            evaluator.record_sample(radius);
            evaluator.maybe_recompute(tick);
        }
        assert_eq!(evaluator.eccentricity(), 0.0);
    }

    #[test]
    fn test_empty_window_keeps_previous_value() {
        let mut evaluator = OrbitEvaluator::new(2, 0.7);

        assert_eq!(evaluator.maybe_recompute(2), None);
        assert_eq!(evaluator.eccentricity(), 0.7);
        assert_eq!(evaluator.recomputations(), 0);
    }
}
