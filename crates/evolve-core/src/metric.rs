//! # Metrics
//!
//! A small, self-contained metrics surface used by [`crate::alter::Alter`]
//! operators and the engine's generation listeners. Each [`Metric`] tracks a
//! running value statistic (operation counts) and a running time statistic
//! (operator duration) under a single name; a [`MetricSet`] aggregates
//! metrics emitted across a generation, keyed by name.

use std::collections::BTreeMap;
use std::time::Duration;

/// A numerically stable running statistic (count, mean, variance, min, max).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Statistic {
    count: usize,
    mean: f32,
    m2: f32,
    min: f32,
    max: f32,
    sum: f32,
    last_value: f32,
}

impl Statistic {
    pub fn add(&mut self, value: f32) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f32;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        self.sum += value;
        self.last_value = value;
        self.min = if self.count == 1 { value } else { self.min.min(value) };
        self.max = if self.count == 1 { value } else { self.max.max(value) };
    }

    pub fn merge(&mut self, other: &Statistic) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;
        let combined_mean =
            self.mean + delta * other.count as f32 / combined_count as f32;
        let combined_m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f32 * other.count as f32) / combined_count as f32;

        self.mean = combined_mean;
        self.m2 = combined_m2;
        self.count = combined_count;
        self.sum += other.sum;
        self.last_value = other.last_value;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f32 {
        self.mean
    }

    pub fn variance(&self) -> f32 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / self.count as f32
        }
    }

    pub fn std_dev(&self) -> f32 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn sum(&self) -> f32 {
        self.sum
    }

    pub fn last_value(&self) -> f32 {
        self.last_value
    }
}

/// A named metric combining an operation-count statistic with an optional
/// duration statistic.
#[derive(Clone, PartialEq, Debug)]
pub struct Metric {
    name: &'static str,
    value: Statistic,
    time: Option<Statistic>,
}

impl Metric {
    pub fn new(name: &'static str) -> Self {
        Metric {
            name,
            value: Statistic::default(),
            time: None,
        }
    }

    /// Builds a metric recording a single operator invocation: `count`
    /// operations performed over `duration`.
    pub fn new_operations(name: &'static str, count: usize, duration: Duration) -> Self {
        let mut metric = Metric::new(name);
        metric.value.add(count as f32);
        let mut time = Statistic::default();
        time.add(duration.as_secs_f32());
        metric.time = Some(time);
        metric
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &Statistic {
        &self.value
    }

    pub fn time(&self) -> Option<&Statistic> {
        self.time.as_ref()
    }

    pub fn merge(&mut self, other: &Metric) {
        self.value.merge(&other.value);
        match (&mut self.time, &other.time) {
            (Some(time), Some(other_time)) => time.merge(other_time),
            (None, Some(other_time)) => self.time = Some(*other_time),
            _ => {}
        }
    }
}

/// A collection of [`Metric`]s keyed by name, accumulated across a
/// generation's `Alter` invocations.
#[derive(Clone, Default)]
pub struct MetricSet {
    metrics: BTreeMap<&'static str, Metric>,
}

impl MetricSet {
    pub fn new() -> Self {
        MetricSet::default()
    }

    pub fn upsert(&mut self, metric: Metric) {
        match self.metrics.get_mut(metric.name()) {
            Some(existing) => existing.merge(&metric),
            None => {
                self.metrics.insert(metric.name(), metric);
            }
        }
    }

    pub fn extend(&mut self, metrics: impl IntoIterator<Item = Metric>) {
        for metric in metrics {
            self.upsert(metric);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.values()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistic_tracks_mean_and_bounds() {
        let mut stat = Statistic::default();
        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            stat.add(value);
        }

        assert_eq!(stat.count(), 5);
        assert_eq!(stat.mean(), 3.0);
        assert_eq!(stat.min(), 1.0);
        assert_eq!(stat.max(), 5.0);
        assert_eq!(stat.last_value(), 5.0);
    }

    #[test]
    fn metric_new_operations_records_count_and_duration() {
        let metric = Metric::new_operations("mutate", 3, Duration::from_millis(10));
        assert_eq!(metric.value().sum(), 3.0);
        assert!(metric.time().is_some());
    }

    #[test]
    fn metric_set_merges_same_named_metrics() {
        let mut set = MetricSet::new();
        set.upsert(Metric::new_operations("mutate", 2, Duration::from_millis(5)));
        set.upsert(Metric::new_operations("mutate", 3, Duration::from_millis(5)));

        let merged = set.get("mutate").unwrap();
        assert_eq!(merged.value().count(), 2);
        assert_eq!(merged.value().sum(), 5.0);
    }
}
