#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

pub trait Scored {
    fn score(&self) -> Option<&Score>;
}

/// The fitness value of an individual, as computed by a fitness function.
///
/// A `Score` wraps a single `f32`. NaN is rejected at construction time -
/// a fitness function that can produce NaN has a bug, and silently
/// ordering NaN scores would corrupt selection.
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Score(f32);

impl Score {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            panic!("Score value cannot be NaN")
        }
        Score(value)
    }

    pub fn as_f32(&self) -> f32 {
        self.0
    }

    pub fn as_i32(&self) -> i32 {
        self.0 as i32
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<f32> for Score {
    fn from(value: f32) -> Self {
        Score::new(value)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score::new(value as f32)
    }
}

impl From<usize> for Score {
    fn from(value: usize) -> Self {
        Score::new(value as f32)
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Score::new(self.0 + other.0)
    }
}

impl Sub for Score {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Score::new(self.0 - other.0)
    }
}

impl Mul for Score {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Score::new(self.0 * other.0)
    }
}

impl Div for Score {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Score::new(self.0 / other.0)
    }
}
