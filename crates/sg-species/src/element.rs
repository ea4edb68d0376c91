//! Element (atom) bookkeeping for conservation checks.

use serde::Serialize;
use sg_core::numeric::{Tolerances, nearly_equal};
use std::ops::{Add, AddAssign, Sub};

/// Atom flows (kgatom/hr) or atoms per molecule, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ElementCounts {
    pub c: f64,
    pub h: f64,
    pub n: f64,
    pub o: f64,
    pub ar: f64,
}

impl ElementCounts {
    pub const fn new(c: f64, h: f64, n: f64, o: f64, ar: f64) -> Self {
        Self { c, h, n, o, ar }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            c: self.c * factor,
            h: self.h * factor,
            n: self.n * factor,
            o: self.o * factor,
            ar: self.ar * factor,
        }
    }

    /// Largest absolute entry.
    pub fn max_abs(&self) -> f64 {
        [self.c, self.h, self.n, self.o, self.ar]
            .into_iter()
            .map(f64::abs)
            .fold(0.0, f64::max)
    }

    pub fn nearly_equal(&self, other: &Self, tol: Tolerances) -> bool {
        nearly_equal(self.c, other.c, tol)
            && nearly_equal(self.h, other.h, tol)
            && nearly_equal(self.n, other.n, tol)
            && nearly_equal(self.o, other.o, tol)
            && nearly_equal(self.ar, other.ar, tol)
    }
}

impl Add for ElementCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            c: self.c + rhs.c,
            h: self.h + rhs.h,
            n: self.n + rhs.n,
            o: self.o + rhs.o,
            ar: self.ar + rhs.ar,
        }
    }
}

impl AddAssign for ElementCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ElementCounts {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + rhs.scaled(-1.0)
    }
}
