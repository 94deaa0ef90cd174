//! Ordered threshold tables.
//!
//! Every bucketing rule in the engine is a list of `(comparison, breakpoint,
//! value)` rungs checked top to bottom; the first rung that matches wins and
//! `otherwise` covers the rest.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Above,
    AtLeast,
    Below,
}

impl Cmp {
    fn holds(self, value: f64, breakpoint: f64) -> bool {
        match self {
            Cmp::Above => value > breakpoint,
            Cmp::AtLeast => value >= breakpoint,
            Cmp::Below => value < breakpoint,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ladder<T: Copy + 'static> {
    rungs: &'static [(Cmp, f64, T)],
    otherwise: T,
}

impl<T: Copy + 'static> Ladder<T> {
    pub const fn new(rungs: &'static [(Cmp, f64, T)], otherwise: T) -> Self {
        Self { rungs, otherwise }
    }

    pub fn lookup(&self, value: f64) -> T {
        self.rungs
            .iter()
            .find(|(cmp, breakpoint, _)| cmp.holds(value, *breakpoint))
            .map(|(_, _, out)| *out)
            .unwrap_or(self.otherwise)
    }
}
