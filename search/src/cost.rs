//! Path cost abstraction.

use std::ops::Add;
use std::time::Duration;

/// An additive, ordered path cost.
///
/// The engine only ever adds edge costs onto accumulated costs and compares
/// them with `<`. It relies on edge costs being non-negative (adding an edge
/// never makes a path cheaper) but never checks it.
///
/// Only a partial order is required, so floating-point costs work. Costs that
/// compare as unordered (`NaN`) are outside the contract.
pub trait Cost: Clone + Add<Output = Self> + PartialOrd {
    /// The additive identity, used as the default start cost.
    fn zero() -> Self;
}

macro_rules! int_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

macro_rules! float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn zero() -> Self {
                    0.0
                }
            }
        )*
    };
}

int_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_cost!(f32, f64);

impl Cost for Duration {
    fn zero() -> Self {
        Duration::ZERO
    }
}
