//! Application pages

mod browse;

pub use browse::*;
