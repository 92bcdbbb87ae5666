//! Randomized operand and option generation.
//!
//! All generators take the random source as a parameter so games can be
//! replayed from a seed.

pub mod options;
pub mod pairs;

pub use options::{generate_options, wrong_options};
pub use pairs::{
    addition_pair, comparison_pair, division_pair, fraction, multiplication_pair, operands_for,
    subtraction_pair,
};
