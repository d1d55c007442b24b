//! Turning a final value into a degree of success.
//!
//! The two mechanics classify differently:
//! - **Degree table** (ALEA): scan the threshold table's boundaries and take
//!   the first one at or above the final roll
//! - **Digit rule** (ALEA99): a fixed four-way decision on whether the two
//!   digits match and whether the value stays within the threshold

pub mod alea99;
pub mod degree;

pub use alea99::Alea99Level;
pub use degree::{Classification, RangeText, ScaledLevel, classify, scale};
