// Macros used by kindred itself, not meant for downstream crates.

pub mod peano;
