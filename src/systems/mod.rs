//! Simulation systems, run once per fixed step in declaration order.

pub mod collision;
pub mod projectile;
pub mod wolf;
