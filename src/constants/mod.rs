//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod arena;
mod audio;
mod projectiles;
mod time;
mod wolf;

// Re-export all constants at the module level
pub use arena::*;
pub use audio::*;
pub use projectiles::*;
pub use time::*;
pub use wolf::*;
