// extensions/mod.rs
//
// Optional math helpers, decoupled from bodies and the engine.

pub mod easing;

pub use easing::{Easing, lerp, ease};
