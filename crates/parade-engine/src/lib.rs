pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;
pub mod presets;

// Re-export key types at crate root for convenience
pub use api::config::{BodyConfig, ConfigError, MotionConfig, ParadeConfig};
pub use api::engine::{EngineState, MotionEngine};
pub use api::types::{Direction, LoopControl, LoopRequest};
pub use components::body::{Motion, OrbitalBody};
pub use crate::core::angle::normalize_angle;
pub use crate::core::simulation::Simulation;
pub use crate::core::time::{FrameClock, TickAccumulator};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::snapshot::{BodyPosition, PositionBuffer};
pub use systems::proximity::{compute_proximity, target_speed, ProximityField};
pub use systems::return_planner::ReturnTrajectory;
pub use systems::speed::ZERO_EPSILON;
pub use presets::planet_parade;

// Extensions: decoupled math
pub use extensions::{Easing, lerp, ease};
