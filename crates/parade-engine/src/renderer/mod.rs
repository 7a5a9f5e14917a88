pub mod snapshot;

pub use snapshot::{BodyPosition, PositionBuffer};
