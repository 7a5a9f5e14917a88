pub mod angle;
pub mod simulation;
pub mod time;
