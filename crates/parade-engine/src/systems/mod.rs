pub mod integrator;
pub mod proximity;
pub mod return_planner;
pub mod speed;
