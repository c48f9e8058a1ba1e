//! Obstacle generation and solvable-grid validation for gridroute.

pub mod config;
pub mod error;
pub mod obstacles;
pub mod validator;

pub use config::{Plan, PlannerConfig, plan};
pub use error::GenError;
pub use obstacles::ObstacleGenerator;
pub use validator::{GridValidator, ValidGrid};
