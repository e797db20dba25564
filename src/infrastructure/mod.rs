//! Infrastructure layer - External collaborators and service wiring

pub mod classifier;
pub mod logging;
pub mod services;
