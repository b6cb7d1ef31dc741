//! API endpoint handlers. Handlers stay thin and call into `intelligence`.

pub mod health;
pub mod labs;
