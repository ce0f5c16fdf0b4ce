pub mod config;
pub mod driver;
pub mod error;
pub mod gate;
pub mod granule;
pub mod index;
pub mod io;
pub mod locate;
pub mod orchestrator;
pub mod pairing;
pub mod paths;
pub mod runconfig;
pub mod stage;
pub mod types;

pub use error::{JetError, Result};
