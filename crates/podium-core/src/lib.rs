pub mod config;
pub mod error;
pub mod types;

pub use config::PodiumConfig;
pub use error::{PodiumError, Result};
pub use types::*;
