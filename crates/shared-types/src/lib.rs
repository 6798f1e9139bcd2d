pub mod common;
pub mod config;
pub mod fields;
pub mod outputs;
pub mod snapshot;
pub mod timeliness;

// Re-export all domain types
pub use common::*;
pub use config::*;
pub use fields::*;
pub use outputs::*;
pub use snapshot::*;
pub use timeliness::*;
