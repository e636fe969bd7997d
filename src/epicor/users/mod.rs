pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod io;
pub mod logging;
pub mod model;
pub mod sync;

pub use error::{Result, SyncError};
