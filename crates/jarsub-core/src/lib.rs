pub mod config;
pub mod logging;

pub mod client;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod retry;
pub mod transport;

pub use client::JobClient;
pub use error::ClientError;
