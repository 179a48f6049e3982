mod client;
pub mod error;
pub mod protocol;

pub use client::{CoordinatorClient, TaskConfig, TaskRunner};
pub use error::CoordinatorError;
