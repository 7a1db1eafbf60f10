pub mod error;
pub mod operations;
pub mod repository;
pub mod utils;

#[cfg(test)]
mod tests;

pub use error::{BackendError, BackendResult};
pub use operations::*;
pub use repository::GitRepository;
pub use utils::*;
