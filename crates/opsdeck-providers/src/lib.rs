// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Directory implementations
pub mod memory;

// Directory registry
pub mod registry;

pub use error::{Error, Result};
pub use memory::{DEFAULT_LATENCY, MemoryDirectory, seed_users};
pub use registry::{create_directory, directory_names};
pub use traits::UserDirectory;
