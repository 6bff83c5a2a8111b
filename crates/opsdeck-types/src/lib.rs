pub mod domain;
pub mod error;
pub mod query;

pub use domain::*;
pub use error::{Error, Result};
pub use query::*;
