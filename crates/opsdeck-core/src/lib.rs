pub mod filter;
pub mod pagination;
pub mod share;

pub use filter::matches;
pub use pagination::{PaginationView, present};
pub use share::{decode, encode};
