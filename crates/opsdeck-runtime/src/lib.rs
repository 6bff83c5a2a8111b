pub mod config;
pub mod console;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod query_state;
pub mod session;

pub use config::{Config, DirectoryConfig, resolve_data_dir};
pub use console::Console;
pub use controller::{FETCH_ERROR_MESSAGE, FetchComplete, FetchState, ListController};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::{Error, Result};
pub use query_state::QueryState;
pub use session::{Session, SessionStatus, SessionStore};
