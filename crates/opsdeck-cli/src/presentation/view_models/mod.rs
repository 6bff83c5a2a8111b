mod dashboard;
mod session;
mod users;

pub use dashboard::*;
pub use session::*;
pub use users::*;
