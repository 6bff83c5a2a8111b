pub mod dashboard;
pub mod login;
pub mod logout;
pub mod users;
pub mod whoami;
