pub mod config;
pub mod month;
pub mod session;
