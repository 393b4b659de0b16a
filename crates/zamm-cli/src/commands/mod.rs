pub mod config;
pub mod nest;
pub mod timing;
pub mod transition;
