pub mod config;
pub mod driver;
pub mod event;
pub mod producer;
