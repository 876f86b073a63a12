pub mod config;
pub mod di;
pub mod service;
pub mod state;
