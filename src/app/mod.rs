pub mod config;
pub mod effects;
pub mod events;
pub mod input;
pub mod report;
pub mod state;
