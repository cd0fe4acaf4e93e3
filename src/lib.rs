mod algorithm;
pub mod common;
pub mod config;
pub mod display;
pub mod maze;
pub mod scenario;
pub mod solver;
pub mod stat;
