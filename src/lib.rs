//! triviad - a self-hostable trivia quiz API server

pub mod api;
pub mod cli;
pub mod config;
pub mod observability;
pub mod quiz;
pub mod store;
