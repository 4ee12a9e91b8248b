pub mod auth_service;
pub mod capacity;
pub mod schedule;
