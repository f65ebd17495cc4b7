//! BDD step definitions for the beacon dashboard

pub mod keyboard_steps;
pub mod search_steps;
pub mod server_steps;
