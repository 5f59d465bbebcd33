pub mod handlers;
pub mod strength;
