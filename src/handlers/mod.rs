pub mod auth;
pub mod entrepreneur;
pub mod health;
pub mod idea;
pub mod investor;
pub mod summary;
