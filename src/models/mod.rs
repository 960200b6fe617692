pub mod auth;
pub mod common;
pub mod entrepreneur;
pub mod idea;
pub mod investor;
pub mod matching;
pub mod summary;
