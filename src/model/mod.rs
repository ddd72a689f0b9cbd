//! Data transfer objects exchanged with the housing API.

pub mod api;
pub mod application;
pub mod stats;
pub mod user;
