//! Request and response data transfer objects

pub mod ads;
pub mod auth;
