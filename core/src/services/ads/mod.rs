//! Advertisement directory service

mod service;

pub use service::AdService;
