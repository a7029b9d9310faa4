//! SMS transport implementations

pub mod cloud;

pub use cloud::CloudSmsService;
