//! Value objects shared by the domain services

pub mod contact;

pub use contact::Contact;
