//! Mail transport implementations

pub mod smtp;

pub use smtp::SmtpMailer;
