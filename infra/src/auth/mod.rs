//! Auth backend client implementations

pub mod admin_client;

pub use admin_client::AuthAdminClient;
