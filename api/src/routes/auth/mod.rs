//! Verification and password reset endpoints
//!
//! - `POST /auth/send-code` - issue and dispatch a one-time code
//! - `POST /auth/verify-code` - consume a submitted code
//! - `GET /auth/code-status` - delivery probe polled by the client
//! - `POST /auth/reset-password` - run the reset orchestrator

pub mod code_status;
pub mod reset_password;
pub mod send_code;
pub mod verify_code;
