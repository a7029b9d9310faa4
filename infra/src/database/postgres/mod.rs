//! Postgres repository implementations

pub mod ads_repository;
pub mod verification_repository;

pub use ads_repository::PgAdRepository;
pub use verification_repository::PgVerificationCodeRepository;
