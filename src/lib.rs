//! Linklet - a small URL shortener service
//!
//! Maps short alphanumeric codes to target URLs, redirects visitors with
//! HTTP 302, and tracks per-link click counts.
//!
//! # Architecture
//! - `repository`: the link store (SeaORM over SQLite/Postgres/MySQL)
//! - `services`: HTTP handlers and the link management service layer
//! - `utils`: code generation and input validation
//! - `config`: environment-backed configuration
//! - `errors`: crate-wide error taxonomy

pub mod config;
pub mod errors;
pub mod repository;
pub mod services;
pub mod utils;
