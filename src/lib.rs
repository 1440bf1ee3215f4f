//! ShortGic - A minimalist URL shortener service
//!
//! This library provides the core functionality for the ShortGic service:
//! collision-free short identifier allocation, duplicate-target detection,
//! resolution with well-defined failure semantics, and the HTTP surface on
//! top of it.
//!
//! # Architecture
//! - `api`: HTTP services (create, redirect, info, delete)
//! - `services`: business logic (link service, identifier allocator)
//! - `storage`: store trait and SeaORM backend
//! - `config`: configuration management
//! - `system`: logging and platform utilities
//! - `utils`: identifier generation and URL validation

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
