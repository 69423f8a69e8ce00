//! # API Shared
//!
//! Shared definitions for the consultas HTTP entry points.
//!
//! Contains:
//! - Response bodies returned by every variant (`HealthRes`, `ErrorRes`)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the workspace runner so the server and desktop variants answer with
//! identical payloads.

pub mod health;
pub mod responses;

pub use health::HealthService;
pub use responses::{ErrorRes, HealthRes};
