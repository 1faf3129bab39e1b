//! School-management REST services.
//!
//! Three independently deployable services share this crate:
//!
//! - **gerenciamento**: the roster (professors, classes, students)
//! - **tarefas**: assignments and grades
//! - **reservas**: room bookings
//!
//! Each exposes the same CRUD contract over its resources. Records are
//! flat, ids are store-assigned and never reused, and relationships are
//! soft integer foreign keys. Where a service references a record owned
//! by the roster (a class on a booking, a professor on an assignment),
//! it confirms existence at write time with a single timed-out GET
//! against the roster's API and rejects the write when the lookup fails
//! for any reason, peer outage included.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  API Layer                   │
//! │    HTTP handlers, routing, error mapping     │
//! ├─────────────────────────────────────────────┤
//! │              Application Layer               │
//! │        per-service state, injection          │
//! ├─────────────────────────────────────────────┤
//! │                Domain Layer                  │
//! │   entities, payloads, errors, trait seams    │
//! ├─────────────────────────────────────────────┤
//! │            Infrastructure Layer              │
//! │   stores, peer HTTP client, config, telemetry│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! External dependencies sit behind traits (`ReferenceChecker`) and are
//! injected through constructors, so every handler is testable against
//! in-memory fakes.

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;

// Mock implementations for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
