// rulebench-core/src/lib.rs

// 1. Documentation is not mandatory yet
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (business core)
// Rules, execution contract, repository port, client-side validation.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 2. Infrastructure (Adapters)
// HTTP repository, configuration files.
// Depends on the Domain.
pub mod infrastructure;

// 3. Application (Use Cases)
// Collection store, editor, execution, rule-list page.
// Depends on the Domain and the ports; never on a concrete adapter.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// --- RE-EXPORTS (FACADE) ---
// use rulebench_core::RulebenchError;
pub use error::RulebenchError;
