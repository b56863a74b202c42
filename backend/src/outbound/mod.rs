//! Outbound adapters implementing domain ports for storage.
//!
//! - **memory**: process-local todo store backing the service.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic; validation happens in
//! the domain before a store is touched.

pub mod memory;
