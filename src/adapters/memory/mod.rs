//! In-memory adapters for the persistence ports.
//!
//! Suitable for single-server deployments and tests; nothing survives a
//! restart except the catalog, which is re-seeded from its YAML file.

mod catalog;
mod chat_history;
mod consultations;

pub use catalog::InMemoryCatalog;
pub use chat_history::InMemoryChatHistory;
pub use consultations::InMemoryConsultationRepository;
