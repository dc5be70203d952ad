//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **upstream**: reqwest client for the Pokémon data service
//! - **cache**: moka-backed decorator that deduplicates upstream reads
//!
//! Adapters translate between domain types and transport representations.
//! They contain no business logic.

pub mod cache;
pub mod upstream;
