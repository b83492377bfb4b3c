pub mod client;
pub mod error;
pub mod term;

pub use client::EnrichmentClient;
pub use error::EnrichError;
pub use term::MappedTerm;
