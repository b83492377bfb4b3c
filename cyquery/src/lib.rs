// Include the orchestration module directly from query.rs
#[path = "query.rs"]
pub mod query;

// Re-export the functions the binary and integration tests share
pub use query::{parse_gene_list, read_gene_file, run_query};
