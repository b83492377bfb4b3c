use anyhow::{Context, Result};
use cyquery_enrich::term::{MappedTerm, map_term};
use cyquery_enrich::{EnrichError, EnrichmentClient};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load the comma-delimited gene list from a file
pub fn read_gene_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read gene file {}", path.display()))?;
    Ok(parse_gene_list(&content))
}

/// Parse file content into a gene list, dropping any run of whitespace
/// and stray commas around the content. Genes are passed through as-is.
pub fn parse_gene_list(content: &str) -> Vec<String> {
    let trimmed = content.trim_matches(|c: char| c.is_whitespace() || c == ',');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(',').map(|gene| gene.to_string()).collect()
}

/// Runs the full query: read genes, submit, poll, fetch, map.
///
/// `Ok(None)` is the graceful no-result outcome: empty input, a rejected
/// submission, a failed or timed-out task, or a structurally invalid
/// payload. Transport errors and undecodable payloads propagate as `Err`.
pub async fn run_query(input: &Path, client: &EnrichmentClient) -> Result<Option<MappedTerm>> {
    let genes = read_gene_file(input)?;
    if genes.is_empty() {
        warn!("No genes found in input");
        return Ok(None);
    }

    info!("Submitting {} genes for enrichment", genes.len());
    let task_id = match client.submit(&genes).await {
        Ok(id) => id,
        Err(EnrichError::UnexpectedStatus { status, body }) => {
            warn!("Got error status from service: {} : {}", status, body);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    if !client.wait_for_completion(&task_id).await? {
        return Ok(None);
    }

    let response = match client.fetch_result(&task_id).await {
        Ok(response) => response,
        Err(EnrichError::UnexpectedStatus { status, .. }) => {
            warn!("Received http error: {}", status);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    Ok(map_term(&response))
}
