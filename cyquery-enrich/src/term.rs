use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::warn;

/// Completed payload from the integrated search service.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub sources: Option<Vec<SearchSource>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSource {
    pub results: Option<Vec<SearchHit>>,
}

/// One candidate network returned by a source.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub description: String,
    pub details: HitDetails,
    pub url: String,
    pub nodes: u64,
    #[serde(rename = "hitGenes")]
    pub hit_genes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HitDetails {
    /// Carried as a raw number so integer p-values survive verbatim.
    #[serde(rename = "PValue")]
    pub p_value: Number,
    pub similarity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskStatus {
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitReply {
    pub id: String,
}

/// Normalized output record for the single best-matching term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedTerm {
    pub name: String,
    pub source: String,
    pub p_value: Number,
    pub description: String,
    pub term_size: u64,
    pub intersections: Vec<String>,
}

/// Picks the best hit by cosine similarity. The service sorts by
/// pvalue, but that does not surface the best network, so similarity
/// is the ranking criterion here. Ties keep the earliest-seen hit.
pub fn best_hit(response: &SearchResponse) -> Option<&SearchHit> {
    let mut best: Option<&SearchHit> = None;
    for source in response.sources.iter().flatten() {
        for hit in source.results.iter().flatten() {
            let replace = match best {
                None => true,
                Some(current) => hit.details.similarity > current.details.similarity,
            };
            if replace {
                best = Some(hit);
            }
        }
    }
    best
}

/// Splits a hit description on the first colon into (source, name).
/// No colon means the source is unknown and reported as "NA".
pub fn split_description(description: &str) -> (String, String) {
    match description.split_once(':') {
        Some((source, name)) => (source.trim().to_string(), name.trim_start().to_string()),
        None => ("NA".to_string(), description.to_string()),
    }
}

/// Maps a completed search response to a [`MappedTerm`], validating the
/// payload structure field by field. Any structural violation is logged
/// and yields `None`.
pub fn map_term(response: &SearchResponse) -> Option<MappedTerm> {
    let sources = match &response.sources {
        Some(sources) => sources,
        None => {
            warn!("No sources found in results");
            return None;
        }
    };

    let first_source = match sources.first() {
        Some(source) => source,
        None => {
            warn!("Source is empty");
            return None;
        }
    };

    let results = match &first_source.results {
        Some(results) => results,
        None => {
            warn!("Results not in source");
            return None;
        }
    };

    if results.is_empty() {
        warn!("No result found");
        return None;
    }

    let hit = best_hit(response)?;
    let (source, name) = split_description(&hit.description);

    Some(MappedTerm {
        name,
        source,
        p_value: hit.details.p_value.clone(),
        description: hit.url.clone(),
        term_size: hit.nodes,
        intersections: hit.hit_genes.clone(),
    })
}
