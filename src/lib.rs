use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

pub mod aggregate;
pub mod analyze;
pub mod check;
pub mod classify;
pub mod extract;
pub mod registry;
pub mod stats;

pub use aggregate::{AuthorAggregator, PaperReport};
pub use classify::{AffiliationClassifier, Classification, MatchedRule};
pub use extract::CompanyNameExtractor;
pub use registry::{CompanyEntry, Registry, RegistryData};
pub use stats::{AffiliationPatternReport, CorpusStatistics, IndustryStatistics};

pub fn hash_affiliation(affiliation: &str) -> String {
    format!("{:016x}", xxh3_64(affiliation.as_bytes()))
}

pub(crate) fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("industry_scout=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Percentage of `part` in `whole`, 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_corresponding: bool,
}

impl Author {
    /// "Last Initials" when initials are known, otherwise "First Last".
    pub fn display_name(&self) -> String {
        match self.initials.as_deref().filter(|i| !i.is_empty()) {
            Some(initials) => format!("{} {}", self.last_name, initials),
            None => format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(
        default,
        rename = "abstract",
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

impl Paper {
    /// Email of the first corresponding author that has one.
    pub fn corresponding_email(&self) -> Option<&str> {
        self.authors
            .iter()
            .filter(|a| a.is_corresponding)
            .find_map(|a| a.email.as_deref().filter(|e| !e.is_empty()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultSet {
    pub papers: Vec<Paper>,
    pub total_found: usize,
    pub query: String,
}

/// Classification outcome for one unique affiliation string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffiliationRecord {
    pub affiliation: String,
    pub affiliation_hash: String,
    pub is_industry: bool,
    pub matched_rule: MatchedRule,
    pub academic: bool,
    pub companies: Vec<String>,
}

impl AffiliationRecord {
    pub fn build(extractor: &CompanyNameExtractor<'_>, affiliation: &str) -> Self {
        let classification = extractor.classifier().classify(affiliation);
        Self {
            affiliation: affiliation.to_string(),
            affiliation_hash: hash_affiliation(affiliation),
            is_industry: classification.is_industry,
            matched_rule: classification.matched_rule,
            academic: classification.academic,
            companies: extractor.extract(affiliation),
        }
    }
}
