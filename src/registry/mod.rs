use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

mod builtin;

/// One company with every surface form it is known by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyEntry {
    pub aliases: Vec<String>,
    /// Display form reported by extraction. Aliases are title-cased when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

impl CompanyEntry {
    pub fn new(aliases: &[&str], canonical: Option<&str>) -> Self {
        Self {
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            canonical: canonical.map(String::from),
        }
    }

    pub fn display_name(&self, alias: &str) -> String {
        self.canonical
            .clone()
            .unwrap_or_else(|| title_case(alias))
    }
}

/// Raw registry contents, as loaded from JSON. Missing fields take the
/// built-in values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryData {
    pub companies: Vec<CompanyEntry>,
    pub industry_keywords: Vec<String>,
    pub academic_terms: Vec<String>,
    pub medical_institutions: Vec<String>,
    pub academic_email_suffixes: Vec<String>,
    pub industry_domains: Vec<String>,
    pub corporate_suffixes: Vec<String>,
    pub non_profit_terms: Vec<String>,
    pub research_facility_terms: Vec<String>,
    pub geographic_markers: Vec<String>,
}

impl Default for RegistryData {
    fn default() -> Self {
        builtin::data()
    }
}

impl RegistryData {
    /// A registry with every list empty. Useful as a base for fixtures.
    pub fn empty() -> Self {
        Self {
            companies: Vec::new(),
            industry_keywords: Vec::new(),
            academic_terms: Vec::new(),
            medical_institutions: Vec::new(),
            academic_email_suffixes: Vec::new(),
            industry_domains: Vec::new(),
            corporate_suffixes: Vec::new(),
            non_profit_terms: Vec::new(),
            research_facility_terms: Vec::new(),
            geographic_markers: Vec::new(),
        }
    }
}

/// Compiled, read-only knowledge base driving classification and extraction.
///
/// All terms are stored lower-cased. A `Registry` is never mutated after
/// [`Registry::compile`], so a shared reference can be used from any number
/// of threads.
#[derive(Debug)]
pub struct Registry {
    companies: Vec<CompanyEntry>,
    industry_keywords: Vec<String>,
    academic_terms: Vec<String>,
    medical_institutions: Option<Regex>,
    academic_email_suffixes: Vec<String>,
    industry_domains: Vec<String>,
    corporate_structure: Option<Regex>,
    non_profit_terms: Vec<String>,
    research_facility_terms: Vec<String>,
    geographic_markers: Vec<String>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    Registry::compile(RegistryData::default()).expect("built-in registry patterns compile")
});

impl Registry {
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn compile(data: RegistryData) -> Result<Self> {
        let companies: Vec<CompanyEntry> = data
            .companies
            .into_iter()
            .map(|entry| CompanyEntry {
                aliases: lowercase_all(entry.aliases),
                canonical: entry.canonical,
            })
            .filter(|entry| !entry.aliases.is_empty())
            .collect();

        let medical_institutions = word_alternation(&data.medical_institutions)
            .context("Failed to compile medical institution patterns")?;
        let corporate_structure = word_alternation(&data.corporate_suffixes)
            .context("Failed to compile corporate suffix patterns")?;

        let registry = Self {
            companies,
            industry_keywords: lowercase_all(data.industry_keywords),
            academic_terms: lowercase_all(data.academic_terms),
            medical_institutions,
            academic_email_suffixes: lowercase_all(data.academic_email_suffixes),
            industry_domains: lowercase_all(data.industry_domains),
            corporate_structure,
            non_profit_terms: lowercase_all(data.non_profit_terms),
            research_facility_terms: lowercase_all(data.research_facility_terms),
            geographic_markers: data
                .geographic_markers
                .into_iter()
                .map(|m| m.to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        };

        debug!(
            "Compiled registry: {} companies, {} keywords, {} academic terms, {} domains",
            registry.companies.len(),
            registry.industry_keywords.len(),
            registry.academic_terms.len(),
            registry.industry_domains.len()
        );

        Ok(registry)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open registry {}", path.display()))?;
        let data: RegistryData = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse registry {}", path.display()))?;
        Self::compile(data)
    }

    pub fn companies(&self) -> &[CompanyEntry] {
        &self.companies
    }

    pub fn industry_keywords(&self) -> &[String] {
        &self.industry_keywords
    }

    pub fn academic_terms(&self) -> &[String] {
        &self.academic_terms
    }

    pub fn academic_email_suffixes(&self) -> &[String] {
        &self.academic_email_suffixes
    }

    pub fn industry_domains(&self) -> &[String] {
        &self.industry_domains
    }

    pub fn non_profit_terms(&self) -> &[String] {
        &self.non_profit_terms
    }

    pub fn research_facility_terms(&self) -> &[String] {
        &self.research_facility_terms
    }

    pub fn geographic_markers(&self) -> &[String] {
        &self.geographic_markers
    }

    pub fn matches_medical_institution(&self, text: &str) -> bool {
        self.medical_institutions
            .as_ref()
            .is_some_and(|re| re.is_match(text))
    }

    pub fn matches_corporate_structure(&self, text: &str) -> bool {
        self.corporate_structure
            .as_ref()
            .is_some_and(|re| re.is_match(text))
    }
}

fn lowercase_all(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Case-insensitive alternation of escaped terms, anchored on word boundaries.
/// A term ending in punctuation (e.g. "co.") gets no trailing boundary so the
/// punctuation itself is required.
fn word_alternation(terms: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .map(|t| {
            let tail = if t.ends_with(|c: char| c.is_alphanumeric()) {
                r"\b"
            } else {
                ""
            };
            format!(r"\b{}{}", regex::escape(&t), tail)
        })
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = format!("(?i)(?:{})", alternatives.join("|"));
    Ok(Some(Regex::new(&pattern)?))
}

pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
