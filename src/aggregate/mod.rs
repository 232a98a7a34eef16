use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::registry::Registry;
use crate::{percentage, AffiliationClassifier, Author, CompanyNameExtractor, Paper, SearchResultSet};

/// Export row for one industry paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperReport {
    pub id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub industry_authors: Vec<String>,
    pub companies: Vec<String>,
    pub corresponding_email: Option<String>,
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

/// Derives per-paper industry views. Nothing here is cached: every call
/// recomputes from the paper's current author list.
#[derive(Debug, Clone, Copy)]
pub struct AuthorAggregator<'r> {
    extractor: CompanyNameExtractor<'r>,
}

impl Default for AuthorAggregator<'static> {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

impl<'r> AuthorAggregator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            extractor: CompanyNameExtractor::new(registry),
        }
    }

    pub fn classifier(&self) -> &AffiliationClassifier<'r> {
        self.extractor.classifier()
    }

    pub fn extractor(&self) -> &CompanyNameExtractor<'r> {
        &self.extractor
    }

    /// Industry-affiliated authors, in the paper's author order.
    pub fn industry_authors<'p>(&self, paper: &'p Paper) -> Vec<&'p Author> {
        paper
            .authors
            .iter()
            .filter(|author| {
                self.classifier()
                    .is_industry_opt(author.affiliation.as_deref())
            })
            .collect()
    }

    pub fn has_industry_collaboration(&self, paper: &Paper) -> bool {
        paper
            .authors
            .iter()
            .any(|author| {
                self.classifier()
                    .is_industry_opt(author.affiliation.as_deref())
            })
    }

    /// Company names across all industry authors of the paper, sorted.
    pub fn industry_companies(&self, paper: &Paper) -> BTreeSet<String> {
        paper
            .authors
            .iter()
            .flat_map(|author| self.extractor.extract_opt(author.affiliation.as_deref()))
            .collect()
    }

    pub fn industry_papers<'s>(&self, results: &'s SearchResultSet) -> Vec<&'s Paper> {
        results
            .papers
            .iter()
            .filter(|paper| self.has_industry_collaboration(paper))
            .collect()
    }

    /// Share of papers with at least one industry author, as a percentage.
    pub fn success_rate(&self, results: &SearchResultSet) -> f64 {
        percentage(self.industry_papers(results).len(), results.papers.len())
    }

    pub fn summary(&self, results: &SearchResultSet) -> String {
        format!(
            "Research summary:\n  Total papers analyzed: {}\n  Papers with industry affiliations: {}\n  Success rate: {:.1}%",
            results.papers.len(),
            self.industry_papers(results).len(),
            self.success_rate(results)
        )
    }

    /// Export row for the paper, or `None` if it has no industry authors.
    /// `detailed` adds abstract, journal and DOI.
    pub fn report(&self, paper: &Paper, detailed: bool) -> Option<PaperReport> {
        let authors = self.industry_authors(paper);
        if authors.is_empty() {
            return None;
        }

        Some(PaperReport {
            id: paper.id.clone(),
            title: paper.title.clone(),
            date: paper.date,
            industry_authors: authors.iter().map(|a| a.display_name()).collect(),
            companies: self.industry_companies(paper).into_iter().collect(),
            corresponding_email: paper.corresponding_email().map(String::from),
            abstract_text: paper.abstract_text.clone().filter(|_| detailed),
            journal: paper.journal.clone().filter(|_| detailed),
            doi: paper.doi.clone().filter(|_| detailed),
        })
    }
}
