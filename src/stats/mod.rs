use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::classify::rules::email_domains;
use crate::classify::MatchedRule;
use crate::registry::Registry;
use crate::{percentage, AffiliationClassifier, Author, CompanyNameExtractor};

const DETECTION_METHODS: [MatchedRule; 5] = [
    MatchedRule::KnownCompany,
    MatchedRule::Keyword,
    MatchedRule::CorporateStructure,
    MatchedRule::EmailDomain,
    MatchedRule::ResearchFacility,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryStatistics {
    pub total_authors: usize,
    pub industry_authors: usize,
    pub industry_percentage: f64,
    pub unique_companies: usize,
    pub company_names: Vec<String>,
    pub company_frequencies: BTreeMap<String, usize>,
    pub email_domains: BTreeSet<String>,
    /// Industry authors whose affiliation passes the known-company or
    /// email-domain check.
    pub high_confidence_detections: usize,
    /// `high_confidence_detections` as a percentage of `industry_authors`.
    pub high_confidence_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliationPatternReport {
    pub total_with_affiliation: usize,
    pub academic: usize,
    pub industry: usize,
    pub unclear: usize,
    pub academic_percentage: f64,
    pub industry_percentage: f64,
    pub unclear_percentage: f64,
    pub detection_methods: BTreeMap<String, usize>,
}

/// Corpus-wide views over many authors. Read-only: inputs are never
/// modified and results depend only on the registry and the authors given.
#[derive(Debug, Clone, Copy)]
pub struct CorpusStatistics<'r> {
    extractor: CompanyNameExtractor<'r>,
}

impl Default for CorpusStatistics<'static> {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

impl<'r> CorpusStatistics<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            extractor: CompanyNameExtractor::new(registry),
        }
    }

    fn classifier(&self) -> &AffiliationClassifier<'r> {
        self.extractor.classifier()
    }

    /// Judged on the affiliation text alone, the same input the classifier
    /// saw. The author's separate email field plays no part.
    fn is_high_confidence(&self, author: &Author) -> bool {
        let classifier = self.classifier();
        author
            .affiliation
            .as_deref()
            .is_some_and(|aff| classifier.has_known_company(aff) || classifier.has_industry_email(aff))
    }

    pub fn industry_statistics<'a, I>(&self, authors: I) -> IndustryStatistics
    where
        I: IntoIterator<Item = &'a Author>,
    {
        let mut total_authors = 0;
        let mut industry_authors = 0;
        let mut high_confidence = 0;
        let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
        let mut domains: BTreeSet<String> = BTreeSet::new();

        for author in authors {
            total_authors += 1;

            let affiliation = author.affiliation.as_deref();
            if !self.classifier().is_industry_opt(affiliation) {
                continue;
            }
            industry_authors += 1;

            for company in self.extractor.extract_opt(affiliation) {
                *frequencies.entry(company).or_insert(0) += 1;
            }

            domains.extend(affiliation.map(email_domains).unwrap_or_default());
            domains.extend(author.email.as_deref().map(email_domains).unwrap_or_default());

            if self.is_high_confidence(author) {
                high_confidence += 1;
            }
        }

        let company_names: Vec<String> = frequencies.keys().cloned().collect();

        IndustryStatistics {
            total_authors,
            industry_authors,
            industry_percentage: percentage(industry_authors, total_authors),
            unique_companies: company_names.len(),
            company_names,
            company_frequencies: frequencies,
            email_domains: domains,
            high_confidence_detections: high_confidence,
            high_confidence_rate: percentage(high_confidence, industry_authors),
        }
    }

    /// Buckets every author with a non-blank affiliation as academic,
    /// industry or unclear, tallying the deciding rule for industry ones.
    pub fn affiliation_pattern_report<'a, I>(&self, authors: I) -> AffiliationPatternReport
    where
        I: IntoIterator<Item = &'a Author>,
    {
        let mut total = 0;
        let mut academic = 0;
        let mut industry = 0;
        let mut unclear = 0;
        let mut methods: BTreeMap<String, usize> = DETECTION_METHODS
            .iter()
            .map(|rule| (rule.as_str().to_string(), 0))
            .collect();

        let affiliations = authors
            .into_iter()
            .filter_map(|author| author.affiliation.as_deref())
            .filter(|aff| !aff.trim().is_empty());

        for affiliation in affiliations {
            total += 1;
            let classification = self.classifier().classify(affiliation);

            if classification.academic {
                academic += 1;
            } else if classification.is_industry {
                industry += 1;
                *methods
                    .entry(classification.matched_rule.as_str().to_string())
                    .or_insert(0) += 1;
            } else {
                unclear += 1;
            }
        }

        AffiliationPatternReport {
            total_with_affiliation: total,
            academic,
            industry,
            unclear,
            academic_percentage: percentage(academic, total),
            industry_percentage: percentage(industry, total),
            unclear_percentage: percentage(unclear, total),
            detection_methods: methods,
        }
    }
}
