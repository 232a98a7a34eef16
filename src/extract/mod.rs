use crate::classify::{normalize, rules, AffiliationClassifier};
use crate::registry::Registry;

mod clean;
pub use clean::clean_company_segment;

/// Pulls normalized company names out of industry affiliations.
#[derive(Debug, Clone, Copy)]
pub struct CompanyNameExtractor<'r> {
    classifier: AffiliationClassifier<'r>,
}

impl Default for CompanyNameExtractor<'static> {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

impl<'r> CompanyNameExtractor<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            classifier: AffiliationClassifier::new(registry),
        }
    }

    pub fn classifier(&self) -> &AffiliationClassifier<'r> {
        &self.classifier
    }

    /// Company names in order of first appearance, without duplicates.
    /// Empty whenever the affiliation does not classify as industry.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if !self.classifier.is_industry(text) {
            return Vec::new();
        }

        let known = self.known_companies(text);
        if !known.is_empty() {
            return known;
        }

        if let Some(name) = self.keyword_segment(text) {
            return vec![name];
        }

        if self.classifier.is_corporate_structure(text) {
            if let Some(name) = first_segment(text)
                .and_then(clean_company_segment)
                .filter(|name| !self.classifier.is_academic(name))
            {
                return vec![name];
            }
        }

        Vec::new()
    }

    pub fn extract_opt(&self, text: Option<&str>) -> Vec<String> {
        text.map(|t| self.extract(t)).unwrap_or_default()
    }

    /// Registry companies named in the text, mapped to their display form.
    fn known_companies(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        let mut hits: Vec<(usize, String)> = Vec::new();

        for company in self.classifier.registry().companies() {
            for alias in &company.aliases {
                if let Some(pos) = rules::find_alias(&normalized, alias) {
                    hits.push((pos, company.display_name(alias)));
                }
            }
        }

        // Stable sort keeps registry order for names starting at the same offset
        hits.sort_by_key(|(pos, _)| *pos);

        let mut names: Vec<String> = Vec::with_capacity(hits.len());
        for (_, name) in hits {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// First comma/semicolon segment carrying an industry keyword that is not
    /// itself academic, cleaned of locality and corporate suffixes.
    fn keyword_segment(&self, text: &str) -> Option<String> {
        let registry = self.classifier.registry();
        let segment = text.split([',', ';']).find(|segment| {
            let normalized = normalize(segment);
            rules::keyword(registry, &normalized) && !rules::is_academic(registry, &normalized)
        })?;

        clean_company_segment(segment).filter(|name| !self.classifier.is_academic(name))
    }
}

fn first_segment(text: &str) -> Option<&str> {
    text.split([',', ';']).map(str::trim).find(|s| !s.is_empty())
}
