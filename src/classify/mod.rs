use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::registry::Registry;

pub mod rules;

/// Which rule decided an affiliation was industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedRule {
    KnownCompany,
    EmailDomain,
    Keyword,
    CorporateStructure,
    ResearchFacility,
    None,
}

impl MatchedRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchedRule::KnownCompany => "known_company",
            MatchedRule::EmailDomain => "email_domain",
            MatchedRule::Keyword => "keyword",
            MatchedRule::CorporateStructure => "corporate_structure",
            MatchedRule::ResearchFacility => "research_facility",
            MatchedRule::None => "none",
        }
    }
}

impl fmt::Display for MatchedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_industry: bool,
    pub matched_rule: MatchedRule,
    /// Set when the academic veto fired. Always implies `!is_industry`.
    pub academic: bool,
}

impl Classification {
    fn industry(rule: MatchedRule) -> Self {
        Self {
            is_industry: true,
            matched_rule: rule,
            academic: false,
        }
    }

    fn academic() -> Self {
        Self {
            is_industry: false,
            matched_rule: MatchedRule::None,
            academic: true,
        }
    }

    fn unmatched() -> Self {
        Self {
            is_industry: false,
            matched_rule: MatchedRule::None,
            academic: false,
        }
    }
}

struct Rule {
    tag: MatchedRule,
    test: fn(&Registry, &str) -> bool,
}

/// Industry rules in precedence order. The academic veto runs before all of them.
const RULES: &[Rule] = &[
    Rule {
        tag: MatchedRule::KnownCompany,
        test: rules::known_company,
    },
    Rule {
        tag: MatchedRule::EmailDomain,
        test: rules::email_domain,
    },
    Rule {
        tag: MatchedRule::Keyword,
        test: rules::keyword,
    },
    Rule {
        tag: MatchedRule::CorporateStructure,
        test: rules::corporate_structure,
    },
    Rule {
        tag: MatchedRule::ResearchFacility,
        test: rules::research_facility,
    },
];

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Decides industry versus academic/non-profit for one affiliation string.
///
/// Never fails: input it cannot make sense of classifies as not industry.
#[derive(Debug, Clone, Copy)]
pub struct AffiliationClassifier<'r> {
    registry: &'r Registry,
}

impl Default for AffiliationClassifier<'static> {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

impl<'r> AffiliationClassifier<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn classify(&self, text: &str) -> Classification {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Classification::unmatched();
        }

        if rules::is_academic(self.registry, &normalized) {
            trace!("Academic veto: {:?}", text);
            return Classification::academic();
        }

        match RULES
            .iter()
            .find(|rule| (rule.test)(self.registry, &normalized))
        {
            Some(rule) => {
                trace!("Industry via {}: {:?}", rule.tag, text);
                Classification::industry(rule.tag)
            }
            None => Classification::unmatched(),
        }
    }

    pub fn is_industry(&self, text: &str) -> bool {
        self.classify(text).is_industry
    }

    pub fn is_industry_opt(&self, text: Option<&str>) -> bool {
        text.is_some_and(|t| self.is_industry(t))
    }

    pub fn is_academic(&self, text: &str) -> bool {
        let normalized = normalize(text);
        !normalized.is_empty() && rules::is_academic(self.registry, &normalized)
    }

    /// First industry rule that fires, ignoring the academic veto.
    pub fn first_industry_rule(&self, text: &str) -> MatchedRule {
        let normalized = normalize(text);
        RULES
            .iter()
            .find(|rule| (rule.test)(self.registry, &normalized))
            .map_or(MatchedRule::None, |rule| rule.tag)
    }

    pub fn has_known_company(&self, text: &str) -> bool {
        rules::known_company(self.registry, &normalize(text))
    }

    pub fn has_industry_email(&self, text: &str) -> bool {
        rules::email_domain(self.registry, &normalize(text))
    }

    pub fn is_corporate_structure(&self, text: &str) -> bool {
        rules::corporate_structure(self.registry, &normalize(text))
    }
}
