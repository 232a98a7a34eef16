//! Individual classification predicates.
//!
//! Every predicate takes text already normalized by
//! [`normalize`](super::normalize): lower-cased and trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::Registry;

/// How far past a multi-word company match a geographic marker may start
/// and still mark the match as a place name, in characters.
pub const PLACE_MARKER_WINDOW: usize = 20;

static EMAIL_DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([a-z0-9-]+(?:\.[a-z0-9-]+)+)").unwrap());

/// All `@domain` parts found in the text, lower-cased, in order of appearance.
pub fn email_domains(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    EMAIL_DOMAIN_RE
        .captures_iter(&lowered)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn is_academic(registry: &Registry, text: &str) -> bool {
    registry
        .academic_terms()
        .iter()
        .any(|term| text.contains(term.as_str()))
        || email_domains(text)
            .iter()
            .any(|domain| is_academic_domain(registry, domain))
        || registry.matches_medical_institution(text)
}

/// Suffixes ending in a dot (".ac.") may appear anywhere in the domain;
/// others (".edu") must end it or be followed by a country label.
pub fn is_academic_domain(registry: &Registry, domain: &str) -> bool {
    registry.academic_email_suffixes().iter().any(|suffix| {
        if suffix.ends_with('.') {
            domain.contains(suffix.as_str())
        } else {
            domain.ends_with(suffix.as_str()) || domain.contains(&format!("{suffix}."))
        }
    })
}

pub fn is_industry_domain(registry: &Registry, domain: &str) -> bool {
    registry.industry_domains().iter().any(|known| {
        domain == known
            || domain
                .strip_suffix(known.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

pub fn known_company(registry: &Registry, text: &str) -> bool {
    registry.companies().iter().any(|company| {
        company
            .aliases
            .iter()
            .any(|alias| guarded_alias_match(registry, text, alias))
    })
}

pub fn email_domain(registry: &Registry, text: &str) -> bool {
    email_domains(text)
        .iter()
        .any(|domain| is_industry_domain(registry, domain))
}

pub fn keyword(registry: &Registry, text: &str) -> bool {
    registry
        .industry_keywords()
        .iter()
        .any(|kw| text.contains(kw.as_str()))
}

/// Non-profit terms veto this rule even though they are not academic.
pub fn corporate_structure(registry: &Registry, text: &str) -> bool {
    registry.matches_corporate_structure(text)
        && !registry
            .non_profit_terms()
            .iter()
            .any(|term| text.contains(term.as_str()))
}

pub fn research_facility(registry: &Registry, text: &str) -> bool {
    registry
        .research_facility_terms()
        .iter()
        .any(|term| text.contains(term.as_str()))
        && !is_academic(registry, text)
}

pub fn is_single_token(alias: &str) -> bool {
    !alias.contains(char::is_whitespace)
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Byte offset of the first appearance of `alias`. Single-token aliases must
/// sit on word boundaries; multi-token aliases match as plain substrings.
pub fn find_alias(text: &str, alias: &str) -> Option<usize> {
    if alias.is_empty() {
        return None;
    }
    if is_single_token(alias) {
        text.match_indices(alias)
            .map(|(start, _)| start)
            .find(|&start| is_word_bounded(text, start, start + alias.len()))
    } else {
        text.find(alias)
    }
}

fn followed_by_place_marker(registry: &Registry, text: &str, end: usize) -> bool {
    let rest = &text[end..];
    registry.geographic_markers().iter().any(|marker| {
        rest.find(marker.as_str())
            .is_some_and(|pos| rest[..pos].chars().count() <= PLACE_MARKER_WINDOW)
    })
}

/// Alias match as used by the known-company rule: a multi-token occurrence
/// followed closely by a geographic marker is read as a place name and
/// skipped.
pub fn guarded_alias_match(registry: &Registry, text: &str, alias: &str) -> bool {
    if alias.is_empty() {
        return false;
    }
    if is_single_token(alias) {
        return find_alias(text, alias).is_some();
    }
    text.match_indices(alias)
        .any(|(start, _)| !followed_by_place_marker(registry, text, start + alias.len()))
}
