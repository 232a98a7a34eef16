use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHETICAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*(?:\)|$)").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// State codes only count when written in capitals, so "Co" or "Bio" survive
static LOCALITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s,]+(?:(?i:u\.s\.a\.?|usa|us|uk|eu)|[A-Z]{2})\.?\s*$").unwrap()
});

static CORPORATE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[\s,]+(?:inc|incorporated|corp|corporation|ltd|limited|llc|plc|gmbh|co|company)\.?\s*$",
    )
    .unwrap()
});

fn strip_trailing(re: &Regex, text: &str) -> Option<String> {
    let stripped = re.replace(text, "");
    let stripped = stripped.trim();
    if stripped.is_empty() || stripped.len() == text.len() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Turns one affiliation segment into a bare company name: drops
/// parenthetical content, trailing country/state codes and trailing
/// corporate suffixes until nothing more comes off. `None` if the segment
/// is empty once cleaned.
pub fn clean_company_segment(segment: &str) -> Option<String> {
    let without_parens = PARENTHETICAL_RE.replace_all(segment, " ");
    let mut name = WHITESPACE_RE
        .replace_all(&without_parens, " ")
        .trim()
        .to_string();

    loop {
        if let Some(stripped) = strip_trailing(&LOCALITY_RE, &name) {
            name = stripped;
            continue;
        }
        if let Some(stripped) = strip_trailing(&CORPORATE_SUFFIX_RE, &name) {
            name = stripped;
            continue;
        }
        break;
    }

    let name = name.trim_end_matches([',', ';', '.', '-', ' ']).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
