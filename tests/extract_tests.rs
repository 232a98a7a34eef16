use industry_scout::extract::clean_company_segment;
use industry_scout::{AffiliationClassifier, CompanyNameExtractor};

fn extractor() -> CompanyNameExtractor<'static> {
    CompanyNameExtractor::default()
}

#[test]
fn test_extract_known_company() {
    let names = extractor().extract("Pfizer Inc, New York");
    assert_eq!(names, vec!["Pfizer".to_string()]);
}

#[test]
fn test_extract_maps_alias_to_canonical_name() {
    let names = extractor().extract("Janssen Pharmaceuticals");
    assert!(names.contains(&"Johnson & Johnson (Janssen)".to_string()));

    let names = extractor().extract("J&J Innovative Medicine, Beerse");
    assert_eq!(names, vec!["Johnson & Johnson".to_string()]);
}

#[test]
fn test_extract_orders_by_appearance_and_deduplicates() {
    let names = extractor().extract("Genentech, a member of the Roche Group, South San Francisco");
    assert_eq!(names, vec!["Genentech".to_string(), "Roche".to_string()]);

    // Two aliases of the same company collapse into one name
    let names = extractor().extract("GSK Vaccines, GlaxoSmithKline Biologicals");
    assert_eq!(names, vec!["GlaxoSmithKline".to_string()]);
}

#[test]
fn test_extract_keyword_segment_without_known_company() {
    let names = extractor().extract("Acme Pharmaceutical Company, Boston");
    assert_eq!(names, vec!["Acme Pharmaceutical".to_string()]);
    assert!(names.iter().all(|n| !n.contains("Boston")));
}

#[test]
fn test_extract_picks_first_segment_with_keyword() {
    let names = extractor().extract("Research Division, NovaGen Therapeutics LLC, Boston, MA");
    assert_eq!(names, vec!["NovaGen Therapeutics".to_string()]);
}

#[test]
fn test_extract_strips_parenthetical_and_suffixes() {
    let names =
        extractor().extract("Acme Biotech (a subsidiary of Foo) Inc., Cambridge, MA, USA");
    assert_eq!(names, vec!["Acme Biotech".to_string()]);
}

#[test]
fn test_extract_falls_back_to_corporate_structure() {
    let names = extractor().extract("Widget Corp, Springfield");
    assert_eq!(names, vec!["Widget".to_string()]);
}

#[test]
fn test_extract_returns_empty_for_non_industry() {
    let e = extractor();
    assert!(e.extract("Department of Pharmaceutical Sciences, Harvard University").is_empty());
    assert!(e.extract("Pfizer Professor of Medicine, Harvard University").is_empty());
    assert!(e.extract("").is_empty());
    assert!(e.extract_opt(None).is_empty());
}

#[test]
fn test_extract_email_only_detection_yields_no_name() {
    let e = extractor();
    assert!(e.classifier().is_industry("Contact: j.smith@gene.com"));
    assert!(e.extract("Contact: j.smith@gene.com").is_empty());
}

#[test]
fn test_extracted_names_are_never_academic_and_come_from_source() {
    let e = extractor();
    let classifier = AffiliationClassifier::default();

    for text in [
        "Acme Pharmaceutical Company, Boston",
        "Research Division, NovaGen Therapeutics LLC, Boston, MA",
        "Widget Corp, Springfield",
        "BioTech Solutions Inc",
    ] {
        for name in e.extract(text) {
            assert!(!classifier.is_academic(&name), "{name} looks academic");
            assert!(text.contains(&name), "{name} not found in {text}");
        }
    }
}

#[test]
fn test_clean_company_segment() {
    assert_eq!(
        clean_company_segment("Foo Pharma Co., Ltd."),
        Some("Foo Pharma".to_string())
    );
    assert_eq!(
        clean_company_segment("Boston Scientific Corporation, MA"),
        Some("Boston Scientific".to_string())
    );
    assert_eq!(
        clean_company_segment("  Acme   Labs US "),
        Some("Acme Labs".to_string())
    );
    assert_eq!(clean_company_segment("   "), None);
    assert_eq!(clean_company_segment("(Inc)"), None);
}

#[test]
fn test_clean_keeps_lowercase_two_letter_words() {
    // Only capitalised two-letter tokens are read as state codes
    assert_eq!(
        clean_company_segment("Pharma of Oz"),
        Some("Pharma of Oz".to_string())
    );
}
