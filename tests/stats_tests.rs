use industry_scout::{AuthorAggregator, Author, CorpusStatistics, Paper};

fn author(affiliation: Option<&str>, email: Option<&str>) -> Author {
    Author {
        first_name: "Test".to_string(),
        last_name: "Author".to_string(),
        affiliation: affiliation.map(String::from),
        email: email.map(String::from),
        ..Default::default()
    }
}

fn mixed_authors() -> Vec<Author> {
    vec![
        author(Some("Pfizer Inc, New York"), None),
        author(Some("Acme Biotech Inc, Boston"), Some("c@gene.com")),
        author(Some("Widget Corp, Springfield"), None),
        author(Some("Harvard University"), Some("x@harvard.edu")),
    ]
}

fn assert_percentage(value: f64) {
    assert!((0.0..=100.0).contains(&value), "{value} out of range");
}

#[test]
fn test_industry_statistics_empty_input() {
    let stats = CorpusStatistics::default().industry_statistics(&Vec::<Author>::new());

    assert_eq!(stats.total_authors, 0);
    assert_eq!(stats.industry_authors, 0);
    assert_eq!(stats.industry_percentage, 0.0);
    assert_eq!(stats.unique_companies, 0);
    assert!(stats.company_frequencies.is_empty());
    assert_eq!(stats.high_confidence_rate, 0.0);
}

#[test]
fn test_industry_statistics_counts_and_rates() {
    let authors = mixed_authors();
    let stats = CorpusStatistics::default().industry_statistics(&authors);

    assert_eq!(stats.total_authors, 4);
    assert_eq!(stats.industry_authors, 3);
    assert!((stats.industry_percentage - 75.0).abs() < 1e-9);

    // Only Pfizer; Acme's gene.com address sits outside its affiliation
    assert_eq!(stats.high_confidence_detections, 1);
    assert!((stats.high_confidence_rate - 100.0 / 3.0).abs() < 1e-9);

    assert_eq!(
        stats.company_names,
        vec![
            "Acme Biotech".to_string(),
            "Pfizer".to_string(),
            "Widget".to_string()
        ]
    );
    assert_eq!(stats.unique_companies, 3);

    // Academic author's domain is not collected
    assert_eq!(
        stats.email_domains.iter().cloned().collect::<Vec<_>>(),
        vec!["gene.com".to_string()]
    );

    assert_percentage(stats.industry_percentage);
    assert_percentage(stats.high_confidence_rate);
}

#[test]
fn test_company_frequencies_count_authors() {
    let authors = vec![
        author(Some("Pfizer Inc, New York"), None),
        author(Some("Pfizer Inc, Groton"), Some("b@pfizer.com")),
        author(Some("Janssen Pharmaceuticals"), None),
        author(None, None),
    ];
    let stats = CorpusStatistics::default().industry_statistics(&authors);

    assert_eq!(stats.company_frequencies.get("Pfizer"), Some(&2));
    assert_eq!(
        stats.company_frequencies.get("Johnson & Johnson (Janssen)"),
        Some(&1)
    );
    assert!(stats.email_domains.contains("pfizer.com"));
    assert_eq!(stats.high_confidence_detections, 3);
}

#[test]
fn test_high_confidence_ignores_author_email_field() {
    let authors = vec![author(Some("Acme Biotech, Boston"), Some("a@pfizer.com"))];
    let stats = CorpusStatistics::default().industry_statistics(&authors);

    assert_eq!(stats.industry_authors, 1);
    assert_eq!(stats.high_confidence_detections, 0);
    assert_eq!(stats.high_confidence_rate, 0.0);
    // The address still feeds the domain set
    assert!(stats.email_domains.contains("pfizer.com"));
}

#[test]
fn test_high_confidence_counts_email_in_affiliation() {
    let authors = vec![
        author(Some("Acme Biotech, contact j.smith@gene.com"), None),
        author(Some("Acme Biotech, Boston"), None),
    ];
    let stats = CorpusStatistics::default().industry_statistics(&authors);

    assert_eq!(stats.industry_authors, 2);
    assert_eq!(stats.high_confidence_detections, 1);
    assert!((stats.high_confidence_rate - 50.0).abs() < 1e-9);
}

#[test]
fn test_industry_count_matches_aggregator() {
    let authors = mixed_authors();
    let paper = Paper {
        id: "1".to_string(),
        title: "Mixed".to_string(),
        authors: authors.clone(),
        ..Default::default()
    };

    let stats = CorpusStatistics::default().industry_statistics(&paper.authors);
    let aggregator = AuthorAggregator::default();

    assert_eq!(stats.industry_authors, aggregator.industry_authors(&paper).len());
}

#[test]
fn test_statistics_over_many_papers() {
    let papers = vec![
        Paper {
            id: "1".to_string(),
            authors: vec![author(Some("Pfizer Inc, New York"), None)],
            ..Default::default()
        },
        Paper {
            id: "2".to_string(),
            authors: vec![author(Some("Harvard University"), None)],
            ..Default::default()
        },
    ];

    let stats = CorpusStatistics::default()
        .industry_statistics(papers.iter().flat_map(|p| &p.authors));

    assert_eq!(stats.total_authors, 2);
    assert_eq!(stats.industry_authors, 1);
    assert!((stats.industry_percentage - 50.0).abs() < 1e-9);
}

#[test]
fn test_affiliation_pattern_report_buckets() {
    let authors = vec![
        author(Some("Harvard University"), None),
        author(Some("Pfizer Inc, New York"), None),
        author(Some("Acme Pharmaceutical Company, Boston"), None),
        author(Some("Widget Corp, Springfield"), None),
        author(Some("Independent consultant"), None),
        author(None, None),
        author(Some("   "), None),
    ];

    let report = CorpusStatistics::default().affiliation_pattern_report(&authors);

    assert_eq!(report.total_with_affiliation, 5);
    assert_eq!(report.academic, 1);
    assert_eq!(report.industry, 3);
    assert_eq!(report.unclear, 1);
    assert!((report.academic_percentage - 20.0).abs() < 1e-9);
    assert!((report.industry_percentage - 60.0).abs() < 1e-9);
    assert!((report.unclear_percentage - 20.0).abs() < 1e-9);

    assert_eq!(report.detection_methods.len(), 5);
    assert_eq!(report.detection_methods["known_company"], 1);
    assert_eq!(report.detection_methods["keyword"], 1);
    assert_eq!(report.detection_methods["corporate_structure"], 1);
    assert_eq!(report.detection_methods["email_domain"], 0);
    assert_eq!(report.detection_methods["research_facility"], 0);
}

#[test]
fn test_affiliation_pattern_report_empty_input() {
    let report = CorpusStatistics::default().affiliation_pattern_report(&Vec::<Author>::new());

    assert_eq!(report.total_with_affiliation, 0);
    assert_eq!(report.academic_percentage, 0.0);
    assert_eq!(report.industry_percentage, 0.0);
    assert_eq!(report.unclear_percentage, 0.0);
    assert!(report.detection_methods.values().all(|&n| n == 0));
}

#[test]
fn test_statistics_serialize_as_keyed_mappings() {
    let statistics = CorpusStatistics::default();
    let authors = mixed_authors();

    let stats = serde_json::to_value(statistics.industry_statistics(&authors)).unwrap();
    for key in [
        "total_authors",
        "industry_authors",
        "industry_percentage",
        "company_frequencies",
        "email_domains",
        "high_confidence_detections",
    ] {
        assert!(stats.get(key).is_some(), "missing {key}");
    }

    let patterns = serde_json::to_value(statistics.affiliation_pattern_report(&authors)).unwrap();
    assert_eq!(patterns["detection_methods"]["known_company"], 1);
}

#[test]
fn test_statistics_do_not_mutate_input() {
    let authors = mixed_authors();
    let before = authors.clone();
    let statistics = CorpusStatistics::default();

    let first = statistics.industry_statistics(&authors);
    let second = statistics.industry_statistics(&authors);

    assert_eq!(authors, before);
    assert_eq!(first, second);
}
