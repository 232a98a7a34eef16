use super::{CompanyEntry, RegistryData};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn data() -> RegistryData {
    RegistryData {
        companies: companies(),
        industry_keywords: strings(&[
            "pharmaceutical",
            "pharmaceuticals",
            "pharma",
            "biotech",
            "biotechnology",
            "biopharmaceutical",
            "biopharma",
            "therapeutics",
            "medicines",
            "life sciences",
            "biosciences",
            "clinical research",
            "clinical trials",
            "drug discovery",
            "drug development",
            "immunotherapy",
            "vaccine",
            "vaccines",
            "medical devices",
            "diagnostics",
        ]),
        academic_terms: strings(&[
            "universit",
            "college",
            "institut",
            "school",
            "department",
            "faculty",
            "hospital",
            "medical center",
            "medical centre",
            "cancer center",
            "cancer centre",
            "academy of sciences",
            "academia",
            "national institutes of health",
            "centers for disease control",
            "food and drug administration",
            "ministry of health",
            "public health agency",
            "national research council",
            "hochschule",
            "hôpital",
            "ospedale",
            "klinikum",
        ]),
        medical_institutions: strings(&[
            "mayo clinic",
            "cleveland clinic",
            "johns hopkins",
            "memorial sloan kettering",
            "md anderson",
            "dana-farber",
            "massachusetts general",
            "kaiser permanente",
            "karolinska",
            "max planck",
            "fraunhofer",
            "nih",
            "cdc",
            "fda",
            "nhs",
            "inserm",
            "cnrs",
            "csiro",
        ]),
        academic_email_suffixes: strings(&[".edu", ".gov", ".ac."]),
        industry_domains: strings(&[
            "pfizer.com",
            "novartis.com",
            "roche.com",
            "gene.com",
            "merck.com",
            "msd.com",
            "abbott.com",
            "bms.com",
            "jnj.com",
            "its.jnj.com",
            "gsk.com",
            "sanofi.com",
            "astrazeneca.com",
            "lilly.com",
            "amgen.com",
            "gilead.com",
            "biogen.com",
            "abbvie.com",
            "takeda.com",
            "bayer.com",
            "boehringer-ingelheim.com",
            "regeneron.com",
            "vrtx.com",
            "modernatx.com",
            "biontech.de",
            "novonordisk.com",
        ]),
        corporate_suffixes: strings(&[
            "inc",
            "corp",
            "ltd",
            "llc",
            "plc",
            "gmbh",
            "co.",
            "company",
            "corporation",
            "limited",
            "holdings",
            "therapeutics",
            "pharmaceuticals",
        ]),
        non_profit_terms: strings(&["foundation", "trust", "society", "consortium", "alliance"]),
        research_facility_terms: strings(&[
            "research and development",
            "research & development",
            "r&d",
            "discovery research",
            "discovery sciences",
            "translational research",
            "translational medicine",
            "research laboratories",
            "global research",
            "early development",
        ]),
        geographic_markers: vec![
            ", ".to_string(),
            " street".to_string(),
            " avenue".to_string(),
            " road".to_string(),
            " drive".to_string(),
            " blvd".to_string(),
        ],
    }
}

fn companies() -> Vec<CompanyEntry> {
    vec![
        CompanyEntry::new(&["pfizer"], None),
        CompanyEntry::new(&["novartis"], None),
        CompanyEntry::new(&["roche", "hoffmann-la roche"], Some("Roche")),
        CompanyEntry::new(&["genentech"], None),
        CompanyEntry::new(&["merck"], None),
        CompanyEntry::new(&["abbott"], None),
        CompanyEntry::new(
            &["bristol myers squibb", "bristol-myers squibb"],
            Some("Bristol Myers Squibb"),
        ),
        CompanyEntry::new(
            &["johnson & johnson", "johnson and johnson", "j&j", "j & j"],
            Some("Johnson & Johnson"),
        ),
        CompanyEntry::new(&["janssen"], Some("Johnson & Johnson (Janssen)")),
        CompanyEntry::new(&["glaxosmithkline", "gsk"], Some("GlaxoSmithKline")),
        CompanyEntry::new(&["sanofi"], None),
        CompanyEntry::new(&["astrazeneca"], Some("AstraZeneca")),
        CompanyEntry::new(&["eli lilly"], Some("Eli Lilly")),
        CompanyEntry::new(&["amgen"], None),
        CompanyEntry::new(&["gilead"], None),
        CompanyEntry::new(&["biogen"], None),
        CompanyEntry::new(&["abbvie"], Some("AbbVie")),
        CompanyEntry::new(&["takeda"], None),
        CompanyEntry::new(&["bayer"], None),
        CompanyEntry::new(&["boehringer ingelheim"], Some("Boehringer Ingelheim")),
        CompanyEntry::new(&["regeneron"], None),
        CompanyEntry::new(&["vertex pharmaceuticals"], Some("Vertex Pharmaceuticals")),
        CompanyEntry::new(&["moderna"], None),
        CompanyEntry::new(&["biontech"], Some("BioNTech")),
        CompanyEntry::new(&["immunomedics"], None),
        CompanyEntry::new(&["celgene"], None),
        CompanyEntry::new(&["allergan"], None),
        CompanyEntry::new(&["mylan"], None),
        CompanyEntry::new(&["novo nordisk"], Some("Novo Nordisk")),
        CompanyEntry::new(&["daiichi sankyo"], Some("Daiichi Sankyo")),
        CompanyEntry::new(&["astellas"], None),
    ]
}
