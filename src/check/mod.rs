use anyhow::Result;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::analyze::load_registry;
use crate::{AffiliationRecord, CompanyNameExtractor};

#[derive(Args)]
pub struct CheckArgs {
    /// Affiliation strings to classify (reads stdin lines when none given)
    pub affiliations: Vec<String>,

    /// JSON registry replacing the built-in company and keyword lists
    #[arg(short, long)]
    pub registry: Option<PathBuf>,
}

/// Classifies each affiliation, writing one JSON record per line.
pub fn classify_all<W: Write>(
    extractor: &CompanyNameExtractor<'_>,
    affiliations: impl IntoIterator<Item = String>,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0;
    for affiliation in affiliations {
        let record = AffiliationRecord::build(extractor, &affiliation);
        debug!(
            "{} -> {} ({})",
            affiliation, record.is_industry, record.matched_rule
        );
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

pub fn run(args: CheckArgs) -> Result<()> {
    crate::init_tracing();

    let registry = load_registry(args.registry.as_deref())?;
    let extractor = CompanyNameExtractor::new(&registry);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.affiliations.is_empty() {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()?;
        classify_all(
            &extractor,
            lines.into_iter().filter(|l| !l.trim().is_empty()),
            &mut out,
        )?;
    } else {
        classify_all(&extractor, args.affiliations, &mut out)?;
    }

    Ok(())
}
