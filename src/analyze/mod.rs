use anyhow::{Context, Result};
use clap::Args;
use crossbeam_channel::bounded;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info};

use crate::registry::Registry;
use crate::{AffiliationRecord, AuthorAggregator, CorpusStatistics, Paper, PaperReport, SearchResultSet};

mod input;
pub use input::{find_paper_files, read_papers};

pub const INDUSTRY_PAPERS_FILE: &str = "industry_papers.jsonl";
pub const AFFILIATIONS_FILE: &str = "affiliation_classifications.jsonl";
pub const STATISTICS_FILE: &str = "industry_statistics.json";
pub const PATTERNS_FILE: &str = "affiliation_patterns.json";

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Directory containing paper records as .jsonl or .jsonl.gz files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Working directory for output files
    #[arg(short, long)]
    pub output: PathBuf,

    /// JSON registry replacing the built-in company and keyword lists
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Number of threads (0 = auto)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Include abstract, journal and DOI in exported paper rows
    #[arg(short, long)]
    pub detailed: bool,
}

pub(crate) fn load_registry(path: Option<&Path>) -> Result<Registry> {
    match path {
        Some(path) => {
            info!("Loading registry from {}", path.display());
            Registry::from_json_file(path)
        }
        None => Registry::compile(Default::default()),
    }
}

fn process_file(
    filepath: &Path,
    aggregator: &AuthorAggregator<'_>,
    detailed: bool,
    collected: &Mutex<Vec<(usize, Vec<Paper>)>>,
    file_idx: usize,
    tx: &crossbeam_channel::Sender<Vec<PaperReport>>,
) -> Result<()> {
    let papers = read_papers(filepath)?;

    let reports: Vec<PaperReport> = papers
        .iter()
        .filter_map(|paper| aggregator.report(paper, detailed))
        .collect();

    if !reports.is_empty() {
        let _ = tx.send(reports);
    }

    collected
        .lock()
        .unwrap()
        .push((file_idx, papers));

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    crate::init_tracing();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let registry = load_registry(args.registry.as_deref())?;
    let aggregator = AuthorAggregator::new(&registry);

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();
    info!("Using {} threads", num_threads);

    let files = find_paper_files(&args.input)?;
    info!("Found {} files to process", files.len());

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let collected: Mutex<Vec<(usize, Vec<Paper>)>> = Mutex::new(Vec::new());
    let (tx, rx) = bounded::<Vec<PaperReport>>(num_threads * 4);

    let reports_path = args.output.join(INDUSTRY_PAPERS_FILE);
    let writer_handle = std::thread::spawn(move || -> Result<usize> {
        let file = File::create(&reports_path)?;
        let mut writer = BufWriter::new(file);
        let mut written = 0;

        while let Ok(batch) = rx.recv() {
            for report in batch {
                serde_json::to_writer(&mut writer, &report)?;
                writer.write_all(b"\n")?;
                written += 1;
            }
        }

        writer.flush()?;
        Ok(written)
    });

    files
        .par_iter()
        .enumerate()
        .for_each_with(tx.clone(), |tx, (file_idx, filepath)| {
            if let Err(e) =
                process_file(filepath, &aggregator, args.detailed, &collected, file_idx, tx)
            {
                error!("Error processing {}: {}", filepath.display(), e);
            }
            progress.inc(1);
        });

    drop(tx);
    let reports_written = writer_handle
        .join()
        .map_err(|_| anyhow::anyhow!("Report writer thread panicked"))??;
    progress.finish();

    let mut collected = collected.into_inner().unwrap();
    collected.sort_by_key(|(idx, _)| *idx);
    let papers: Vec<Paper> = collected.into_iter().flat_map(|(_, p)| p).collect();

    let unique_affiliations: BTreeSet<&str> = papers
        .iter()
        .flat_map(|paper| &paper.authors)
        .filter_map(|author| author.affiliation.as_deref())
        .filter(|aff| !aff.trim().is_empty())
        .collect();

    let affiliation_records: Vec<AffiliationRecord> = unique_affiliations
        .par_iter()
        .map(|aff| AffiliationRecord::build(aggregator.extractor(), aff))
        .collect();

    let affiliations_path = args.output.join(AFFILIATIONS_FILE);
    let file = File::create(&affiliations_path)
        .with_context(|| format!("Failed to create {}", affiliations_path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in &affiliation_records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    let statistics = CorpusStatistics::new(&registry);
    let authors = || papers.iter().flat_map(|paper| &paper.authors);
    write_json(
        &args.output.join(STATISTICS_FILE),
        &statistics.industry_statistics(authors()),
    )?;
    write_json(
        &args.output.join(PATTERNS_FILE),
        &statistics.affiliation_pattern_report(authors()),
    )?;

    let results = SearchResultSet {
        total_found: papers.len(),
        query: args.input.display().to_string(),
        papers,
    };

    info!("{}", aggregator.summary(&results));
    info!(
        "Classified {} unique affiliations, exported {} industry papers",
        affiliation_records.len(),
        reports_written
    );
    info!("Output: {}", args.output.display());

    Ok(())
}
