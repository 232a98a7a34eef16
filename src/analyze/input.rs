use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use glob::glob;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::Paper;

/// All `.jsonl` and `.jsonl.gz` files below `directory`, sorted.
pub fn find_paper_files<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for suffix in ["**/*.jsonl", "**/*.jsonl.gz"] {
        let pattern = directory.as_ref().join(suffix);
        let pattern_str = pattern.to_string_lossy();
        files.extend(glob(&pattern_str)?.filter_map(Result::ok));
    }
    files.sort();
    Ok(files)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Reads one paper record per line. Blank lines are ignored and lines that
/// do not parse as a paper are skipped with a warning.
pub fn read_papers(path: &Path) -> Result<Vec<Paper>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let source: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let reader = BufReader::new(source);

    let mut papers = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Paper>(&line) {
            Ok(paper) => papers.push(paper),
            Err(e) => warn!(
                "Skipping malformed record at {}:{}: {}",
                path.display(),
                line_no + 1,
                e
            ),
        }
    }

    Ok(papers)
}
