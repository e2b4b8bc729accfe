//! Profile command implementation
//!
//! Batch-profiles tagged CoNLL-U documents into JSON feature vectors.
//! Documents are independent, so the batch is parallelized across a
//! rayon pool; one bad file logs a warning and does not abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

use crate::cli::VariantArg;
use crate::models::FeatureVector;
use crate::pipeline::{conllu, ProperNounChunker};
use crate::profiler::{profile_counts, profile_frequencies};
use crate::tagset::Tagset;

/// Profile one CoNLL-U file into a feature vector.
fn profile_file(path: &Path, variant: VariantArg, tagset: &Tagset) -> Result<FeatureVector> {
    let document = conllu::read_document(path)?;
    let features = match variant {
        VariantArg::Frequency => profile_frequencies(&document, tagset, &ProperNounChunker)?,
        VariantArg::Count => profile_counts(&document, tagset)?,
    };
    Ok(features)
}

pub fn run(
    files: &[PathBuf],
    variant: VariantArg,
    output: Option<&Path>,
    workers: usize,
) -> Result<()> {
    let tagset = Tagset::penn();

    if let Some(dir) = output {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("failed to build worker pool")?;

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    // Ordering across documents is not guaranteed; each result is keyed
    // by its input path.
    let results: Vec<(PathBuf, Result<FeatureVector>)> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let result = profile_file(path, variant, &tagset);
                progress.inc(1);
                (path.clone(), result)
            })
            .collect()
    });
    progress.finish_and_clear();

    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(features) => {
                let json = serde_json::to_string_pretty(&features)?;
                match output {
                    Some(dir) => {
                        let name = path
                            .file_stem()
                            .unwrap_or_else(|| path.as_os_str())
                            .to_string_lossy()
                            .into_owned();
                        let out_path = dir.join(format!("{name}.json"));
                        fs::write(&out_path, json).with_context(|| {
                            format!("failed to write {}", out_path.display())
                        })?;
                    }
                    None => println!("{}", json),
                }
            }
            Err(e) => {
                failures += 1;
                warn!("skipping {}: {:#}", path.display(), e);
                eprintln!(
                    "{} {}: {:#}",
                    style("warning:").yellow().bold(),
                    path.display(),
                    e
                );
            }
        }
    }

    if failures == files.len() {
        bail!("all {} input file(s) failed to profile", failures);
    }
    if failures > 0 {
        eprintln!(
            "{} profiled {} file(s), {} skipped",
            style("done:").green().bold(),
            files.len() - failures,
            failures
        );
    }
    Ok(())
}
