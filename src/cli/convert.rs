//! Convert command implementation
//!
//! Feeds whole text files through the external dependency-parsing
//! pipeline and writes one CoNLL-U file per input. The core never
//! consumes this command's output directly; it is a batch boundary
//! around the installed parser.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::pipeline::{ExternalParser, ResourceCatalog};

/// Read one input: a path, or "-" for stdin.
fn read_input(path: &Path) -> Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(("stdin".to_string(), text));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((name, text))
}

pub fn run(
    language: &str,
    output_dir: &Path,
    resources: Option<&Path>,
    parser_cmd: &str,
    files: &[PathBuf],
) -> Result<()> {
    let catalog_path = resources
        .map(Path::to_path_buf)
        .unwrap_or_else(ResourceCatalog::default_path);
    let catalog = ResourceCatalog::load(&catalog_path)?;
    catalog.validate(language)?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;

    let parser = ExternalParser::new(parser_cmd, language);
    info!(language, parser = parser_cmd, inputs = files.len(), "starting conversion");

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    // One parser invocation per document. A failing document is skipped
    // rather than aborting the batch.
    let mut failures = 0usize;
    for path in files {
        progress.set_message(path.display().to_string());
        let result = read_input(path).and_then(|(name, text)| {
            let parsed = parser.parse_to_conllu(&text)?;
            let out_path = output_dir.join(format!("{name}.conllu"));
            fs::write(&out_path, parsed)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            Ok(())
        });
        if let Err(e) = result {
            failures += 1;
            warn!("skipping {}: {:#}", path.display(), e);
            eprintln!(
                "{} {}: {:#}",
                style("warning:").yellow().bold(),
                path.display(),
                e
            );
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if failures == files.len() {
        bail!("all {} input file(s) failed to convert", failures);
    }
    eprintln!(
        "{} converted {} file(s) to {}{}",
        style("done:").green().bold(),
        files.len() - failures,
        output_dir.display(),
        if failures > 0 {
            format!(", {failures} skipped")
        } else {
            String::new()
        }
    );
    Ok(())
}
