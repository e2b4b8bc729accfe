//! Subprocess adapter for the external parsing pipeline
//!
//! Dependency parsing and tagging of raw text is delegated to an
//! installed parser command (stanza-style): text goes in on stdin, a
//! CoNLL-U document comes back on stdout. Which languages the
//! installation supports is advertised by a `resources.json` catalog next
//! to its models, and requested languages are validated against it
//! before any work starts.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::models::Document;
use crate::pipeline::{conllu, Tagger};
use crate::profiler::{ProfileError, ProfileResult};

/// The installed-language catalog: top-level keys of `resources.json`
/// are language codes.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    languages: Vec<String>,
}

impl ResourceCatalog {
    /// Load the catalog from a `resources.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read resource catalog {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("invalid JSON in resource catalog {}", path.display()))?;
        let obj = value
            .as_object()
            .with_context(|| format!("resource catalog {} is not an object", path.display()))?;
        let mut languages: Vec<String> = obj.keys().cloned().collect();
        languages.sort();
        Ok(Self { languages })
    }

    /// Default catalog location: `~/.textprof/resources.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".textprof")
            .join("resources.json")
    }

    /// Sorted installed language codes.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn contains(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Validate a requested language, with the installed choices in the
    /// error message.
    pub fn validate(&self, language: &str) -> Result<()> {
        if !self.contains(language) {
            bail!(
                "language '{}' is not installed (choose from: {})",
                language,
                self.languages.join(", ")
            );
        }
        Ok(())
    }
}

/// Wraps an external parser command that reads text on stdin and writes
/// CoNLL-U on stdout. The language code is passed as an argument.
#[derive(Debug, Clone)]
pub struct ExternalParser {
    program: String,
    language: String,
}

impl ExternalParser {
    pub fn new(program: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            language: language.into(),
        }
    }

    /// Run the parser over a text and return its raw CoNLL-U output.
    ///
    /// Spawn failures, non-zero exits, and non-UTF-8 output all surface
    /// as errors; nothing is swallowed.
    ///
    /// Stdin is fed from a separate thread while the parent drains
    /// stdout/stderr. Writing inline would deadlock once input and
    /// output together exceed the pipe buffer: the child blocks writing
    /// output nobody reads, the parent blocks writing input the child
    /// no longer consumes.
    pub fn parse_to_conllu(&self, text: &str) -> Result<String> {
        debug!(program = %self.program, language = %self.language, "invoking external parser");
        let mut child = Command::new(&self.program)
            .arg("--language")
            .arg(&self.language)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn parser command '{}'", self.program))?;

        let mut stdin = child.stdin.take().context("parser stdin unavailable")?;
        let payload = text.as_bytes().to_vec();
        let writer = std::thread::spawn(move || stdin.write_all(&payload));

        let output = child
            .wait_with_output()
            .with_context(|| format!("parser command '{}' did not finish", self.program))?;

        let written = writer
            .join()
            .map_err(|_| anyhow::anyhow!("parser stdin writer thread panicked"))?;

        // A failing child usually also breaks the stdin pipe; report the
        // exit status rather than the secondary write error.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "parser command '{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }
        written.context("failed to write text to parser stdin")?;
        String::from_utf8(output.stdout)
            .context("parser produced non-UTF-8 output")
    }
}

impl Tagger for ExternalParser {
    fn tag(&self, text: &str) -> ProfileResult<Document> {
        let raw = self
            .parse_to_conllu(text)
            .map_err(|e| ProfileError::ExternalPipeline(format!("{e:#}")))?;
        conllu::parse_document(&raw)
            .map_err(|e| ProfileError::ExternalPipeline(format!("{e:#}")))
    }
}
