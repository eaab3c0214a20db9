//! Corpus collection: input dir → glob → parse → flatten → sample → write.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::instrument;

use poetry_corpus_shared::{CollectConfig, Corpus, CorpusError, PoemRecord, Result};

use crate::progress::CollectReporter;
use crate::sampler::sample_lines;

/// One unit of collection work.
#[derive(Debug, Clone)]
pub struct CorpusJob {
    /// Name used in logs and errors.
    pub name: String,
    /// Directory the pattern is expanded in.
    pub input_dir: PathBuf,
    /// Glob pattern relative to `input_dir`.
    pub pattern: String,
    /// File the collected lines are written to.
    pub output_path: PathBuf,
}

impl CorpusJob {
    /// Build a job from its parts.
    pub fn new(
        name: impl Into<String>,
        input_dir: impl Into<PathBuf>,
        pattern: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            input_dir: input_dir.into(),
            pattern: pattern.into(),
            output_path: output_path.into(),
        }
    }

    /// The job for a named corpus under `config`.
    pub fn for_corpus(corpus: Corpus, config: &CollectConfig) -> Self {
        Self::new(
            corpus.name(),
            config.input_dir(),
            corpus.pattern(),
            config.output_path(corpus),
        )
    }
}

/// Result of a successful corpus collection.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    /// Corpus name.
    pub name: String,
    /// Path of the written file.
    pub output_path: PathBuf,
    /// Number of files the pattern matched.
    pub files_matched: usize,
    /// Number of paragraphs written.
    pub paragraph_count: usize,
    /// The preview sample that was logged.
    pub sample: Vec<String>,
}

/// Check that `path` exists and is a directory.
pub fn validate_input_dir(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CorpusError::invalid_input(path, "not a directory")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CorpusError::invalid_input(path, "path does not exist"))
        }
        Err(e) => Err(CorpusError::invalid_input(path, e.to_string())),
    }
}

/// Expand `pattern` inside `input_dir`, in lexical path order.
///
/// Metacharacters in `input_dir` itself are escaped, so only `pattern`
/// is treated as a glob. No matches is not an error.
pub fn match_files(input_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir = input_dir.to_str().ok_or_else(|| {
        CorpusError::pattern(
            pattern,
            format!("input path {} is not valid UTF-8", input_dir.display()),
        )
    })?;
    let full_path = PathBuf::from(glob::Pattern::escape(dir)).join(pattern);
    let full = full_path.to_string_lossy();

    let entries =
        glob::glob(&full).map_err(|e| CorpusError::pattern(full.to_string(), e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            CorpusError::io(path, e.into())
        })?;
        files.push(path);
    }
    Ok(files)
}

/// Read and parse one file of poem records.
pub fn read_records(path: &Path) -> Result<Vec<PoemRecord>> {
    let bytes = std::fs::read(path).map_err(|e| CorpusError::io(path, e))?;
    let text = std::str::from_utf8(&bytes)
        .map_err(|e| CorpusError::malformed(path, format!("invalid UTF-8: {e}")))?;

    serde_json::from_str(text).map_err(|e| CorpusError::malformed(path, e.to_string()))
}

/// Flatten every paragraph of every record in `files`, preserving
/// file, record and paragraph order.
pub fn collect_lines(files: &[PathBuf], reporter: &dyn CollectReporter) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let total = files.len();

    for (i, path) in files.iter().enumerate() {
        let records = read_records(path)?;
        for record in records {
            lines.extend(record.paragraphs);
        }
        reporter.file_parsed(path, i + 1, total);
    }

    Ok(lines)
}

/// Write `lines` joined by `\n` to `path`, replacing any existing file.
fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CorpusError::io(parent, e))?;
    }
    std::fs::write(path, lines.join("\n")).map_err(|e| CorpusError::io(path, e))
}

/// Collect one corpus and write it out.
///
/// The output file is only written once every matched file has parsed and
/// the preview sample has been drawn.
#[instrument(skip_all, fields(corpus = %job.name))]
pub fn collect_corpus<R: Rng + ?Sized>(
    job: &CorpusJob,
    sample_size: usize,
    rng: &mut R,
    reporter: &dyn CollectReporter,
) -> Result<CorpusReport> {
    let files = match_files(&job.input_dir, &job.pattern)?;
    reporter.corpus_started(job, files.len());

    let lines = collect_lines(&files, reporter)?;
    reporter.collected(job, lines.len(), files.len());

    let sample = sample_lines(&job.name, &lines, sample_size, rng)?;
    reporter.sampled(job, &sample);
    let sample: Vec<String> = sample.into_iter().map(String::from).collect();

    write_lines(&job.output_path, &lines)?;

    let report = CorpusReport {
        name: job.name.clone(),
        output_path: job.output_path.clone(),
        files_matched: files.len(),
        paragraph_count: lines.len(),
        sample,
    };
    reporter.written(&report);

    Ok(report)
}

/// Validate the input directory, then collect every selected corpus in order.
///
/// Stops at the first failure; files already written for earlier corpora
/// are left in place. All progress goes through `reporter`.
#[instrument(skip_all, fields(input = %config.input_dir.display()))]
pub fn collect_selected<R: Rng + ?Sized>(
    config: &CollectConfig,
    rng: &mut R,
    reporter: &dyn CollectReporter,
) -> Result<Vec<CorpusReport>> {
    validate_input_dir(&config.input_dir)?;

    let selected = config.selected();
    reporter.run_started(&selected);
    if selected.is_empty() {
        return Ok(Vec::new());
    }

    let mut reports = Vec::with_capacity(selected.len());
    for corpus in selected {
        let job = CorpusJob::for_corpus(corpus, config);
        reports.push(collect_corpus(&job, config.sample_size, rng, reporter)?);
    }

    Ok(reports)
}
