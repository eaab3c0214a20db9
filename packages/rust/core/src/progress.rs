//! Progress reporting for collection runs.
//!
//! The collector never logs through a global directly; it reports each
//! step to a [`CollectReporter`] handed in by the caller.

use std::path::Path;

use tracing::{debug, info, warn};

use poetry_corpus_shared::Corpus;

use crate::collector::{CorpusJob, CorpusReport};

/// Progress callback for reporting collection status.
pub trait CollectReporter: Send + Sync {
    /// Called once per run with the corpora about to be collected.
    /// `corpora` is empty when nothing was selected.
    fn run_started(&self, corpora: &[Corpus]);
    /// Called once the glob for `job` has been expanded.
    fn corpus_started(&self, job: &CorpusJob, files: usize);
    /// Called after each matched file is parsed.
    fn file_parsed(&self, path: &Path, current: usize, total: usize);
    /// Called when every matched file has been flattened.
    fn collected(&self, job: &CorpusJob, paragraphs: usize, files: usize);
    /// Called with the random preview sample.
    fn sampled(&self, job: &CorpusJob, sample: &[&str]);
    /// Called when the output file has been written.
    fn written(&self, report: &CorpusReport);
}

/// Log line for a finished flatten pass.
pub fn collected_message(paragraphs: usize, files: usize) -> String {
    format!("Collected {paragraphs} sentences from {files} files")
}

/// Log line for the preview sample, one sampled line per row.
pub fn sampled_message(sample: &[&str]) -> String {
    format!("Sampled {} random poems:\n{}", sample.len(), sample.join("\n"))
}

/// Reporter that emits the progress as `tracing` events.
pub struct TracingReporter;

impl CollectReporter for TracingReporter {
    fn run_started(&self, corpora: &[Corpus]) {
        if corpora.is_empty() {
            warn!("no corpus selected, nothing to collect");
        } else {
            info!(corpora = corpora.len(), "starting collection");
        }
    }

    fn corpus_started(&self, job: &CorpusJob, files: usize) {
        debug!(
            corpus = %job.name,
            pattern = %job.pattern,
            output = %job.output_path.display(),
            files,
            "expanded glob"
        );
    }

    fn file_parsed(&self, path: &Path, current: usize, total: usize) {
        debug!(path = %path.display(), current, total, "parsed file");
    }

    fn collected(&self, job: &CorpusJob, paragraphs: usize, files: usize) {
        info!(corpus = %job.name, "{}", collected_message(paragraphs, files));
    }

    fn sampled(&self, job: &CorpusJob, sample: &[&str]) {
        info!(corpus = %job.name, "{}", sampled_message(sample));
    }

    fn written(&self, report: &CorpusReport) {
        info!(
            corpus = %report.name,
            path = %report.output_path.display(),
            paragraphs = report.paragraph_count,
            "wrote corpus"
        );
    }
}
