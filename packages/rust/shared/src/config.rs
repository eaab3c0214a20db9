//! Runtime configuration for a collection run.
//!
//! There is no config file: the CLI builds a [`CollectConfig`] from its
//! flags, and anything left unset falls back to the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::Corpus;

/// Number of lines drawn for the per-corpus log sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Directory the output files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Runtime collection configuration, merged from CLI flags and defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Directory holding the `宋词/` and `全唐诗/` subdirectories.
    pub input_dir: PathBuf,

    /// Directory receiving `ci.txt`, `shi_tang.txt` and `shi_song.txt`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Lines drawn for the log sample; also the minimum corpus size.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Seed for the sampler. `None` seeds from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Corpora enabled for this run.
    #[serde(default)]
    pub corpora: Vec<Corpus>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

impl CollectConfig {
    /// Config for `input_dir` with defaults and no corpus selected.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: default_output_dir(),
            sample_size: default_sample_size(),
            seed: None,
            corpora: Vec::new(),
        }
    }

    /// Enable `corpus` for this run. Enabling twice is a no-op.
    pub fn select(&mut self, corpus: Corpus) -> &mut Self {
        if !self.corpora.contains(&corpus) {
            self.corpora.push(corpus);
        }
        self
    }

    /// Selected corpora in processing order (Ci, ShiTang, ShiSong),
    /// regardless of the order they were enabled in.
    pub fn selected(&self) -> Vec<Corpus> {
        Corpus::ALL
            .into_iter()
            .filter(|c| self.corpora.contains(c))
            .collect()
    }

    /// Where the output for `corpus` is written.
    pub fn output_path(&self, corpus: Corpus) -> PathBuf {
        self.output_dir.join(corpus.output_file())
    }

    /// The input directory as a path.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_uses_defaults() {
        let config = CollectConfig::new("/data/chinese-poetry");
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.seed.is_none());
        assert!(config.selected().is_empty());
    }

    #[test]
    fn selection_follows_processing_order() {
        let mut config = CollectConfig::new("/data");
        config.select(Corpus::ShiSong).select(Corpus::Ci).select(Corpus::ShiSong);
        assert_eq!(config.corpora.len(), 2);
        assert_eq!(config.selected(), vec![Corpus::Ci, Corpus::ShiSong]);
    }

    #[test]
    fn output_path_joins_output_dir() {
        let mut config = CollectConfig::new("/data");
        config.output_dir = PathBuf::from("/tmp/out");
        assert_eq!(
            config.output_path(Corpus::ShiTang),
            PathBuf::from("/tmp/out/shi_tang.txt")
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: CollectConfig =
            serde_json::from_str(r#"{"input_dir": "/data", "corpora": ["ci"]}"#).expect("parse");
        assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.selected(), vec![Corpus::Ci]);
    }
}
