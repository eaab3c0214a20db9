//! CLI definition, tracing setup, and the collection command.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use poetry_corpus_core::collector::{self, CorpusJob, CorpusReport};
use poetry_corpus_core::progress::{CollectReporter, TracingReporter};
use poetry_corpus_core::sampler::sampler_rng;
use poetry_corpus_shared::{CollectConfig, Corpus, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_SIZE};
use tracing::debug;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Collect chinese-poetry paragraphs into plain-text training corpora.
#[derive(Parser, Debug)]
#[command(
    name = "collect-poetry",
    version,
    about = "Collect chinese-poetry paragraphs into one-line-per-sentence text files.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Directory containing the `宋词/` and `全唐诗/` subdirectories.
    #[arg(short, long)]
    pub input_path: PathBuf,

    /// Collect ci (宋词/ci.song.*.json → ci.txt).
    #[arg(short, long)]
    pub ci: bool,

    /// Collect Tang shi (全唐诗/poet.tang.*.json → shi_tang.txt). Short form: -st.
    #[arg(long)]
    pub shi_tang: bool,

    /// Collect Song shi (全唐诗/poet.song.*.json → shi_song.txt). Short form: -ss.
    #[arg(long)]
    pub shi_song: bool,

    /// Directory the output files are written to.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of random lines logged per corpus.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Seed for the logged sample (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Build the runtime config from the parsed flags.
    pub fn to_config(&self) -> CollectConfig {
        let mut config = CollectConfig::new(&self.input_path);
        config.output_dir = self.output_dir.clone();
        config.sample_size = self.sample_size;
        config.seed = self.seed;

        let flags = [
            (self.ci, Corpus::Ci),
            (self.shi_tang, Corpus::ShiTang),
            (self.shi_song, Corpus::ShiSong),
        ];
        for (enabled, corpus) in flags {
            if enabled {
                config.select(corpus);
            }
        }
        config
    }
}

/// Rewrite the two-letter short flags `-st` and `-ss` to their long forms.
///
/// clap only supports single-character short flags and would read `-ss`
/// as `-s -s`. Arguments after `--` are passed through untouched.
pub(crate) fn expand_short_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_separator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    past_separator = true;
                    arg
                }
                Some("-st") => OsString::from("--shi-tang"),
                Some("-ss") => OsString::from("--shi-song"),
                _ => arg,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Default filter directives for a verbosity count. Covers the library
/// crates (`poetry_corpus_*`) and this binary (`collect_poetry`).
pub(crate) fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "poetry_corpus=info,collect_poetry=info",
        1 => "poetry_corpus=debug,collect_poetry=debug",
        _ => "poetry_corpus=trace,collect_poetry=trace",
    }
}

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Run the collection for every selected corpus.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config();
    debug!(config = %serde_json::to_string(&config)?, "resolved configuration");

    let mut rng = sampler_rng(config.seed);
    let reporter = CliProgress::new()?;

    let result = collector::collect_selected(&config, &mut rng, &reporter);
    reporter.finish();
    let reports = result?;

    if reports.is_empty() {
        println!("No corpus selected. Pass --ci, -st/--shi-tang or -ss/--shi-song.");
        return Ok(());
    }

    println!();
    for report in &reports {
        println!("  {}", report.name);
        println!("    Files:  {}", report.files_matched);
        println!("    Lines:  {}", report.paragraph_count);
        println!("    Output: {}", report.output_path.display());
    }
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter: an indicatif spinner in front of the tracing log.
struct CliProgress {
    spinner: ProgressBar,
    log: TracingReporter,
}

impl CliProgress {
    fn new() -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .map_err(|e| eyre!("invalid progress template: {e}"))?
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Ok(Self {
            spinner,
            log: TracingReporter,
        })
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl CollectReporter for CliProgress {
    fn run_started(&self, corpora: &[Corpus]) {
        self.spinner.suspend(|| self.log.run_started(corpora));
    }

    fn corpus_started(&self, job: &CorpusJob, files: usize) {
        self.spinner
            .set_message(format!("Reading {} ({files} files)", job.name));
        self.spinner.suspend(|| self.log.corpus_started(job, files));
    }

    fn file_parsed(&self, path: &Path, current: usize, total: usize) {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        self.spinner.set_message(format!(
            "Parsing [{current}/{total}] {}",
            name.as_deref().unwrap_or_default()
        ));
        self.spinner.suspend(|| self.log.file_parsed(path, current, total));
    }

    fn collected(&self, job: &CorpusJob, paragraphs: usize, files: usize) {
        self.spinner
            .suspend(|| self.log.collected(job, paragraphs, files));
    }

    fn sampled(&self, job: &CorpusJob, sample: &[&str]) {
        self.spinner.suspend(|| self.log.sampled(job, sample));
    }

    fn written(&self, report: &CorpusReport) {
        self.spinner.set_message(format!("Wrote {}", report.output_path.display()));
        self.spinner.suspend(|| self.log.written(report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(expand_short_flags(args.iter().copied())).expect("parse args")
    }

    #[test]
    fn two_letter_short_flags_are_expanded() {
        let args = expand_short_flags(["collect-poetry", "-i", "data", "-st", "-ss", "-c"]);
        assert_eq!(
            args,
            vec!["collect-poetry", "-i", "data", "--shi-tang", "--shi-song", "-c"]
        );
    }

    #[test]
    fn arguments_after_separator_are_untouched() {
        let args = expand_short_flags(["collect-poetry", "--", "-st"]);
        assert_eq!(args, vec!["collect-poetry", "--", "-st"]);
    }

    #[test]
    fn short_forms_select_every_corpus() {
        let cli = parse(&["collect-poetry", "-i", "./chinese-poetry", "-c", "-st", "-ss"]);
        let config = cli.to_config();
        assert_eq!(config.input_dir, PathBuf::from("./chinese-poetry"));
        assert_eq!(
            config.selected(),
            vec![Corpus::Ci, Corpus::ShiTang, Corpus::ShiSong]
        );
    }

    #[test]
    fn long_forms_and_defaults() {
        let cli = parse(&["collect-poetry", "--input-path", "/data", "--shi-song"]);
        let config = cli.to_config();
        assert_eq!(config.selected(), vec![Corpus::ShiSong]);
        assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(config.seed.is_none());
    }

    #[test]
    fn optional_settings_flow_into_config() {
        let cli = parse(&[
            "collect-poetry",
            "-i",
            "/data",
            "-c",
            "-o",
            "/tmp/corpora",
            "--sample-size",
            "5",
            "--seed",
            "42",
        ]);
        let config = cli.to_config();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/corpora"));
        assert_eq!(config.sample_size, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn input_path_is_required() {
        let result = Cli::try_parse_from(expand_short_flags(["collect-poetry", "-c"]));
        assert!(result.is_err());
    }

    #[test]
    fn default_filter_covers_binary_and_libraries() {
        use tracing_subscriber::EnvFilter;

        for verbose in 0..=3 {
            let directives = default_filter(verbose);
            assert!(directives.contains("collect_poetry="), "{directives}");
            assert!(directives.contains("poetry_corpus="), "{directives}");
            assert!(EnvFilter::try_new(directives).is_ok());
        }
        assert!(default_filter(1).contains("collect_poetry=debug"));
        assert!(default_filter(2).contains("collect_poetry=trace"));
    }

    #[test]
    fn no_flags_selects_nothing() {
        let cli = parse(&["collect-poetry", "-i", "/data"]);
        assert!(cli.to_config().selected().is_empty());
    }
}
