//! Core domain types: poem records and the named corpora.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PoemRecord
// ---------------------------------------------------------------------------

/// One poem as stored in the source JSON files.
///
/// Only `paragraphs` is read; every other field (author, title, id, ...)
/// is ignored. A record without `paragraphs`, or with a non-string entry,
/// fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemRecord {
    /// The lines of the poem, in order.
    pub paragraphs: Vec<String>,
}

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

/// A named poetry corpus with a fixed input pattern and output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corpus {
    /// Song dynasty ci.
    Ci,
    /// Tang dynasty shi.
    ShiTang,
    /// Song dynasty shi.
    ShiSong,
}

impl Corpus {
    /// Every corpus, in processing order.
    pub const ALL: [Corpus; 3] = [Corpus::Ci, Corpus::ShiTang, Corpus::ShiSong];

    /// Short name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Corpus::Ci => "ci",
            Corpus::ShiTang => "shi-tang",
            Corpus::ShiSong => "shi-song",
        }
    }

    /// Glob pattern, relative to the input directory.
    pub fn pattern(self) -> &'static str {
        match self {
            Corpus::Ci => "宋词/ci.song.*.json",
            Corpus::ShiTang => "全唐诗/poet.tang.*.json",
            Corpus::ShiSong => "全唐诗/poet.song.*.json",
        }
    }

    /// Output file name, relative to the output directory.
    pub fn output_file(self) -> &'static str {
        match self {
            Corpus::Ci => "ci.txt",
            Corpus::ShiTang => "shi_tang.txt",
            Corpus::ShiSong => "shi_song.txt",
        }
    }
}

impl std::fmt::Display for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
