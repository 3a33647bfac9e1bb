use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::pinyin::{self, DecodeError, DecodeMode};

/// One text substitution: typing `shortcut` produces `phrase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableRecord {
    pub phrase: String,
    pub shortcut: String,
}

impl SyllableRecord {
    pub fn new(shortcut: impl Into<String>, phrase: impl Into<String>) -> Self {
        SyllableRecord {
            phrase: phrase.into(),
            shortcut: shortcut.into(),
        }
    }
}

pub fn special_case_records() -> impl Iterator<Item = SyllableRecord> {
    config::SPECIAL_CASES
        .iter()
        .map(|&(shortcut, phrase)| SyllableRecord::new(shortcut, phrase))
}

/// Records for every syllable with every tone of [`config::TONES`] (syllable by syllable),
/// followed by the special cases.
pub fn generate_records<S: AsRef<str>>(
    syllables: &[S],
    mode: DecodeMode,
) -> Result<Vec<SyllableRecord>, DecodeError> {
    let mut records =
        Vec::with_capacity(syllables.len() * config::TONES.len() + config::SPECIAL_CASES.len());
    for syllable in syllables {
        for tone in config::TONES {
            let shortcut = format!("{}{tone}", syllable.as_ref());
            let phrase = pinyin::decode(&shortcut, mode)?;
            records.push(SyllableRecord { phrase, shortcut });
        }
    }
    records.extend(special_case_records());
    debug!(num_records = records.len(), "generated records");
    Ok(records)
}
