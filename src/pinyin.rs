use std::ops::Range;

use thiserror::Error;
use tracing::warn;

/// Placeholder for ü while decoding, `u:` and `ü` are rewritten to it.
const UMLAUT_PLACEHOLDER: char = 'v';

/// Appended by the lenient decoder if none of the placement rules matches.
const NO_RULE_SENTINEL: char = '!';

/// Unmarked vowels, column i of every row of [`TONE_MARKS`] is vowel i with the tone of that row.
const BASE_VOWELS: [char; 7] = ['a', 'o', 'e', 'i', 'u', UMLAUT_PLACEHOLDER, 'ü'];

const TONE_MARKS: [[char; 7]; 5] = [
    BASE_VOWELS,
    ['ā', 'ō', 'ē', 'ī', 'ū', 'ǖ', 'ǖ'],
    ['á', 'ó', 'é', 'í', 'ú', 'ǘ', 'ǘ'],
    ['ǎ', 'ǒ', 'ě', 'ǐ', 'ǔ', 'ǚ', 'ǚ'],
    ['à', 'ò', 'è', 'ì', 'ù', 'ǜ', 'ǜ'],
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("colon at position {position} of {input:?} does not follow 'u'")]
    DanglingColon { input: String, position: usize },
    #[error("syllable {syllable:?} has no vowel to carry tone {tone}")]
    NoVowel { syllable: String, tone: u32 },
    #[error("no rule places tone {tone} on the vowels of {syllable:?}")]
    NoPlacementRule { syllable: String, tone: u32 },
}

/// How syllables that cannot carry a tone mark are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Fail with a [`DecodeError`].
    #[default]
    Strict,
    /// Keep the tone digit (no vowel) or append `!` (no placement rule).
    Lenient,
}

/// Converts numbered pinyin like `ni3hao3` into pinyin with tone marks (`nǐhǎo`).
pub fn pinyin_mark_from_num(pinyin_num: &str) -> Result<String, DecodeError> {
    decode(pinyin_num, DecodeMode::Strict)
}

/// Like [`pinyin_mark_from_num`], but marks unplaceable tones in the output instead of failing.
/// A colon that does not follow `u` is still an error.
pub fn pinyin_mark_from_num_lenient(pinyin_num: &str) -> Result<String, DecodeError> {
    decode(pinyin_num, DecodeMode::Lenient)
}

pub fn decode(pinyin_num: &str, mode: DecodeMode) -> Result<String, DecodeError> {
    let pinyin_num = pinyin_num.to_lowercase();
    check_colons(&pinyin_num)?;

    let mut result = String::with_capacity(pinyin_num.len() + 2);
    let mut syllable: Vec<char> = Vec::with_capacity(8);
    for c in pinyin_num.chars() {
        match c {
            'a'..='z' => syllable.push(c),
            'ü' => syllable.push(UMLAUT_PLACEHOLDER),
            ':' => {
                // preceded by u, see check_colons
                if let Some(last) = syllable.last_mut() {
                    *last = UMLAUT_PLACEHOLDER;
                }
            }
            '0'..='5' => {
                let tone = (u32::from(c) - u32::from('0')) % 5;
                let marked = match mark_syllable(&syllable, tone) {
                    Ok(marked) => marked,
                    Err(err) if mode == DecodeMode::Lenient => legacy_marker(&syllable, c, &err),
                    Err(err) => return Err(err),
                };
                result.push_str(&marked);
                syllable.clear();
            }
            _ => {
                result.push_str(&render(&syllable));
                result.push(c);
                syllable.clear();
            }
        }
    }
    result.push_str(&render(&syllable));
    Ok(result)
}

fn check_colons(pinyin: &str) -> Result<(), DecodeError> {
    let mut prev = None;
    for (position, c) in pinyin.chars().enumerate() {
        if c == ':' && prev != Some('u') {
            return Err(DecodeError::DanglingColon {
                input: pinyin.to_owned(),
                position,
            });
        }
        prev = Some(c);
    }
    Ok(())
}

fn mark_syllable(syllable: &[char], tone: u32) -> Result<String, DecodeError> {
    if tone == 0 {
        return Ok(render(syllable));
    }
    let Some(run) = vowel_run(syllable) else {
        return Err(DecodeError::NoVowel {
            syllable: render(syllable),
            tone,
        });
    };
    let offset = if run.len() == 1 {
        0
    } else {
        placement_in_run(&syllable[run.clone()]).ok_or_else(|| DecodeError::NoPlacementRule {
            syllable: render(syllable),
            tone,
        })?
    };

    let mut marked = syllable.to_vec();
    let target = run.start + offset;
    marked[target] = tone_mark(syllable[target], tone);
    Ok(render(&marked))
}

/// Leftmost maximal run of vowels.
fn vowel_run(syllable: &[char]) -> Option<Range<usize>> {
    let start = syllable.iter().position(|c| BASE_VOWELS.contains(c))?;
    let len = syllable[start..]
        .iter()
        .take_while(|c| BASE_VOWELS.contains(c))
        .count();
    Some(start..start + len)
}

/// Position of the vowel that carries the tone within a run of two or more vowels:
/// a before o before e, otherwise the second vowel of a final ui or iu.
fn placement_in_run(run: &[char]) -> Option<usize> {
    ['a', 'o', 'e']
        .iter()
        .find_map(|vowel| run.iter().position(|c| c == vowel))
        .or_else(|| {
            (run.ends_with(&['u', 'i']) || run.ends_with(&['i', 'u'])).then_some(run.len() - 1)
        })
}

fn tone_mark(vowel: char, tone: u32) -> char {
    BASE_VOWELS
        .iter()
        .position(|&v| v == vowel)
        .and_then(|i| TONE_MARKS.get(tone as usize).map(|row| row[i]))
        .unwrap_or(vowel)
}

fn render(syllable: &[char]) -> String {
    syllable
        .iter()
        .map(|&c| if c == UMLAUT_PLACEHOLDER { 'ü' } else { c })
        .collect()
}

fn legacy_marker(syllable: &[char], tone_digit: char, err: &DecodeError) -> String {
    warn!("{err}, keeping marker in output");
    let mut marked = render(syllable);
    match err {
        DecodeError::NoVowel { .. } => marked.push(tone_digit),
        DecodeError::NoPlacementRule { .. } | DecodeError::DanglingColon { .. } => {
            marked.push(NO_RULE_SENTINEL);
        }
    }
    marked
}
