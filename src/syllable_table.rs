/*
The syllable table is written as a grid of syllables separated by whitespace (spaces, tabs or newlines).

grid = {whitespace} {syllable {whitespace}}
syllable = syllable_letter {syllable_letter}
syllable_letter = a-z | "ü"

Each syllable becomes one shortcut per tone, so ü is replaced by v (the letter usually typed for ü).
Repeated syllables are kept only once, at their first position.
*/

use itertools::Itertools;
use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::multispace0,
    combinator::all_consuming,
    multi::many0,
    sequence::{preceded, terminated},
};
use thiserror::Error;
use tracing::debug;

use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid syllable grid: {0}")]
    Grid(String),
    #[error("syllable grid contains no syllables")]
    Empty,
}

fn is_syllable_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ü'
}

fn parse_syllable(syllable_str: &str) -> IResult<&str, &str> {
    terminated(take_while1(is_syllable_letter), multispace0).parse(syllable_str)
}

fn parse_grid(grid: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(preceded(multispace0, many0(parse_syllable))).parse(grid)
}

/// Syllables of `grid` in reading order, without duplicates, with ü written as v.
pub fn parse_syllable_grid(grid: &str) -> Result<Vec<String>, TableError> {
    let (_remainder, syllables) = parse_grid(grid).map_err(|e| TableError::Grid(e.to_string()))?;
    if syllables.is_empty() {
        return Err(TableError::Empty);
    }
    let num_entries = syllables.len();
    let table: Vec<String> = syllables
        .into_iter()
        .map(|s| s.replace('ü', "v"))
        .unique()
        .collect();
    debug!(
        num_entries,
        num_syllables = table.len(),
        "parsed syllable grid"
    );
    Ok(table)
}

/// The built-in syllable table.
pub fn syllable_table() -> Result<Vec<String>, TableError> {
    parse_syllable_grid(config::SYLLABLE_GRID)
}

#[cfg(test)]
mod tests;
