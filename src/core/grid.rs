//! Splitting a multi-round session into five-letter grids
//!
//! The session keeps one flat text buffer and one flat verdict array. Round
//! `r` owns characters and verdict slots `[5r, 5r + 5)`.

use super::{Verdict, WORD_LEN, WordUnit};

/// Number of rounds touched by the typed text: `ceil(chars / 5)`
#[must_use]
pub fn active_rounds(raw_text: &str) -> usize {
    raw_text.chars().count().div_ceil(WORD_LEN)
}

/// View the flat buffers as `round_count` word units
///
/// Unit `r` receives characters `[5r, 5r + 5)` of `raw_text` (fewer, or none,
/// when the text is shorter) and the matching verdict slots.
#[must_use]
pub fn partition(raw_text: &str, flat_verdicts: &[Verdict], round_count: usize) -> Vec<WordUnit> {
    let chars: Vec<char> = raw_text.chars().collect();

    (0..round_count)
        .map(|round| {
            let start = round * WORD_LEN;
            let guess: String = chars.iter().skip(start).take(WORD_LEN).collect();
            let verdicts = flat_verdicts
                .get(start..)
                .map_or(&[][..], |rest| &rest[..rest.len().min(WORD_LEN)]);
            WordUnit::new(&guess, verdicts)
        })
        .collect()
}

/// Replace round `round`'s verdict slots, leaving every other slot as it was
///
/// The flat array grows (with `Missing`) if it is too short to hold the round.
#[must_use]
pub fn merge_edit(
    flat_verdicts: &[Verdict],
    round: usize,
    round_verdicts: &[Verdict; WORD_LEN],
) -> Vec<Verdict> {
    let start = round * WORD_LEN;
    let mut merged = flat_verdicts.to_vec();
    if merged.len() < start + WORD_LEN {
        merged.resize(start + WORD_LEN, Verdict::Missing);
    }
    merged[start..start + WORD_LEN].copy_from_slice(round_verdicts);
    merged
}

/// Join units back into a flat text buffer and a flat verdict array
#[must_use]
pub fn flatten(units: &[WordUnit]) -> (String, Vec<Verdict>) {
    let text = units.iter().map(WordUnit::guess).collect();
    let verdicts = units
        .iter()
        .flat_map(|unit| unit.verdicts().iter().copied())
        .collect();
    (text, verdicts)
}
