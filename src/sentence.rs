//! Sentence segmentation and script utilities.
use unicode_script::{Script, UnicodeScript};
use unicode_segmentation::UnicodeSegmentation;

/// Split text into sentences.
///
/// Each line is segmented independently following Unicode sentence boundaries (UAX #29),
/// which covers both ideographic (`。！？`) and latin (`.!?`) terminators.
/// Sentences are trimmed and empty ones are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line.unicode_sentences())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split text into non-empty trimmed lines, for already segmented input.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Length of a sentence used for alignment: number of non-whitespace chars.
pub fn char_len(sentence: &str) -> usize {
    sentence.chars().filter(|c| !c.is_whitespace()).count()
}

/// Ratio of Han characters over alphabetic characters.
///
/// Returns `0.0` if there is no alphabetic character.
pub fn han_ratio(text: &str) -> f32 {
    let (han, total) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0u32, 0u32), |(han, total), c| {
            if c.script() == Script::Han {
                (han + 1, total + 1)
            } else {
                (han, total + 1)
            }
        });

    if total == 0 {
        0.0
    } else {
        han as f32 / total as f32
    }
}
