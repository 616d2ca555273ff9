use serde::Serialize;

use crate::{lcs, stopwords::StopWordSet};

/// A mined common substring that passed the minimum-length and stop-word
/// filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// The shared text, exactly as it occurs in both documents.
    pub text: String,
    /// Length in characters.
    pub len: usize,
}

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, len }
    }
}

/// Greedily mine the common fragments of two texts.
///
/// Each round takes the single longest remaining common substring; a run
/// shorter than `min_length` ends the loop. A match whose every
/// whitespace-separated word is a stop word is dropped from the result but
/// still stripped from both working copies, so the loop makes progress past
/// trivial matches.
///
/// Removal strips *every* occurrence of the found substring from both
/// working copies, not just the matched span. Unrelated repeats of a common
/// phrase therefore disappear early, which can change what later rounds
/// find; the behavior is kept so scores stay comparable with earlier runs
/// of the tool.
pub fn mine_fragments(
    text1: &str,
    text2: &str,
    min_length: usize,
    stop_words: &StopWordSet,
) -> Vec<Fragment> {
    // A zero minimum would let empty matches loop forever.
    let min_length = min_length.max(1);

    let mut work1 = text1.to_string();
    let mut work2 = text2.to_string();
    let mut fragments = Vec::new();

    loop {
        let found = lcs::longest_common_substring(&work1, &work2);
        if found.chars().count() < min_length {
            break;
        }
        let found = found.to_string();

        if !stop_words.all_stop_words(&found) {
            fragments.push(Fragment::new(found.clone()));
        }

        work1 = work1.replace(&found, "");
        work2 = work2.replace(&found, "");
    }

    fragments
}
