use crate::{
    fragments::{self, Fragment},
    stopwords::StopWordSet,
};

/// Score a pair of texts: similarity percentage plus the fragments that
/// produced it.
///
/// The numerator sums mined fragment lengths; the denominator is the
/// average of the two *original* text lengths, while the fragments come
/// from working copies that shrink as they are mined. Two texts whose only
/// common content is stop-words therefore score 0 even when identical, and
/// the percentage is not capped at 100. Symmetric in its text arguments.
pub fn score_pair(
    text1: &str,
    text2: &str,
    min_length: usize,
    stop_words: &StopWordSet,
) -> (f64, Vec<Fragment>) {
    let fragments =
        fragments::mine_fragments(text1, text2, min_length, stop_words);

    let total_common: usize = fragments.iter().map(|f| f.len).sum();
    let total_length = (text1.chars().count() + text2.chars().count()) / 2;
    if total_length == 0 {
        return (0.0, fragments);
    }

    let similarity =
        (total_common as f64 / total_length as f64 * 100.0).round();
    (similarity, fragments)
}
