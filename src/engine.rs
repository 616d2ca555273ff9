use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rayon::prelude::*;

use crate::{
    corpus::Document,
    fragments::Fragment,
    scoring,
    stopwords::StopWordSet,
};

/// Tunables for a ranking run.
#[derive(Debug, Clone)]
pub struct EngineParams {
    /// Minimum fragment length in characters.
    pub min_length: usize,
    /// Maximum number of pairs in the report.
    pub top_n: usize,
    /// Words that never count toward similarity on their own.
    pub stop_words: StopWordSet,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            min_length: 5,
            top_n: 10,
            stop_words: StopWordSet::default(),
        }
    }
}

/// One compared pair: the two documents, their similarity percentage, and
/// the fragments behind it.
#[derive(Debug, Clone)]
pub struct PairResult<'a> {
    pub doc_a: &'a Document,
    pub doc_b: &'a Document,
    pub similarity: f64,
    pub fragments: Vec<Fragment>,
}

/// Ranked, truncated output of a corpus run.
#[derive(Debug, Clone, Default)]
pub struct RankedReport<'a> {
    /// Pairs in descending similarity order, at most `top_n` of them.
    pub results: Vec<PairResult<'a>>,
}

impl RankedReport<'_> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Cooperative cancellation handle for long corpus runs.
///
/// Clones share state. The ranker checks the flag between pair
/// computations, so cancellation takes effect at the next pair boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Compare every unordered document pair and keep the best `top_n`.
///
/// A corpus of zero or one documents yields an empty report; asking for
/// more pairs than exist yields all of them.
pub fn rank<'a>(
    documents: &'a [Document],
    params: &EngineParams,
) -> RankedReport<'a> {
    rank_with_cancel(documents, params, &CancelFlag::new())
}

/// [`rank`], checking `cancel` before each pair computation. A cancelled
/// run returns whatever pairs finished, ranked and truncated as usual.
pub fn rank_with_cancel<'a>(
    documents: &'a [Document],
    params: &EngineParams,
    cancel: &CancelFlag,
) -> RankedReport<'a> {
    let mut pairs = Vec::new();
    for i in 0..documents.len() {
        for j in i + 1..documents.len() {
            pairs.push((i, j));
        }
    }

    // Pair computations share nothing but the read-only texts, so they
    // fan out cleanly.
    let mut results: Vec<PairResult<'a>> = pairs
        .par_iter()
        .filter_map(|&(i, j)| {
            if cancel.is_cancelled() {
                return None;
            }
            let doc_a = &documents[i];
            let doc_b = &documents[j];
            let (similarity, fragments) = scoring::score_pair(
                &doc_a.text,
                &doc_b.text,
                params.min_length,
                &params.stop_words,
            );
            Some(PairResult {
                doc_a,
                doc_b,
                similarity,
                fragments,
            })
        })
        .collect();

    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    let keep = params.top_n.min(results.len());
    results.truncate(keep);

    RankedReport { results }
}
