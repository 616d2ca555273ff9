//! simscan - textual-overlap detection for document corpora.
//!
//! simscan compares every pair of documents in a folder by repeatedly
//! extracting their longest common substring, discards matches made only
//! of stop words, and scores each pair as a percentage of the average
//! document length. The top pairs are reported on the terminal, as JSON,
//! or as an HTML page with every shared fragment highlighted.
//!
//! # Quick start
//!
//! ```
//! use simscan::{Document, EngineParams, engine};
//!
//! let documents = vec![
//!     Document::new("a.txt", "the quick brown fox jumps over the lazy dog"),
//!     Document::new("b.txt", "the quick brown fox naps beside the lazy dog"),
//! ];
//!
//! let report = engine::rank(&documents, &EngineParams::default());
//! for pair in &report.results {
//!     println!(
//!         "{} <-> {}: {}%",
//!         pair.doc_a.id, pair.doc_b.id, pair.similarity
//!     );
//! }
//! ```

pub mod cli;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod fragments;
pub mod highlight;
pub mod lcs;
pub mod render;
pub mod scoring;
pub mod server;
pub mod stopwords;
pub mod walker;

pub use corpus::Document;
pub use engine::{CancelFlag, EngineParams, PairResult, RankedReport};
pub use error::{Error, Result};
pub use fragments::Fragment;
pub use stopwords::StopWordSet;
