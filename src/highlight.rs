use crate::fragments::Fragment;

/// A half-open byte range within an original document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Byte spans of every occurrence of every fragment within `text`, merged
/// into a sorted, disjoint list.
///
/// The engine reports each fragment once, but for display every occurrence
/// in the original text gets marked. Overlapping and adjacent occurrences
/// collapse into one span so renderers never emit nested marks.
pub fn fragment_spans(text: &str, fragments: &[Fragment]) -> Vec<Span> {
    let mut spans = Vec::new();
    for fragment in fragments {
        if fragment.text.is_empty() {
            continue;
        }
        for (start, matched) in text.match_indices(fragment.text.as_str()) {
            spans.push(Span {
                start,
                end: start + matched.len(),
            });
        }
    }
    merge_spans(spans)
}

fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    if spans.is_empty() {
        return spans;
    }
    spans.sort_by_key(|s| (s.start, s.end));

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    let mut current = spans[0];
    for span in spans.into_iter().skip(1) {
        if span.start <= current.end {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = span;
        }
    }
    merged.push(current);
    merged
}
