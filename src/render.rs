use serde::Serialize;

use crate::{
    engine::RankedReport,
    error::Result,
    fragments::Fragment,
    highlight,
};

/// Print a ranked report for human eyes.
pub fn format_human(report: &RankedReport, show_fragments: bool) {
    if report.is_empty() {
        println!("No overlapping pairs found.");
        return;
    }

    for (i, pair) in report.results.iter().enumerate() {
        println!(
            "{:>3}. [{:>3.0}%] {} <-> {}",
            i + 1,
            pair.similarity,
            pair.doc_a.id,
            pair.doc_b.id
        );
        if show_fragments {
            for fragment in &pair.fragments {
                println!("     | {}", fragment.text.trim());
            }
        }
    }
    println!("\n{} pair(s)", report.len());
}

#[derive(Serialize)]
struct JsonPair<'a> {
    rank: usize,
    similarity: f64,
    doc_a: &'a str,
    doc_b: &'a str,
    fragments: &'a [Fragment],
}

/// Serialize a ranked report as a JSON array.
pub fn format_json(report: &RankedReport) -> Result<String> {
    let pairs: Vec<JsonPair> = report
        .results
        .iter()
        .enumerate()
        .map(|(i, pair)| JsonPair {
            rank: i + 1,
            similarity: pair.similarity,
            doc_a: &pair.doc_a.id,
            doc_b: &pair.doc_b.id,
            fragments: &pair.fragments,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&pairs)?)
}

#[derive(Serialize)]
struct JsonComparison<'a> {
    doc_a: &'a str,
    doc_b: &'a str,
    similarity: f64,
    fragments: &'a [Fragment],
}

/// Serialize a single comparison as a JSON object.
pub fn format_compare_json(
    id_a: &str,
    id_b: &str,
    similarity: f64,
    fragments: &[Fragment],
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonComparison {
        doc_a: id_a,
        doc_b: id_b,
        similarity,
        fragments,
    })?)
}

const PAGE_CSS: &str = "\
body {
    font-family: Arial, sans-serif;
    color: #333;
    margin: 0;
    padding: 20px;
}
h1 { color: #222; }
.content {
    margin: 10px;
    padding: 10px;
    background-color: #f8f8f8;
    border-left: 3px solid #ddd;
    white-space: pre-wrap;
    overflow-wrap: break-word;
}
mark {
    background-color: #fff068;
    font-weight: bold;
}
";

/// Renders the highlighted HTML report.
///
/// Constructed once at startup and handed to whichever surface needs it;
/// the page skeleton lives here rather than in any global template state.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    page_title: String,
}

impl HtmlRenderer {
    pub fn new(page_title: impl Into<String>) -> Self {
        Self {
            page_title: page_title.into(),
        }
    }

    /// Full report page: every ranked pair with both documents shown and
    /// each fragment occurrence wrapped in `<mark>`.
    pub fn render_report(
        &self,
        corpus_label: &str,
        report: &RankedReport,
    ) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"UTF-8\">\n");
        page.push_str(&format!(
            "<title>{}</title>\n",
            escape_html(&self.page_title)
        ));
        page.push_str("<style>\n");
        page.push_str(PAGE_CSS);
        page.push_str("</style>\n</head>\n<body>\n");
        page.push_str(&format!(
            "<h1>{}</h1>\n",
            escape_html(&self.page_title)
        ));
        page.push_str(&format!(
            "<h2>Top {} pairs in '{}'</h2>\n",
            report.len(),
            escape_html(corpus_label)
        ));

        for (i, pair) in report.results.iter().enumerate() {
            page.push_str(&format!(
                "<h2>{}. {} and {}: {:.0}% similarity</h2>\n",
                i + 1,
                escape_html(&pair.doc_a.id),
                escape_html(&pair.doc_b.id),
                pair.similarity
            ));
            for doc in [pair.doc_a, pair.doc_b] {
                page.push_str(&format!(
                    "<p><strong>{}</strong></p>\n",
                    escape_html(&doc.id)
                ));
                page.push_str("<div class=\"content\">");
                page.push_str(&mark_occurrences(&doc.text, &pair.fragments));
                page.push_str("</div>\n");
            }
        }

        page.push_str("</body>\n</html>\n");
        page
    }
}

/// Wrap every fragment occurrence in `<mark>`, escaping everything else.
fn mark_occurrences(text: &str, fragments: &[Fragment]) -> String {
    let spans = highlight::fragment_spans(text, fragments);
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&escape_html(&text[cursor..span.start]));
        out.push_str("<mark>");
        out.push_str(&escape_html(&text[span.start..span.end]));
        out.push_str("</mark>");
        cursor = span.end;
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
