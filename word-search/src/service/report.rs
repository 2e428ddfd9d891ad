//! Report rendering for query results.
//!
//! Renders the result set's `word` field values as banner-framed text.

use serde_json::Value;

use word_search_shared::SearchResponse;

/// The source field whose values the report lists.
pub const REPORT_FIELD: &str = "word";

/// The three-character motif the banner line repeats.
const BANNER_MOTIF: &str = "-*-";

/// Number of motif repetitions per banner line.
const BANNER_REPEAT: usize = 30;

/// Render the banner-framed report for a result set.
///
/// Format: one banner line, then per hit a `word: <value>` line followed by
/// a blank line, then the closing banner line. Hits whose source lacks a
/// `word` field contribute no line. String values render bare; other
/// scalars render in their JSON form.
pub fn render_report(response: &SearchResponse) -> String {
    let banner = BANNER_MOTIF.repeat(BANNER_REPEAT);
    let mut out = String::new();

    out.push_str(&banner);
    out.push('\n');

    for hit in &response.hits {
        if let Some(value) = hit.field(REPORT_FIELD) {
            out.push_str(REPORT_FIELD);
            out.push_str(": ");
            out.push_str(&render_scalar(value));
            out.push_str("\n\n");
        }
    }

    out.push_str(&banner);
    out.push('\n');

    out
}

/// Render a scalar value: strings bare, everything else in JSON form.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};
    use word_search_shared::SearchHit;

    fn hit(word: Value) -> SearchHit {
        let mut source = Map::new();
        source.insert("word".to_string(), word);
        SearchHit::new(source)
    }

    #[test]
    fn test_single_hit_exact_output() {
        let response = SearchResponse::new(vec![hit(json!("value"))], 1);

        let report = render_report(&response);

        let expected = "-*-".repeat(30) + "\n" + "word: value\n\n" + &"-*-".repeat(30) + "\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_zero_hits_is_two_banners() {
        let report = render_report(&SearchResponse::empty());

        let banner = "-*-".repeat(30);
        assert_eq!(report, format!("{}\n{}\n", banner, banner));
    }

    #[test]
    fn test_multiple_hits_keep_input_order() {
        let response = SearchResponse::new(
            vec![hit(json!("first")), hit(json!("second")), hit(json!("third"))],
            3,
        );

        let report = render_report(&response);

        let banner = "-*-".repeat(30);
        let expected = format!(
            "{}\nword: first\n\nword: second\n\nword: third\n\n{}\n",
            banner, banner
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_hit_without_word_field_is_skipped() {
        let mut source = Map::new();
        source.insert("other".to_string(), json!("x"));
        let response = SearchResponse::new(vec![SearchHit::new(source), hit(json!("value"))], 2);

        let report = render_report(&response);

        let banner = "-*-".repeat(30);
        assert_eq!(report, format!("{}\nword: value\n\n{}\n", banner, banner));
    }

    #[test]
    fn test_non_string_scalar_renders_in_json_form() {
        let response = SearchResponse::new(vec![hit(json!(42))], 1);

        let report = render_report(&response);

        assert!(report.contains("word: 42\n\n"));
    }

    #[test]
    fn test_banner_width() {
        let report = render_report(&SearchResponse::empty());

        let first_line = report.lines().next().unwrap();
        assert_eq!(first_line.len(), 90);
    }
}
