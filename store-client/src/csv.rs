//! Permissive CSV decoding
//!
//! Published spreadsheet exports are close to RFC 4180 but not reliably
//! so. The decoder tolerates commas inside double-quoted fields, strips
//! the quote characters themselves, and trims every field. The whole
//! input is materialized eagerly; there is no streaming and no restart.

/// Split one line on commas, honoring double quotes.
///
/// A toggling in-quotes flag decides whether a comma separates fields or
/// is literal content. Quote characters are consumed, fields trimmed.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// A decoded export: one header line plus data rows.
#[derive(Debug, Clone, Default)]
pub struct CsvDocument {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    /// Parse the full export text.
    ///
    /// Fewer than two lines (header only, or nothing at all) yields an
    /// empty document rather than an error.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.trim().lines().collect();
        if lines.len() < 2 {
            return Self::default();
        }

        let headers = split_line(lines[0]);
        let rows = lines[1..].iter().map(|line| split_line(line)).collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose field count matches the header count exactly.
    /// Anything else is dropped silently.
    ///
    /// Record indices are 1-based data-row positions and still count the
    /// dropped rows, so ids stay stable across malformed lines.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, fields)| fields.len() == self.headers.len())
            .map(|(i, fields)| Record {
                index: i as i64 + 1,
                headers: &self.headers,
                fields,
            })
    }

    /// Rows with at least as many fields as headers.
    ///
    /// Trailing extras (typically spill-over from embedded newlines in an
    /// upstream field) are tolerated and ignored.
    pub fn records_at_least(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, fields)| fields.len() >= self.headers.len())
            .map(|(i, fields)| Record {
                index: i as i64 + 1,
                headers: &self.headers,
                fields,
            })
    }
}

/// One data row, addressable by header alias.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    index: i64,
    headers: &'a [String],
    fields: &'a [String],
}

impl<'a> Record<'a> {
    /// 1-based position of this row among the data lines.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Value under the first matching header alias. Case-sensitive;
    /// blank values fall through to the next alias, then to `None`.
    pub fn get(&self, aliases: &[&str]) -> Option<&'a str> {
        for alias in aliases {
            if let Some(pos) = self.headers.iter().position(|h| h == alias)
                && let Some(value) = self.fields.get(pos)
                && !value.is_empty()
            {
                return Some(value);
            }
        }
        None
    }

    /// Like [`get`](Self::get), with a default for absent/blank fields.
    pub fn get_or(&self, aliases: &[&str], default: &'a str) -> &'a str {
        self.get(aliases).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_quoted_comma() {
        let fields = split_line(r#""A, B",9.99"#);
        assert_eq!(fields, vec!["A, B", "9.99"]);
    }

    #[test]
    fn test_split_line_strips_quotes_and_trims() {
        let fields = split_line(r#" "hat" , 5 ,x "#);
        assert_eq!(fields, vec!["hat", "5", "x"]);
    }

    #[test]
    fn test_parse_header_only() {
        let doc = CsvDocument::parse("name,price\n");
        assert!(doc.is_empty());
        assert_eq!(doc.records().count(), 0);
    }

    #[test]
    fn test_parse_empty_input() {
        let doc = CsvDocument::parse("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_records_exact_arity() {
        let doc = CsvDocument::parse("name,price\nhat,5\nbroken,1,extra\nshoe,9");
        let names: Vec<&str> = doc
            .records()
            .map(|r| r.get(&["name"]).unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["hat", "shoe"]);
    }

    #[test]
    fn test_records_keep_index_across_dropped_rows() {
        let doc = CsvDocument::parse("name,price\nhat,5\nbroken,1,extra\nshoe,9");
        let indices: Vec<i64> = doc.records().map(|r| r.index()).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_records_at_least_tolerates_extras() {
        let doc = CsvDocument::parse("name,price\nhat,5,spill\nshort");
        let names: Vec<&str> = doc
            .records_at_least()
            .map(|r| r.get(&["name"]).unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["hat"]);
    }

    #[test]
    fn test_get_alias_fallback() {
        let doc = CsvDocument::parse("Name,price\nhat,5");
        let record = doc.records().next().unwrap();
        assert_eq!(record.get(&["name", "Name"]), Some("hat"));
        assert_eq!(record.get(&["name"]), None);
        assert_eq!(record.get_or(&["missing"], "fallback"), "fallback");
    }

    #[test]
    fn test_get_blank_falls_through() {
        let doc = CsvDocument::parse("name,Name\n,hat");
        let record = doc.records().next().unwrap();
        assert_eq!(record.get(&["name", "Name"]), Some("hat"));
    }
}
