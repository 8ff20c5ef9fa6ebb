//! Grid text decoding and repetition
//!
//! Supported layouts:
//!
//! ```text
//! text:  K | k | k | K        csv:  K,k,k,K        json: ["K | k", "A A | G"]
//!        # comment                  A A,G G,A A          {"grid": ["K | k"]}
//!        A A | G G | A A
//! ```
//!
//! The caller names the format; content is never sniffed.

use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::{KumikoError, Result};
use crate::layout::segments;

/// Encoding of grid content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    Text,
    Csv,
    Json,
}

impl FromStr for GridFormat {
    type Err = KumikoError;

    /// Accepts `txt`, `text`, `csv` and `json`, case-insensitive, with or
    /// without a leading dot.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(GridFormat::Text),
            "csv" => Ok(GridFormat::Csv),
            "json" => Ok(GridFormat::Json),
            other => Err(KumikoError::MalformedGrid(Arc::new(format!(
                "unsupported grid format '{other}' (expected txt, csv or json)"
            )))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonGrid {
    Rows(Vec<String>),
    Wrapped { grid: Vec<String> },
}

/// Decode grid content into row strings
pub fn parse_grid(content: &str, format: GridFormat) -> Result<Vec<String>> {
    if content.trim().is_empty() {
        return Err(KumikoError::malformed_grid("grid content is empty"));
    }

    let rows = match format {
        GridFormat::Text => content_lines(content).map(str::to_string).collect(),
        GridFormat::Csv => content_lines(content)
            .map(|line| {
                line.split(',')
                    .map(str::trim)
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect(),
        GridFormat::Json => {
            let rows = match serde_json::from_str::<JsonGrid>(content)? {
                JsonGrid::Rows(rows) | JsonGrid::Wrapped { grid: rows } => rows,
            };
            rows.into_iter()
                .map(|row| row.trim().to_string())
                .filter(|row| !row.is_empty())
                .collect()
        }
    };

    validate_rows(rows)
}

/// Trimmed lines without blanks or `#` comments
fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn validate_rows(rows: Vec<String>) -> Result<Vec<String>> {
    if rows.is_empty() {
        return Err(KumikoError::malformed_grid(
            "no pattern rows found (all lines are empty or comments)",
        ));
    }
    if rows.iter().all(|row| segments(row).is_empty()) {
        return Err(KumikoError::malformed_grid("no row contains a motif symbol"));
    }
    tracing::debug!(rows = rows.len(), "decoded grid");
    Ok(rows)
}

/// Tile a grid: each row repeated `repeat_x` times (joined by a space, so
/// the copies share a segment boundary), then all rows `repeat_y` times.
pub fn repeat_pattern<S: AsRef<str>>(
    rows: &[S],
    repeat_x: usize,
    repeat_y: usize,
) -> Result<Vec<String>> {
    if repeat_x == 0 || repeat_y == 0 {
        return Err(KumikoError::InvalidRepeat { repeat_x, repeat_y });
    }

    let widened: Vec<String> = rows
        .iter()
        .map(|row| vec![row.as_ref(); repeat_x].join(" "))
        .collect();

    let mut tiled = Vec::with_capacity(widened.len() * repeat_y);
    for _ in 0..repeat_y {
        tiled.extend(widened.iter().cloned());
    }
    Ok(tiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_skips_comments_and_blanks() {
        let rows = parse_grid("# header\n\n  K | k  \nA A\n", GridFormat::Text).unwrap();
        assert_eq!(rows, vec!["K | k", "A A"]);
    }

    #[test]
    fn test_parse_csv_joins_cells_with_seams() {
        let rows = parse_grid("K,k, k ,K\n# note\nA A,G G\n", GridFormat::Csv).unwrap();
        assert_eq!(rows, vec!["K | k | k | K", "A A | G G"]);
    }

    #[test]
    fn test_parse_json_array_and_object() {
        let plain = parse_grid(r#"["A | G", "  ", "K"]"#, GridFormat::Json).unwrap();
        assert_eq!(plain, vec!["A | G", "K"]);

        let wrapped = parse_grid(r#"{"grid": ["A A"]}"#, GridFormat::Json).unwrap();
        assert_eq!(wrapped, vec!["A A"]);
    }

    #[test]
    fn test_parse_json_wrong_shape() {
        let err = parse_grid(r#"{"rows": ["A"]}"#, GridFormat::Json).unwrap_err();
        assert!(matches!(err, KumikoError::Json(_)));
    }

    #[test]
    fn test_empty_content_is_malformed() {
        for format in [GridFormat::Text, GridFormat::Csv, GridFormat::Json] {
            assert!(matches!(
                parse_grid("   \n", format),
                Err(KumikoError::MalformedGrid(_))
            ));
        }
        assert!(matches!(
            parse_grid("# only\n# comments\n", GridFormat::Text),
            Err(KumikoError::MalformedGrid(_))
        ));
    }

    #[test]
    fn test_rows_without_symbols_are_malformed() {
        assert!(matches!(
            parse_grid("|\n | |\n", GridFormat::Text),
            Err(KumikoError::MalformedGrid(_))
        ));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(".CSV".parse::<GridFormat>().unwrap(), GridFormat::Csv);
        assert_eq!("txt".parse::<GridFormat>().unwrap(), GridFormat::Text);
        assert!("yaml".parse::<GridFormat>().is_err());
    }

    #[test]
    fn test_repeat_pattern() {
        let rows = repeat_pattern(&["A | G", "K"], 2, 2).unwrap();
        assert_eq!(rows, vec!["A | G A | G", "K K", "A | G A | G", "K K"]);
    }

    #[test]
    fn test_repeat_identity_and_invalid() {
        assert_eq!(repeat_pattern(&["A"], 1, 1).unwrap(), vec!["A"]);
        assert!(matches!(
            repeat_pattern(&["A"], 0, 1),
            Err(KumikoError::InvalidRepeat { repeat_x: 0, repeat_y: 1 })
        ));
    }
}
