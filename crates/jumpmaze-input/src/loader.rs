//! Maze file parsing.
//!
//! A maze file is a sequence of records. Each record is a header line
//!
//! ```text
//! rows cols start_row start_col goal_row goal_col
//! ```
//!
//! followed by `rows` lines of `cols` whitespace-separated jump values.
//! Input ends at end of file, at a blank line, or at a header reading `0`.
//!
//! Malformed records are skipped with a warning and listed in
//! [`Loaded::skipped`]; parsing then resumes on the next unread line.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use jumpmaze_core::{Maze, MazeError, Pos};

/// The outcome of parsing a maze file.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    /// Valid mazes, in file order.
    pub mazes: Vec<Maze>,
    /// Records that were rejected, in file order.
    pub skipped: Vec<SkipReason>,
}

/// Read and parse a maze file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Loaded, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_mazes(&text);
    log::info!(
        "{}: loaded {} mazes, skipped {} records",
        path.display(),
        loaded.mazes.len(),
        loaded.skipped.len()
    );
    Ok(loaded)
}

/// Parse maze records from text.
pub fn parse_mazes(text: &str) -> Loaded {
    let mut out = Loaded::default();
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((line_no, line)) = lines.next() {
        let header = match parse_ints(line) {
            Ok(h) => h,
            Err(_) => {
                out.skip(SkipReason::BadHeader {
                    line: line_no,
                    text: line.trim().to_string(),
                });
                continue;
            }
        };
        if header.is_empty() || header == [0] {
            break;
        }
        let [rows, cols, sr, sc, gr, gc] = header[..] else {
            out.skip(SkipReason::BadHeader {
                line: line_no,
                text: line.trim().to_string(),
            });
            continue;
        };
        if rows <= 0 || cols <= 0 {
            out.skip(SkipReason::BadDimensions {
                line: line_no,
                rows,
                cols,
            });
            continue;
        }

        let mut grid = Vec::with_capacity((rows as usize).min(1024));
        let mut failure = None;
        for _ in 0..rows {
            let Some((row_no, row_line)) = lines.next() else {
                failure = Some(SkipReason::Truncated {
                    line: line_no,
                    expected: rows as usize,
                    found: grid.len(),
                });
                break;
            };
            match parse_row(row_line, cols as usize) {
                Ok(row) => grid.push(row),
                Err(error) => {
                    failure = Some(SkipReason::BadRow {
                        line: row_no,
                        error,
                    });
                    break;
                }
            }
        }
        if let Some(reason) = failure {
            out.skip(reason);
            continue;
        }

        match Maze::new(rows, cols, Pos::new(sr, sc), Pos::new(gr, gc), grid) {
            Ok(maze) => out.mazes.push(maze),
            Err(error) => out.skip(SkipReason::Invalid {
                line: line_no,
                error,
            }),
        }
    }
    out
}

impl Loaded {
    fn skip(&mut self, reason: SkipReason) {
        log::warn!("skipping maze record: {reason}");
        self.skipped.push(reason);
    }
}

fn parse_ints(line: &str) -> Result<Vec<i32>, std::num::ParseIntError> {
    line.split_whitespace().map(str::parse).collect()
}

fn parse_row(line: &str, cols: usize) -> Result<Vec<u32>, RowError> {
    let mut row = Vec::with_capacity(cols);
    for tok in line.split_whitespace() {
        let v: i64 = tok
            .parse()
            .map_err(|_| RowError::InvalidToken(tok.to_string()))?;
        let v = u32::try_from(v).map_err(|_| RowError::OutOfRange(v))?;
        row.push(v);
    }
    if row.len() != cols {
        return Err(RowError::WrongLength {
            expected: cols,
            found: row.len(),
        });
    }
    Ok(row)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a grid line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The line has a different number of values than declared.
    WrongLength { expected: usize, found: usize },
    /// A value is not an integer.
    InvalidToken(String),
    /// A value is negative or too large for a jump distance.
    OutOfRange(i64),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "expected {expected} columns, got {found}")
            }
            Self::InvalidToken(tok) => write!(f, "invalid value \u{201c}{tok}\u{201d}"),
            Self::OutOfRange(v) => write!(f, "jump value {v} out of range"),
        }
    }
}

/// Why a maze record was skipped. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The header does not hold exactly six integers.
    BadHeader { line: usize, text: String },
    /// Rows or columns are not positive.
    BadDimensions { line: usize, rows: i32, cols: i32 },
    /// A grid line is malformed.
    BadRow { line: usize, error: RowError },
    /// Input ended before all grid lines were read.
    Truncated {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The record is well-formed but describes an invalid maze
    /// (start or goal out of bounds).
    Invalid { line: usize, error: MazeError },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadHeader { line, text } => {
                write!(f, "line {line}: invalid header \u{201c}{text}\u{201d}")
            }
            Self::BadDimensions { line, rows, cols } => {
                write!(f, "line {line}: invalid dimensions {rows}x{cols}")
            }
            Self::BadRow { line, error } => write!(f, "line {line}: {error}"),
            Self::Truncated {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: input ended after {found} of {expected} grid rows"
            ),
            Self::Invalid { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

/// Failure to read a maze file at all.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO: &str = "\
2 2 0 0 1 1
1 1
1 1
3 3 0 0 2 2
1 2 1
1 0 1
2 1 1
0
";

    #[test]
    fn parses_records() {
        let loaded = parse_mazes(TWO);
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.mazes.len(), 2);
        let m = &loaded.mazes[1];
        assert_eq!((m.rows(), m.cols()), (3, 3));
        assert_eq!(m.start(), Pos::new(0, 0));
        assert_eq!(m.goal(), Pos::new(2, 2));
        assert_eq!(m.row(2), &[2, 1, 1]);
    }

    #[test]
    fn stops_at_zero_or_blank() {
        let text = "1 1 0 0 0 0\n5\n0\n1 1 0 0 0 0\n5\n";
        assert_eq!(parse_mazes(text).mazes.len(), 1);
        let text = "1 1 0 0 0 0\n5\n\n1 1 0 0 0 0\n5\n";
        assert_eq!(parse_mazes(text).mazes.len(), 1);
        let text = "1 1 0 0 0 0\n5";
        assert_eq!(parse_mazes(text).mazes.len(), 1);
    }

    #[test]
    fn bad_header_skips_line_only() {
        let text = "1 2 3\n1 1 0 0 0 0\n7\n";
        let loaded = parse_mazes(text);
        assert_eq!(loaded.mazes.len(), 1);
        assert_eq!(
            loaded.skipped,
            vec![SkipReason::BadHeader {
                line: 1,
                text: "1 2 3".to_string()
            }]
        );
    }

    #[test]
    fn non_integer_header_is_skipped() {
        let text = "a b c\n1 1 0 0 0 0\n7\n";
        let loaded = parse_mazes(text);
        assert_eq!(loaded.mazes.len(), 1);
        assert!(matches!(loaded.skipped[0], SkipReason::BadHeader { line: 1, .. }));
    }

    #[test]
    fn bad_dimensions() {
        let loaded = parse_mazes("0 3 0 0 0 0\n-1 2 0 0 0 0\n");
        assert!(loaded.mazes.is_empty());
        assert_eq!(
            loaded.skipped,
            vec![
                SkipReason::BadDimensions {
                    line: 1,
                    rows: 0,
                    cols: 3
                },
                SkipReason::BadDimensions {
                    line: 2,
                    rows: -1,
                    cols: 2
                },
            ]
        );
    }

    #[test]
    fn short_row_skips_record() {
        // The bad row is consumed; the following header parses normally.
        let text = "2 2 0 0 1 1\n1\n1 1 0 0 0 0\n4\n";
        let loaded = parse_mazes(text);
        assert_eq!(loaded.mazes.len(), 1);
        assert_eq!(loaded.mazes[0].jump_value(Pos::new(0, 0)), 4);
        assert_eq!(
            loaded.skipped,
            vec![SkipReason::BadRow {
                line: 2,
                error: RowError::WrongLength {
                    expected: 2,
                    found: 1
                }
            }]
        );
    }

    #[test]
    fn negative_and_garbage_values() {
        let loaded = parse_mazes("1 2 0 0 0 1\n1 -3\n");
        assert_eq!(
            loaded.skipped,
            vec![SkipReason::BadRow {
                line: 2,
                error: RowError::OutOfRange(-3)
            }]
        );
        let loaded = parse_mazes("1 2 0 0 0 1\n1 x\n");
        assert_eq!(
            loaded.skipped,
            vec![SkipReason::BadRow {
                line: 2,
                error: RowError::InvalidToken("x".to_string())
            }]
        );
    }

    #[test]
    fn truncated_record() {
        let loaded = parse_mazes("3 1 0 0 2 0\n1\n1\n");
        assert!(loaded.mazes.is_empty());
        assert_eq!(
            loaded.skipped,
            vec![SkipReason::Truncated {
                line: 1,
                expected: 3,
                found: 2
            }]
        );
    }

    #[test]
    fn endpoints_out_of_bounds() {
        let loaded = parse_mazes("1 1 0 0 0 1\n1\n1 1 1 0 0 0\n1\n1 1 0 0 0 0\n1\n");
        assert_eq!(loaded.mazes.len(), 1);
        assert_eq!(
            loaded.skipped,
            vec![
                SkipReason::Invalid {
                    line: 1,
                    error: MazeError::GoalOutOfBounds(Pos::new(0, 1))
                },
                SkipReason::Invalid {
                    line: 3,
                    error: MazeError::StartOutOfBounds(Pos::new(1, 0))
                },
            ]
        );
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mazes.txt");
        std::fs::write(&path, TWO).unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.mazes.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
