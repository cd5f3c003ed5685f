//! Board field of a FEN string.
//!
//! Ranks are separated by `/`, row 0 first. Inside a rank a piece letter takes
//! one square and a run of decimal digits stands for that many empty squares.
//! Only the piece placement field is handled here; there is no side to move,
//! castling or clock information.

use std::iter::Enumerate;
use std::str::Split;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::{BoardError, Result};
use crate::types::Square;

pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// A piece letter and the square it was placed on.
pub type PlacedPiece = (char, Square);

/// Lazy iterator over the pieces of a position string.
///
/// Yields pieces in reading order. The first malformed rank produces an error
/// and ends the iteration.
pub struct Decoder<'a> {
    ranks: Enumerate<Split<'a, char>>,
    current: Option<(usize, &'a str)>,
    col: usize,
    size: usize,
    failed: bool,
}

/// Decode `position` for a board with `size` ranks and files.
///
/// The rank count is checked up front; everything inside a rank is checked as
/// the iterator reaches it.
pub fn decode(position: &str, size: usize) -> Result<Decoder<'_>> {
    let rank_count = position.split('/').count();
    if rank_count != size {
        return Err(BoardError::malformed(format!(
            "expected {size} ranks, found {rank_count}"
        )));
    }
    debug!(position, size, "decoding position");
    Ok(Decoder {
        ranks: position.split('/').enumerate(),
        current: None,
        col: 0,
        size,
        failed: false,
    })
}

impl<'a> Decoder<'a> {
    fn fail(&mut self, reason: String) -> Option<Result<PlacedPiece>> {
        self.failed = true;
        Some(Err(BoardError::malformed(reason)))
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = Result<PlacedPiece>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed {
                return None;
            }

            let (row, rest) = match self.current {
                Some(current) => current,
                None => {
                    let (row, rank) = self.ranks.next()?;
                    self.current = Some((row, rank));
                    self.col = 0;
                    continue;
                }
            };

            let Some(c) = rest.chars().next() else {
                // end of rank
                self.current = None;
                if self.col != self.size {
                    let reason = format!(
                        "rank {row} spans {} squares, expected {}",
                        self.col, self.size
                    );
                    return self.fail(reason);
                }
                continue;
            };

            if c.is_ascii_digit() {
                let run_len = rest
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(rest.len());
                let run: usize = match rest[..run_len].parse() {
                    Ok(run) => run,
                    Err(_) => return self.fail(format!("bad empty-square run in rank {row}")),
                };
                if run == 0 {
                    return self.fail(format!("zero-length empty-square run in rank {row}"));
                }
                match self.col.checked_add(run).filter(|col| *col <= self.size) {
                    Some(col) => self.col = col,
                    None => {
                        let reason = format!("rank {row} overflows a {} square board", self.size);
                        return self.fail(reason);
                    }
                }
                self.current = Some((row, &rest[run_len..]));
            } else if c.is_ascii_alphabetic() {
                if self.col >= self.size {
                    let reason = format!("rank {row} overflows a {} square board", self.size);
                    return self.fail(reason);
                }
                let square = Square::new(row, self.col);
                self.col += 1;
                self.current = Some((row, &rest[1..]));
                trace!(letter = %c, row, col = square.col, "decoded piece");
                return Some(Ok((c, square)));
            } else {
                return self.fail(format!("unexpected char `{c}` in rank {row}"));
            }
        }
    }
}

/// Encode pieces into a canonical position string (minimal digit runs).
pub fn encode<I>(pieces: I, size: usize) -> Result<String>
where
    I: IntoIterator<Item = PlacedPiece>,
{
    // every square starts as a one-square empty run, then runs are merged
    let mut cells: Vec<char> = (0..size)
        .map(|_| "1".repeat(size))
        .join("/")
        .chars()
        .collect();

    for (letter, square) in pieces {
        if !square.in_bounds(size) {
            return Err(BoardError::OutOfRangeSquare { square, size });
        }
        if !letter.is_ascii_alphabetic() {
            return Err(BoardError::UnsupportedPiece(letter));
        }
        cells[square.row * (size + 1) + square.col] = letter;
    }

    let encoded: String = cells
        .into_iter()
        .dedup_with_count()
        .map(|(count, c)| {
            if c == '1' {
                count.to_string()
            } else {
                c.to_string().repeat(count)
            }
        })
        .collect();
    debug!(position = %encoded, size, "encoded position");
    Ok(encoded)
}
