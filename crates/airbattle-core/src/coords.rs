//! Human-readable board coordinates.
//!
//! Rows are numbered from 1, columns lettered A..Z, then AA, AB, ... so
//! boards wider than 26 columns still get unique labels.

use crate::types::Position;

/// Column index (0-based) to letters: 0 -> A, 25 -> Z, 26 -> AA.
pub fn index_to_letter(index: i32) -> String {
    let mut letters = Vec::new();
    let mut num = index;
    while num >= 0 {
        letters.push(b'A' + (num % 26) as u8);
        num = num / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Letters to column index (0-based): A -> 0, Z -> 25, AA -> 26.
/// Returns `None` for empty or non-alphabetic input.
pub fn letter_to_index(letters: &str) -> Option<i32> {
    if letters.is_empty() {
        return None;
    }
    let mut result: i32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let value = ch.to_ascii_uppercase() as i32 - 'A' as i32 + 1;
        result = result.checked_mul(26)?.checked_add(value)?;
    }
    Some(result - 1)
}

/// (0,0) -> "1A", (9,25) -> "10Z".
pub fn position_to_coordinate(pos: Position) -> String {
    format!("{}{}", pos.row + 1, index_to_letter(pos.col))
}

/// "1A" -> (0,0), "10Z" -> (9,25). Digits must precede letters.
pub fn coordinate_to_position(text: &str) -> Option<Position> {
    let split = text.find(|c: char| !c.is_ascii_digit())?;
    let (digits, letters) = text.split_at(split);
    let row: i32 = digits.parse().ok()?;
    if row < 1 {
        return None;
    }
    let col = letter_to_index(letters)?;
    Some(Position::new(row - 1, col))
}

/// Column labels for a board of the given width.
pub fn column_labels(width: i32) -> Vec<String> {
    (0..width).map(index_to_letter).collect()
}

/// Row labels for a board of the given height.
pub fn row_labels(height: i32) -> Vec<String> {
    (1..=height).map(|r| r.to_string()).collect()
}
