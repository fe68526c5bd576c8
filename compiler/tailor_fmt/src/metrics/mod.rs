//! Document-diff quality metric.
//!
//! Compares two documents that contain the same real tokens and differ only
//! in whitespace. Each real token's preceding whitespace is compared by
//! counting spaces and newlines; the sum is normalized by the larger total
//! whitespace length of the two documents.

use tailor_ir::TokenStream;

use crate::error::FormatError;

fn count_byte(needle: u8, text: &str) -> usize {
    memchr::memchr_iter(needle, text.as_bytes()).count()
}

/// `|Δspaces| + |Δnewlines|` between two whitespace runs.
///
/// A character-count proxy for edit distance; positions within the runs are
/// not compared.
pub fn whitespace_edit_distance(a: &str, b: &str) -> usize {
    let spaces = count_byte(b' ', a).abs_diff(count_byte(b' ', b));
    let newlines = count_byte(b'\n', a).abs_diff(count_byte(b'\n', b));
    spaces + newlines
}

/// Real-token indices of a stream, end-of-file excluded.
fn content_tokens(stream: &TokenStream) -> Vec<usize> {
    let mut real = stream.real_indices();
    if real.last().is_some_and(|&i| stream.is_eof(i)) {
        real.pop();
    }
    real
}

/// Whitespace divergence of `b` from `a` in `[0, 1]`.
///
/// `0` means identical whitespace in front of every real token. Whitespace
/// after the last real token is ignored. Fails when the two documents do not
/// have the same real-token texts in the same order.
pub fn doc_diff(a: &TokenStream, b: &TokenStream) -> Result<f64, FormatError> {
    let (left, right) = (content_tokens(a), content_tokens(b));
    if left.len() != right.len() {
        return Err(FormatError::TokenCountMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut distance = 0usize;
    let (mut total_a, mut total_b) = (0usize, 0usize);
    for (position, (&i, &j)) in left.iter().zip(&right).enumerate() {
        if a.text(i) != b.text(j) {
            return Err(FormatError::TokenMisalignment {
                position,
                left: a.text(i).to_string(),
                right: b.text(j).to_string(),
            });
        }
        let ws_a = a.hidden_text_before(i);
        let ws_b = b.hidden_text_before(j);
        total_a += ws_a.len();
        total_b += ws_b.len();
        distance += whitespace_edit_distance(&ws_a, &ws_b);
    }

    let max_ws = total_a.max(total_b).max(1);
    Ok((distance as f64 / max_ws as f64).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests;
