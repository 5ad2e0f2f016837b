//! Word tokenizer for design-tool identifiers.
//!
//! Splits names like `MapView16`, `GPSIcon`, or `Map2DView` into word-like
//! tokens. At each position the first matching rule wins:
//!
//! 1. a digit run followed by one uppercase letter that ends a word (`2D`)
//! 2. an uppercase run of two or more letters that ends before a capitalized
//!    word, a digit, or the end of input (`GPS` in `GPSIcon`)
//! 3. a capitalized word (`Map`)
//! 4. a digit run (`16`)
//! 5. a single uppercase letter
//!
//! Characters that start none of these (lowercase-leading runs, punctuation,
//! whitespace) are skipped. Only ASCII letters and digits are recognized.

/// Split a raw identifier into word tokens, left to right, non-overlapping.
///
/// Underscores are treated as spaces and the input is trimmed first.
pub fn tokenize(raw: &str) -> Vec<String> {
    let prepared = raw.replace('_', " ");
    let chars: Vec<char> = prepared.trim().chars().collect();

    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        match match_at(&chars, pos) {
            Some(end) => {
                tokens.push(chars[pos..end].iter().collect());
                pos = end;
            }
            None => pos += 1,
        }
    }
    tokens
}

/// End index of the token starting at `pos`, if any rule matches.
fn match_at(chars: &[char], pos: usize) -> Option<usize> {
    digits_with_letter(chars, pos)
        .or_else(|| acronym(chars, pos))
        .or_else(|| capitalized_word(chars, pos))
        .or_else(|| digit_run(chars, pos))
        .or_else(|| single_upper(chars, pos))
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// First index at or after `start` whose char does not satisfy `pred`.
fn run_end(chars: &[char], start: usize, pred: fn(char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(chars.len(), |offset| start + offset)
}

/// Whether a word may end right before `pos`: a digit, a capitalized word,
/// or the end of input follows.
fn word_boundary(chars: &[char], pos: usize) -> bool {
    match chars.get(pos) {
        None => true,
        Some(&c) if is_digit(c) => true,
        Some(&c) => is_upper(c) && chars.get(pos + 1).is_some_and(|&n| is_lower(n)),
    }
}

fn digits_with_letter(chars: &[char], pos: usize) -> Option<usize> {
    if !is_digit(chars[pos]) {
        return None;
    }
    // A shorter digit prefix is always followed by another digit, so only the
    // full run can be followed by the letter.
    let end = run_end(chars, pos, is_digit);
    let letter = *chars.get(end)?;
    (is_upper(letter) && word_boundary(chars, end + 1)).then_some(end + 1)
}

fn acronym(chars: &[char], pos: usize) -> Option<usize> {
    let end = run_end(chars, pos, is_upper);
    if end - pos < 2 {
        return None;
    }
    // Longest run first, giving back letters until a boundary follows.
    (pos + 2..=end).rev().find(|&k| word_boundary(chars, k))
}

fn capitalized_word(chars: &[char], pos: usize) -> Option<usize> {
    if !is_upper(chars[pos]) || !chars.get(pos + 1).is_some_and(|&c| is_lower(c)) {
        return None;
    }
    Some(run_end(chars, pos + 1, is_lower))
}

fn digit_run(chars: &[char], pos: usize) -> Option<usize> {
    is_digit(chars[pos]).then(|| run_end(chars, pos, is_digit))
}

fn single_upper(chars: &[char], pos: usize) -> Option<usize> {
    is_upper(chars[pos]).then_some(pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(raw: &str) -> Vec<String> {
        tokenize(raw)
    }

    #[test]
    fn camel_case_with_size() {
        assert_eq!(toks("MapView16"), ["Map", "View", "16"]);
    }

    #[test]
    fn acronym_before_word() {
        assert_eq!(toks("GPSIcon"), ["GPS", "Icon"]);
        assert_eq!(toks("AddGPSPoint"), ["Add", "GPS", "Point"]);
    }

    #[test]
    fn acronym_before_digits_and_end() {
        assert_eq!(toks("ABC123"), ["ABC", "123"]);
        assert_eq!(toks("ExportPDF"), ["Export", "PDF"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(toks("").is_empty());
        assert!(toks("   ").is_empty());
        assert!(toks("___").is_empty());
    }

    #[test]
    fn digit_letter_pairs_are_atomic() {
        assert_eq!(toks("Map2DView"), ["Map", "2D", "View"]);
        assert_eq!(toks("Scene3D"), ["Scene", "3D"]);
        assert_eq!(toks("Layer3D16"), ["Layer", "3D", "16"]);
    }

    #[test]
    fn digit_letter_without_boundary_splits() {
        // The letter starts a capitalized word instead.
        assert_eq!(toks("3Dx"), ["3", "Dx"]);
    }

    #[test]
    fn underscores_and_whitespace_separate_words() {
        assert_eq!(toks("01_MapView_Dark"), ["01", "Map", "View", "Dark"]);
        assert_eq!(toks("  Map View  "), ["Map", "View"]);
    }

    #[test]
    fn lowercase_leading_runs_are_skipped() {
        assert_eq!(toks("iPhone"), ["Phone"]);
        assert!(toks("uncategorized").is_empty());
        assert_eq!(toks("3ds"), ["3"]);
    }

    #[test]
    fn trailing_single_capital() {
        assert_eq!(toks("PointA"), ["Point", "A"]);
        assert_eq!(toks("XYZoom"), ["XY", "Zoom"]);
    }

    #[test]
    fn punctuation_is_skipped() {
        assert_eq!(toks("Zoom-In (Large)"), ["Zoom", "In", "Large"]);
    }
}
