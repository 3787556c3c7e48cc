/// Sequence and quality of one four-line record, already trimmed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReadView<'a> {
    pub seq: &'a str,
    pub qual: &'a str,
}

pub const LINES_PER_RECORD: usize = 4;

/// Unicode `White_Space` plus the U+001C..U+001F information separators.
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Walks `lines` in blocks of four. Header and separator lines are not
/// inspected, and a trailing partial block is dropped.
pub fn records<S: AsRef<str>>(lines: &[S]) -> impl Iterator<Item = ReadView<'_>> {
    lines.chunks_exact(LINES_PER_RECORD).map(|block| ReadView {
        seq: block[1].as_ref().trim_matches(is_strip_char),
        qual: block[3].as_ref().trim_matches(is_strip_char),
    })
}
