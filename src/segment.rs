//! Identifier word segmentation
//!
//! Splits an identifier such as `parse_HTTPRequest2` into its lowercase
//! words (`parse`, `http`, `request2`). Boundaries fall on separators
//! (anything that is not an ASCII letter or digit), on a lowercase to
//! uppercase transition, and before the last capital of an acronym that
//! runs straight into a lowercase word (`HTTPServer` -> `http`, `server`).
//! Digits never start a boundary; they stick to the run they follow, or
//! start the first word when they lead the identifier.
//!
//! The boundary rules live in [`transition`], a pure function over
//! ([`State`], [`CharClass`], look-ahead). [`Segments`] is the scan loop
//! that drives it.

/// Byte classes the segmenter distinguishes. Casing is ASCII-only; every
/// non-ASCII byte is a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Separator,
}

impl CharClass {
    pub fn of(byte: u8) -> Self {
        match byte {
            b'A'..=b'Z' => CharClass::Upper,
            b'a'..=b'z' => CharClass::Lower,
            b'0'..=b'9' => CharClass::Digit,
            _ => CharClass::Separator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between words, skipping separators
    Seeking,
    /// Inside a word that has seen a lowercase letter, or began with one or a digit
    LowerRun,
    /// Inside a word made only of capitals (and digits) so far
    UpperRun,
}

/// What the scan loop does with the current byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not part of any word
    Skip,
    /// Start a new word here
    Begin(State),
    /// Append to the current word
    Extend(State),
    /// Close the current word before this byte, then re-examine it
    Boundary,
}

/// Decide what to do with `current`, given the scan state and the class of
/// the byte after it (`None` at end of input).
pub fn transition(state: State, current: CharClass, next: Option<CharClass>) -> Step {
    use CharClass::*;

    match (state, current) {
        (State::Seeking, Separator) => Step::Skip,
        (State::Seeking, Upper) => Step::Begin(State::UpperRun),
        (State::Seeking, Lower | Digit) => Step::Begin(State::LowerRun),

        (State::LowerRun, Lower | Digit) => Step::Extend(State::LowerRun),
        (State::LowerRun, Upper | Separator) => Step::Boundary,

        // the capital in front of a lowercase letter opens the next word
        (State::UpperRun, Upper) if next == Some(Lower) => Step::Boundary,
        (State::UpperRun, Upper | Digit) => Step::Extend(State::UpperRun),
        (State::UpperRun, Lower) => Step::Extend(State::LowerRun),
        (State::UpperRun, Separator) => Step::Boundary,
    }
}

/// Lazy iterator over the lowercase words of one identifier.
///
/// A clone continues from the same position; call [`segments`] again to
/// start over.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    ident: &'a str,
    pos: usize,
}

/// Segment `ident` into lowercase words, left to right
pub fn segments(ident: &str) -> Segments<'_> {
    Segments { ident, pos: 0 }
}

impl<'a> Segments<'a> {
    /// Byte range of the next word, advancing past it
    fn next_span(&mut self) -> Option<(usize, usize)> {
        let bytes = self.ident.as_bytes();
        let mut state = State::Seeking;
        let mut begin = self.pos;

        while self.pos < bytes.len() {
            let current = CharClass::of(bytes[self.pos]);
            let next = bytes.get(self.pos + 1).copied().map(CharClass::of);

            match transition(state, current, next) {
                Step::Skip => {
                    self.pos += 1;
                }
                Step::Begin(run) => {
                    begin = self.pos;
                    state = run;
                    self.pos += 1;
                }
                Step::Extend(run) => {
                    state = run;
                    self.pos += 1;
                }
                Step::Boundary => return Some((begin, self.pos)),
            }
        }

        match state {
            State::Seeking => None,
            State::LowerRun | State::UpperRun => Some((begin, self.pos)),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (begin, end) = self.next_span()?;
        // Word bytes are ASCII, so both ends sit on char boundaries
        Some(self.ident[begin..end].to_ascii_lowercase())
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
