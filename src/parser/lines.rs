//! Universal-newline line splitting.
//!
//! A line ends at `\n`, `\r\n`, or a lone `\r`. A final line without a
//! terminator is yielded; a terminator at the very end does not produce an
//! extra empty line. Both the normalizer and the table detector split text
//! through here so they agree on line boundaries.

/// Iterator over the lines of a string, without their terminators.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Split `text` into lines using universal newline semantics.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(pos) => {
                let line = &self.rest[..pos];
                let terminator_len = if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[pos + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl std::iter::FusedIterator for Lines<'_> {}
