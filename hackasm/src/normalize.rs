use std::fmt::Display;

use crate::constants::COMMENT;

/// A line of program text tagged with where it came from in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original source
    pub line_no: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(line_no: usize, text: impl Into<String>) -> Self {
        Self {
            line_no,
            text: text.into(),
        }
    }
}

impl Display for SourceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Strip comments and surrounding whitespace, dropping lines left empty.
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> Vec<SourceLine> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.as_ref();
            let code = line.find(COMMENT).map_or(line, |idx| &line[..idx]).trim();
            (!code.is_empty()).then(|| SourceLine::new(i + 1, code))
        })
        .collect()
}
