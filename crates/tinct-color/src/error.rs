use thiserror::Error;

/// Raw text that matched none of the grammars accepted by a parser.
///
/// Always carries the offending input verbatim so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {expected} format: {input:?}")]
pub struct FormatError {
    /// Grammar the parser was attempting (`"color"`, `"length"`, ...).
    pub expected: &'static str,
    /// The input exactly as it was handed to the parser.
    pub input: String,
}

impl FormatError {
    #[must_use]
    pub fn new(expected: &'static str, input: impl Into<String>) -> Self {
        Self {
            expected,
            input: input.into(),
        }
    }

    #[must_use]
    pub fn color(input: impl Into<String>) -> Self {
        Self::new("color", input)
    }
}

#[cfg(test)]
mod tests {
    use super::FormatError;

    #[test]
    fn message_names_grammar_and_input() {
        let error = FormatError::color("#12");
        assert_eq!(error.to_string(), "unrecognized color format: \"#12\"");
        assert_eq!(error.input, "#12");
    }
}
