use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Posición 1-based, como la reporta pest.
    #[error("syntax error at {line}:{col}: {message}")]
    Syntax { message: String, line: usize, col: usize },
}

impl TranslateError {
    pub fn syntax(message: impl Into<String>, line: usize, col: usize) -> Self {
        TranslateError::Syntax { message: message.into(),
                                 line,
                                 col }
    }

    pub fn line_col(&self) -> (usize, usize) {
        match self {
            TranslateError::Syntax { line, col, .. } => (*line, *col),
        }
    }
}
