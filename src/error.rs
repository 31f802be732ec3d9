use thiserror::Error;

/// Malformed path-description syntax. Positions are byte offsets into the
/// original path-data string. Parsing fails atomically: no partial command
/// sequence is ever returned alongside one of these.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("unknown command letter '{letter}' at byte {at}")]
    UnknownCommand { letter: char, at: usize },
    #[error("command '{command}' is missing an argument at byte {at}")]
    MissingArgument { command: char, at: usize },
    #[error("unparsable number at byte {at}")]
    InvalidNumber { at: usize },
    #[error("arc flag at byte {at} must be 0 or 1")]
    InvalidArcFlag { at: usize },
    #[error("coordinate resolved by command at byte {at} is non-finite or out of bounds")]
    CoordinateOutOfBounds { at: usize },
    #[error("path data exceeds {limit} limit ({got})")]
    LimitExceeded { limit: &'static str, got: usize },
}

/// Failure reading the surrounding document. Individual elements with a
/// missing or unusable id/path are skipped and logged, never fatal.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not valid UTF-8")]
    NotUtf8,
    #[error("document exceeds {0} bytes")]
    TooLarge(usize),
    #[error("malformed document: {0}")]
    Xml(#[from] roxmltree::Error),
}
