#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The alphabet source was empty or absent.
    InvalidAlphabet,
    /// The requested length was not a positive integer.
    InvalidLength(i64),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAlphabet => write!(
                f,
                "Invalid alphabet: the allowed characters must contain at least one character"
            ),
            Self::InvalidLength(length) => write!(
                f,
                "Invalid length {}: must be a positive, non-zero integer",
                length
            ),
        }
    }
}
