pub mod error {
    use thiserror::Error;

    /// Errors reported by the `try_*` entry points, which check their
    /// arguments in every build mode.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        #[error("cannot build from an empty sequence")]
        EmptyInput,

        #[error("invalid range [{left}, {right}] for length {len}")]
        InvalidRange { left: usize, right: usize, len: usize },

        #[error("index {index} out of bounds for length {len}")]
        IndexOutOfBounds { index: usize, len: usize },
    }

    pub type Result<T> = std::result::Result<T, Error>;
}
