use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// `path` lists the numbers of the enclosing message fields, outermost first.
    #[error("field number 0 is not allowed (inside fields {path:?})")]
    InvalidFieldNumber { path: Vec<u32> },
    #[error("buffer too small: {required} bytes required, {remaining} remaining")]
    BufferTooSmall { required: usize, remaining: usize },
}

pub type EncodeResult<T> = Result<T, EncodeError>;
