use std::io;
use thiserror::Error;

pub type SlurpResult<T> = Result<T, SlurpError>;

/// Growing a buffer's storage failed. The buffer is left exactly as it was
/// before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("allocation of {requested} bytes failed")]
pub struct OomError {
    requested: usize,
}

impl OomError {
    pub(crate) fn new(requested: usize) -> Self {
        Self { requested }
    }

    pub fn requested_bytes(&self) -> usize {
        self.requested
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("contents hold a zero byte at offset {at}")]
pub struct InteriorNul {
    pub at: usize,
}

#[derive(Error, Debug)]
pub enum SlurpError {
    #[error("reading source failed: {0}")]
    Io(#[from] io::Error),
    #[error("growing buffer failed: {0}")]
    Oom(#[from] OomError),
}
