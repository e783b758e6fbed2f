pub mod buf;
mod error;
pub mod read;

pub use buf::{ChunkBuf, SourceRef};
pub use error::{InteriorNul, OomError, SlurpError, SlurpResult};
pub use read::{slurp_file, slurp_lines};
