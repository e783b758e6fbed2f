use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::buf::ChunkBuf;
use crate::error::SlurpResult;

#[cfg(test)]
mod test;

/// Reads `reader` line by line until end of input, appending each line to
/// `buf` with its terminator kept. Returns the number of bytes appended.
///
/// On error the buffer keeps every line appended before the failure.
pub fn slurp_lines<R: BufRead>(mut reader: R, buf: &mut ChunkBuf) -> SlurpResult<usize> {
    let mut line = Vec::new();
    let mut total = 0;
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }
        buf.append(&line)?;
        total += read;
    }
    Ok(total)
}

/// Slurps a whole file into a fresh buffer. An empty file yields an empty
/// buffer whose source view is still a valid null-terminated region.
pub fn slurp_file(path: impl AsRef<Path>) -> SlurpResult<ChunkBuf> {
    let file = File::open(path)?;
    let mut buf = ChunkBuf::new();
    slurp_lines(BufReader::new(file), &mut buf)?;
    Ok(buf)
}
