use std::env;
use std::io::{self, Write};

use color_eyre::{eyre::eyre, Result as EyreResult};

use chunkbuf::slurp_file;

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        return Err(eyre!("usage: chunkbuf <file>..."));
    }

    let mut out = io::stdout().lock();
    for path in &paths {
        let buf = slurp_file(path)?;
        buf.with_source(|source| out.write_all(source.as_bytes()))?;
    }

    Ok(())
}
