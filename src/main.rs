use std::env;
use std::io;
use std::process;

use anyhow::{Context, Result};
use bytes::{BufMut, Bytes, BytesMut};
use log::debug;

use minigrep::config::Config;

// Reads stdin to end-of-stream; the whole buffer is treated as one line.
fn read_input() -> Result<Bytes> {
    let mut buf = BytesMut::new().writer();
    io::copy(&mut io::stdin().lock(), &mut buf).context("read input text")?;
    Ok(buf.into_inner().freeze())
}

fn run() -> Result<bool> {
    let config = Config::from_args(env::args().skip(1))?;
    let pattern = minigrep::compile(&config.pattern)
        .with_context(|| format!("compile pattern {:?}", config.pattern))?;
    if config.debug {
        eprint!("{pattern}");
    }

    let input = read_input()?;
    debug!("read {} byte(s) from stdin", input.len());
    Ok(minigrep::matches(&input, &pattern))
}

// Usage: echo <input_text> | your_program.sh -E <pattern>
fn main() {
    env_logger::init();

    match run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(2)
        }
    }
}
