// src/cli.rs
use std::{
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, bail, eyre};

use crate::params::{GenMode, Params};
use crate::runner;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    crate::log::set_verbose(params.verbose);

    let doc_text = read_input(params.input.as_deref())?;
    logf!("input: {} bytes", doc_text.len());

    // Render to memory first; only a fully validated schema reaches the sink.
    let mut buf: Vec<u8> = Vec::new();
    let summary = runner::run(&doc_text, &params, &mut buf)?;

    match &params.out {
        Some(path) => fs::write(path, &buf)?,
        None => io::stdout().write_all(&buf)?,
    }

    logf!(
        "done: {} elements, {} attributes",
        summary.elements,
        summary.attributes
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut text = s!();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output path"))?;
                params.out = Some(PathBuf::from(v));
            }
            "--legacy" => params.mode = GenMode::Legacy,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            "-" => params.input = None, // stdin, the default
            other if other.starts_with('-') => bail!("Unknown arg: {}", other),
            path => {
                if params.input.is_some() {
                    bail!("More than one input path: {}", path);
                }
                params.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(())
}
