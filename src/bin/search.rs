// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive query shell over a built index.
//!
//! Loads the three index files, prints `Ready`, then serves one boolean
//! query per stdin line until EOF or the literal line `exit`. Every query
//! answers with `Found <N> docs.`, up to 50 `<title> (<url>)` rows in
//! ascending doc-id order, and the `__END_QUERY__` sentinel. Diagnostics go
//! to stderr; stdout carries only the protocol.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use talpa::{evaluate, Index};

/// Result rows printed per query, at most.
const MAX_RESULTS: usize = 50;

#[derive(Parser)]
#[command(name = "search", about = "Query a talpa index interactively")]
struct Cli {
    /// Directory containing the three index files
    index_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; --help and --version exit 0.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    eprintln!("Loading index from {}...", cli.index_dir.display());
    let index = match Index::open(&cli.index_dir) {
        Ok(index) => index,
        Err(err) => {
            eprintln!("error: loading index: {err}");
            return ExitCode::FAILURE;
        }
    };
    eprintln!(
        "Loaded {} docs and {} terms. Ready for queries.",
        index.doc_count(),
        index.term_count()
    );

    match repl(&index) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn repl(index: &Index) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Ready")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        // A malformed postings block kills the query, not the shell.
        let results = match evaluate(index, &line) {
            Ok(results) => results,
            Err(err) => {
                eprintln!("query error: {err}");
                Vec::new()
            }
        };

        writeln!(out, "Found {} docs.", results.len())?;
        for &doc_id in results.iter().take(MAX_RESULTS) {
            if let Ok(doc) = index.doc(doc_id) {
                writeln!(out, "{} ({})", doc.title, doc.url)?;
            }
        }
        writeln!(out, "__END_QUERY__")?;
        out.flush()?;
    }
    Ok(())
}
