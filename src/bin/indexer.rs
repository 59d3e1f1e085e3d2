// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build the three index files from tab-separated records on stdin.
//!
//! ```bash
//! cat corpus.tsv | indexer ./out
//! ```
//!
//! Each line is `url \t title \t body`; the body may itself contain tabs.
//! Lines without two tabs are skipped without consuming a doc id. Progress
//! and the final summary go to stderr.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use talpa::{analyze, write_index, DocRecord, PostingsAccumulator};

#[derive(Parser)]
#[command(
    name = "indexer",
    about = "Build a talpa index from url<TAB>title<TAB>body lines on stdin"
)]
struct Cli {
    /// Directory receiving index.docs, index.dict and index.postings
    out_dir: PathBuf,
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

    if let Err(err) = std::fs::create_dir_all(&cli.out_dir) {
        eprintln!("error: creating {}: {}", cli.out_dir.display(), err);
        return ExitCode::FAILURE;
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap());

    let mut docs: Vec<DocRecord> = Vec::new();
    let mut accumulator = PostingsAccumulator::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: reading stdin: {err}");
                return ExitCode::FAILURE;
            }
        };
        if line.is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, '\t');
        let (Some(url), Some(title), Some(body)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };

        let doc_id = docs.len() as u32;
        for (position, token) in analyze(body).into_iter().enumerate() {
            accumulator.add(token, doc_id, position as u32);
        }
        docs.push(DocRecord {
            url: url.to_owned(),
            title: title.to_owned(),
        });

        if docs.len() % 100 == 0 {
            progress.set_message(format!("processed {} docs", docs.len()));
            progress.tick();
        }
    }
    progress.finish_and_clear();

    eprintln!("Writing index to {}...", cli.out_dir.display());
    match write_index(&cli.out_dir, &docs, accumulator) {
        Ok(summary) => {
            eprintln!(
                "Indexing complete. Terms: {}, Docs: {}",
                summary.term_count, summary.doc_count
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
