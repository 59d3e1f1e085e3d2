// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Summarize the contents of a built index.
//!
//! ```bash
//! inspect ./out            # human-readable table
//! inspect ./out --json     # machine-readable summary
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use talpa::Index;

#[derive(Parser)]
#[command(name = "inspect", about = "Summarize the contents of a talpa index")]
struct Cli {
    /// Directory containing the three index files
    index_dir: PathBuf,

    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// How many high-frequency terms to list
    #[arg(long, default_value = "10")]
    top: usize,
}

#[derive(Serialize)]
struct Summary {
    doc_count: u32,
    term_count: usize,
    postings_bytes: usize,
    /// Sum of dictionary doc_freq: the number of distinct (term, doc) pairs.
    term_doc_pairs: u64,
    top_terms: Vec<TopTerm>,
}

#[derive(Serialize)]
struct TopTerm {
    term: String,
    doc_freq: u32,
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

    let index = match Index::open(&cli.index_dir) {
        Ok(index) => index,
        Err(err) => {
            eprintln!("error: loading index: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut top_terms: Vec<TopTerm> = index
        .terms()
        .map(|(term, doc_freq)| TopTerm {
            term: term.to_owned(),
            doc_freq,
        })
        .collect();
    top_terms.sort_by(|a, b| b.doc_freq.cmp(&a.doc_freq).then_with(|| a.term.cmp(&b.term)));
    top_terms.truncate(cli.top);

    let summary = Summary {
        doc_count: index.doc_count(),
        term_count: index.term_count(),
        postings_bytes: index.postings_bytes(),
        term_doc_pairs: index.terms().map(|(_, doc_freq)| doc_freq as u64).sum(),
        top_terms,
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: serializing summary: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("index:          {}", cli.index_dir.display());
        println!("docs:           {}", summary.doc_count);
        println!("terms:          {}", summary.term_count);
        println!("postings bytes: {}", summary.postings_bytes);
        println!("term/doc pairs: {}", summary.term_doc_pairs);
        if !summary.top_terms.is_empty() {
            println!("top terms:");
            for entry in &summary.top_terms {
                println!("  {:<24} {}", entry.term, entry.doc_freq);
            }
        }
    }
    ExitCode::SUCCESS
}
