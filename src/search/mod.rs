// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: boolean algebra over sorted doc-id sets and positional
//! phrase matching.

pub mod parser;
pub mod phrase;
pub mod set_ops;

pub use parser::evaluate;
pub use phrase::phrase_search;
