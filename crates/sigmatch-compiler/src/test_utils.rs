//! Shared helpers for compiler tests.

use regex_automata::meta::Regex;

use crate::{Anchoring, Compilation, CompileOptions, compile_pattern};

/// Every string over `alphabet` of length `0..=max_len`, shortest first.
pub fn strings_over(alphabet: &[u8], max_len: usize) -> Vec<Vec<u8>> {
    let mut all = vec![Vec::new()];
    let mut layer = vec![Vec::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix: &Vec<u8>| {
                alphabet.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
        all.extend(layer.iter().cloned());
    }
    all
}

pub fn compile(pattern: &str) -> Compilation {
    compile_pattern(pattern, &CompileOptions::new().anchoring(Anchoring::Unanchored)).unwrap()
}

pub fn compile_anchored(pattern: &str) -> Compilation {
    compile_pattern(pattern, &CompileOptions::new().anchoring(Anchoring::Anchored)).unwrap()
}

/// Whole-string reference matcher.
///
/// Only agrees with our grammar when every alternation is parenthesized or a
/// single term on each side.
pub fn oracle(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).unwrap()
}
