//! Validate a pattern file, one pattern per line.

use std::path::PathBuf;

use sigmatch_compiler::{CompileOptions, Error, compile_pattern};

use super::input::{exit_with, read_bytes};

pub struct CheckArgs {
    pub patterns_path: PathBuf,
    pub max_states: Option<usize>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let bytes = read_bytes(&args.patterns_path).unwrap_or_else(|e| exit_with(e));
    let text = String::from_utf8_lossy(&bytes);
    let path = args.patterns_path.to_string_lossy();

    let mut options = CompileOptions::new();
    if let Some(max) = args.max_states {
        options = options.max_dfa_states(max);
    }

    let reports = check_patterns(&text, &path, &options, args.color);
    if reports.is_empty() {
        // Silent on success (like cargo check)
        return;
    }
    for report in &reports {
        eprintln!("{report}");
    }
    std::process::exit(1);
}

/// One rendered report per failing line. Blank lines are skipped.
pub fn check_patterns(text: &str, path: &str, options: &CompileOptions, color: bool) -> Vec<String> {
    let mut reports = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let pattern = line.trim_end();
        if pattern.trim().is_empty() {
            continue;
        }
        let err = match compile_pattern(pattern, options).and_then(|c| c.table()) {
            Ok(_) => continue,
            Err(e) => e,
        };
        let report = match &err {
            Error::Parse(diagnostics) => diagnostics
                .printer()
                .source(pattern)
                .path(path)
                .line_start(line_no)
                .colored(color)
                .render(),
            _ => format!("error: {path}:{line_no}: {err}"),
        };
        reports.push(report);
    }
    reports
}
