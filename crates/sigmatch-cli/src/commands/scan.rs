//! Scan a payload and report the first match.

use std::path::PathBuf;

use sigmatch_compiler::{NoopTracer as NoopCompileTracer, Verbosity};
use sigmatch_core::Colors;
use sigmatch_scan::{DenseTable, PrintTracer, ScanLimits, ScanMatch, Scanner};

use super::input::{
    compile_options, compile_signature, exit_with, load_payload, load_signature, load_table,
    render_error,
};

pub struct ScanArgs {
    pub table: Option<PathBuf>,
    pub pattern: Option<String>,
    pub literals: Vec<String>,
    pub literals_file: Option<PathBuf>,
    pub anchored: bool,
    pub minimize: bool,
    pub pattern_id: u8,
    pub max_states: Option<usize>,
    pub input_text: Option<String>,
    pub input_file: Option<PathBuf>,
    pub depth: Option<usize>,
    pub color: bool,
    /// `None` unless `-v` was given.
    pub trace: Option<Verbosity>,
}

pub fn run(args: ScanArgs) {
    let table = match &args.table {
        Some(path) => load_table(path).unwrap_or_else(|e| exit_with(e)),
        None => {
            let signature = load_signature(
                args.pattern.as_deref(),
                &args.literals,
                args.literals_file.as_deref(),
            )
            .unwrap_or_else(|e| exit_with(e));
            let options = compile_options(
                args.anchored,
                args.minimize,
                args.pattern_id,
                args.max_states,
            );
            match compile_signature(&signature, &options, &mut NoopCompileTracer) {
                Ok(table) => table,
                Err(e) => {
                    eprintln!("{}", render_error(&e, &signature, args.color));
                    std::process::exit(1);
                }
            }
        }
    };
    let payload = load_payload(args.input_text.as_deref(), args.input_file.as_deref())
        .unwrap_or_else(|e| exit_with(e));

    let dense = DenseTable::from_table(&table);
    let mut limits = ScanLimits::new();
    if let Some(depth) = args.depth {
        limits = limits.depth(depth);
    }
    let scanner = Scanner::new(&dense).limits(limits);

    let colors = Colors::new(args.color);
    let found = match args.trace {
        Some(verbosity) => {
            let mut tracer = PrintTracer::new(verbosity, colors);
            let found = scanner.scan_with_tracer(&payload, &mut tracer);
            tracer.print();
            found
        }
        None => scanner.scan(&payload),
    };

    match found {
        Some(m) => println!("{}", format_match(&m, colors)),
        None => {
            println!("no match");
            std::process::exit(1);
        }
    }
}

pub fn format_match(m: &ScanMatch, colors: Colors) -> String {
    format!(
        "{}pattern {}{} at offset {} (state {})",
        colors.accept, m.pattern_id, colors.reset, m.end, m.state
    )
}
