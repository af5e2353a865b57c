//! Compile a signature into a table.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sigmatch_compiler::{CompileTracer, NoopTracer, PrintTracer, Verbosity};
use sigmatch_core::Colors;
use sigmatch_table::{AutomatonTable, dump, encode, to_text};

use super::input::{
    Signature, compile_options, compile_signature, exit_with, load_signature, render_error,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableFormat {
    #[default]
    Text,
    Json,
    Kv,
    Dump,
}

pub struct CompileArgs {
    pub pattern: Option<String>,
    pub literals: Vec<String>,
    pub literals_file: Option<PathBuf>,
    pub anchored: bool,
    pub minimize: bool,
    pub pattern_id: u8,
    pub max_states: Option<usize>,
    pub format: TableFormat,
    pub output: Option<PathBuf>,
    pub color: bool,
    /// `None` unless `-v` was given.
    pub trace: Option<Verbosity>,
}

pub fn run(args: CompileArgs) {
    let signature = load_signature(
        args.pattern.as_deref(),
        &args.literals,
        args.literals_file.as_deref(),
    )
    .unwrap_or_else(|e| exit_with(e));

    let colors = Colors::new(args.color);
    let table = match args.trace {
        Some(verbosity) => {
            let mut tracer = PrintTracer::new(verbosity, colors);
            let table = compile_or_exit(&signature, &args, &mut tracer);
            tracer.print();
            table
        }
        None => compile_or_exit(&signature, &args, &mut NoopTracer),
    };

    let bytes = encode_table(&table, args.format, colors).unwrap_or_else(|e| exit_with(e));
    if let Err(e) = write_output(args.output.as_deref(), &bytes) {
        exit_with(e);
    }
}

fn compile_or_exit<T: CompileTracer>(
    signature: &Signature,
    args: &CompileArgs,
    tracer: &mut T,
) -> AutomatonTable {
    let options = compile_options(
        args.anchored,
        args.minimize,
        args.pattern_id,
        args.max_states,
    );
    match compile_signature(signature, &options, tracer) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}", render_error(&e, signature, args.color));
            std::process::exit(1);
        }
    }
}

pub fn encode_table(
    table: &AutomatonTable,
    format: TableFormat,
    colors: Colors,
) -> Result<Vec<u8>, serde_json::Error> {
    let bytes = match format {
        TableFormat::Text => to_text(table).into_bytes(),
        TableFormat::Json => {
            let mut out = serde_json::to_vec_pretty(table)?;
            out.push(b'\n');
            out
        }
        TableFormat::Kv => encode(table),
        TableFormat::Dump => dump(table, colors).into_bytes(),
    };
    Ok(bytes)
}

pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, bytes),
        None => io::stdout().write_all(bytes),
    }
}
