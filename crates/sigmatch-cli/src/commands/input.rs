//! Loading signatures, payloads and tables, and compiling signatures.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sigmatch_compiler::{
    Anchoring, CompileOptions, CompileTracer, Error, LiteralSet, compile_pattern_traced,
};
use sigmatch_table::{AutomatonTable, TableError, decode, parse_text};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("'{}' holds no literals", path.display())]
    NoLiterals { path: PathBuf },

    #[error("signature is required: use -p/--pattern, -l/--literal, or --literals-file")]
    MissingSignature,

    #[error("payload is required: use --input or --input-file")]
    MissingPayload,

    #[error("invalid table '{}': {source}", path.display())]
    Table { path: PathBuf, source: TableError },

    #[error("invalid table '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// What to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    Pattern(String),
    Literals(Vec<Vec<u8>>),
}

pub fn load_signature(
    pattern: Option<&str>,
    literals: &[String],
    literals_file: Option<&Path>,
) -> Result<Signature, InputError> {
    if let Some(pattern) = pattern {
        return Ok(Signature::Pattern(pattern.to_string()));
    }
    if !literals.is_empty() {
        return Ok(Signature::Literals(
            literals.iter().map(|l| l.as_bytes().to_vec()).collect(),
        ));
    }
    if let Some(path) = literals_file {
        let bytes = read_bytes(path)?;
        let literals = split_lines(&bytes);
        if literals.is_empty() {
            return Err(InputError::NoLiterals {
                path: path.to_path_buf(),
            });
        }
        return Ok(Signature::Literals(literals));
    }
    Err(InputError::MissingSignature)
}

pub fn load_payload(text: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>, InputError> {
    if let Some(text) = text {
        return Ok(text.as_bytes().to_vec());
    }
    match file {
        Some(path) => read_bytes(path),
        None => Err(InputError::MissingPayload),
    }
}

/// Reads a table, picking the decoder by extension: `.json`, `.kv`, else text.
pub fn load_table(path: &Path) -> Result<AutomatonTable, InputError> {
    let bytes = read_bytes(path)?;
    let table_error = |source| InputError::Table {
        path: path.to_path_buf(),
        source,
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_slice(&bytes).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Some("kv") => decode(&bytes).map_err(table_error),
        _ => parse_text(&String::from_utf8_lossy(&bytes)).map_err(table_error),
    }
}

/// Reads a file, or stdin for `-`.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, InputError> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(InputError::Stdin)?;
        return Ok(buf);
    }
    fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-empty lines, without their line terminators.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

pub fn compile_options(
    anchored: bool,
    minimize: bool,
    pattern_id: u8,
    max_states: Option<usize>,
) -> CompileOptions {
    let anchoring = if anchored {
        Anchoring::Anchored
    } else {
        Anchoring::Unanchored
    };
    let options = CompileOptions::new()
        .anchoring(anchoring)
        .minimize(minimize)
        .pattern_id(pattern_id);
    match max_states {
        Some(max) => options.max_dfa_states(max),
        None => options,
    }
}

pub fn compile_signature<T: CompileTracer>(
    signature: &Signature,
    options: &CompileOptions,
    tracer: &mut T,
) -> Result<AutomatonTable, Error> {
    let table = match signature {
        Signature::Pattern(pattern) => compile_pattern_traced(pattern, options, tracer)?.table()?,
        Signature::Literals(literals) => LiteralSet::from_literals(literals)?.compile(options)?,
    };
    tracer.trace_table(&table);
    Ok(table)
}

/// Formats a compile error for stderr. Parse errors are rendered against the pattern.
pub fn render_error(err: &Error, signature: &Signature, color: bool) -> String {
    match (err, signature) {
        (Error::Parse(diagnostics), Signature::Pattern(pattern)) => diagnostics
            .printer()
            .source(pattern)
            .colored(color)
            .render(),
        _ => format!("error: {err}"),
    }
}

pub fn exit_with(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}
