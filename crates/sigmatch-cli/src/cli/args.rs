//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be composed
//! into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Regular pattern (-p/--pattern).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('p')
        .long("pattern")
        .value_name("REGEX")
        .help("Signature pattern: ASCII letters and digits with | * + ? and groups")
}

/// Literal signature (-l/--literal), repeatable.
pub fn literal_arg() -> Arg {
    Arg::new("literal")
        .short('l')
        .long("literal")
        .value_name("TEXT")
        .action(ArgAction::Append)
        .help("Literal signature (repeatable; ids follow argument order)")
}

/// File with one literal per line (--literals-file).
pub fn literals_file_arg() -> Arg {
    Arg::new("literals_file")
        .long("literals-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Literal signatures, one per line (use \"-\" for stdin)")
}

/// Whole-input matching (--anchored).
pub fn anchored_arg() -> Arg {
    Arg::new("anchored")
        .long("anchored")
        .action(ArgAction::SetTrue)
        .help("Append the `#` end marker: the table accepts whole inputs followed by `#`")
}

/// Skip minimization (--no-minimize).
pub fn no_minimize_arg() -> Arg {
    Arg::new("no_minimize")
        .long("no-minimize")
        .action(ArgAction::SetTrue)
        .help("Emit the subset-construction DFA as is")
}

/// Pattern id for regular patterns (--id).
pub fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .value_name("N")
        .default_value("1")
        .value_parser(value_parser!(u8).range(1..))
        .help("Accept flag written for the pattern (1-255)")
}

/// State bound (--max-states).
pub fn max_states_arg() -> Arg {
    Arg::new("max_states")
        .long("max-states")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Fail when the automaton needs more states (default: 65536)")
}

/// Table encoding (--format).
pub fn table_format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json", "kv", "dump"])
        .help("Table encoding")
}

/// Automaton to export (--stage).
pub fn stage_arg() -> Arg {
    Arg::new("stage")
        .long("stage")
        .value_name("STAGE")
        .default_value("min")
        .value_parser(["nfa", "dfa", "min"])
        .help("Automaton to export")
}

/// Precompiled table (--table).
pub fn table_arg() -> Arg {
    Arg::new("table")
        .long("table")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Precompiled table (.json, .kv, or text)")
}

/// Inline payload (--input).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .long("input")
        .value_name("TEXT")
        .help("Payload as inline text")
}

/// Payload file (--input-file).
pub fn input_file_arg() -> Arg {
    Arg::new("input_file")
        .long("input-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Payload from file (use \"-\" for stdin)")
}

/// Inspection depth (--depth).
pub fn depth_arg() -> Arg {
    Arg::new("depth")
        .long("depth")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Inspect at most N bytes of the payload")
}

/// File with one pattern per line (positional).
pub fn patterns_path_arg() -> Arg {
    Arg::new("patterns_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Pattern file, one pattern per line (use \"-\" for stdin)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
