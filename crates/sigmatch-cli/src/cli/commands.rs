//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`. Commands
//! that take a signature accept exactly one of `-p`, `-l` (repeatable),
//! `--literals-file` and, for `scan`, `--table`.

use clap::{ArgGroup, Command};

use super::args::*;

fn with_signature_args(cmd: Command) -> Command {
    cmd.arg(pattern_arg())
        .arg(literal_arg())
        .arg(literals_file_arg())
}

fn with_compile_args(cmd: Command) -> Command {
    cmd.arg(anchored_arg())
        .arg(no_minimize_arg())
        .arg(id_arg())
        .arg(max_states_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sigmatch")
        .about("Compile byte signatures into scanner automaton tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(graph_command())
        .subcommand(scan_command())
        .subcommand(check_command())
}

/// Compile a pattern or literal set into a table.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a signature into an automaton table")
        .override_usage(
            "\
  sigmatch compile -p <REGEX> [--anchored] [--id <N>]
  sigmatch compile -l <TEXT> [-l <TEXT>...]
  sigmatch compile --literals-file <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  sigmatch compile -p '(a|b)*abb'                # text table on stdout
  sigmatch compile -p '(dog)|(cat)' --anchored   # whole-input table
  sigmatch compile -l GET -l POST --format json  # literal set as JSON
  sigmatch compile -p 'ab+' --format kv -o t.kv  # kernel map records
  sigmatch compile -p 'ab+' -v                   # stage sizes on stderr"#,
        )
        .arg(table_format_arg())
        .arg(output_file_arg())
        .arg(color_arg())
        .arg(verbose_arg())
        .group(
            ArgGroup::new("signature")
                .args(["pattern", "literal", "literals_file"])
                .multiple(false)
                .required(true),
        );

    with_compile_args(with_signature_args(cmd))
}

/// Export an automaton as Graphviz DOT.
pub fn graph_command() -> Command {
    Command::new("graph")
        .about("Export an automaton as Graphviz DOT")
        .after_help(
            r#"EXAMPLES:
  sigmatch graph -p '(a|b)*abb' | dot -Tsvg > min.svg
  sigmatch graph -p 'a?b' --stage nfa"#,
        )
        .arg(pattern_arg().required(true))
        .arg(stage_arg())
        .arg(anchored_arg())
        .arg(max_states_arg())
        .arg(output_file_arg())
}

/// Scan a payload with a compiled or precompiled table.
pub fn scan_command() -> Command {
    let cmd = Command::new("scan")
        .about("Scan a payload and report the first match")
        .override_usage(
            "\
  sigmatch scan -p <REGEX> --input <TEXT>
  sigmatch scan -l <TEXT>... --input-file <FILE>
  sigmatch scan --table <FILE> --input <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  sigmatch scan -p '(dog)|(cat)' --input 'hotdog'
  sigmatch scan -l abcd -l bc --input xxabcd -vv
  sigmatch scan --table rules.txt --input-file payload.bin --depth 64"#,
        )
        .arg(table_arg())
        .arg(input_text_arg())
        .arg(input_file_arg())
        .arg(depth_arg())
        .arg(color_arg())
        .arg(verbose_arg())
        .group(
            ArgGroup::new("payload")
                .args(["input_text", "input_file"])
                .multiple(false)
                .required(true),
        );

    with_compile_args(with_signature_args(cmd)).group(
        ArgGroup::new("source")
            .args(["pattern", "literal", "literals_file", "table"])
            .multiple(false)
            .required(true),
    )
}

/// Validate a pattern file.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate patterns, one per line")
        .after_help(
            r#"EXAMPLES:
  sigmatch check rules.sig            # silent on success
  cat rules.sig | sigmatch check -"#,
        )
        .arg(patterns_path_arg())
        .arg(max_states_arg())
        .arg(color_arg())
}
