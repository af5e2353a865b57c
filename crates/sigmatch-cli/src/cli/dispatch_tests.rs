//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Signature groups: exactly one signature source per command
//! 2. Value validation: ids, formats and stages are checked by clap
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use sigmatch_compiler::Verbosity;

use super::*;
use crate::cli::commands::{check_command, compile_command, graph_command, scan_command};
use crate::commands::compile::{CompileArgs, TableFormat};
use crate::commands::graph::{GraphArgs, Stage};
use crate::commands::scan::ScanArgs;

#[test]
fn compile_requires_signature() {
    let result = compile_command().try_get_matches_from(["compile"]);
    assert!(result.is_err(), "compile without a signature should fail");
}

#[test]
fn compile_rejects_pattern_with_literals() {
    let result = compile_command().try_get_matches_from(["compile", "-p", "ab", "-l", "cd"]);
    assert!(
        result.is_err(),
        "pattern and literals are mutually exclusive"
    );
}

#[test]
fn compile_defaults() {
    let m = compile_command()
        .try_get_matches_from(["compile", "-p", "(a|b)*abb"])
        .unwrap();
    let args: CompileArgs = CompileParams::from_matches(&m).into();

    assert_eq!(args.pattern.as_deref(), Some("(a|b)*abb"));
    assert!(args.literals.is_empty());
    assert!(!args.anchored);
    assert!(args.minimize);
    assert_eq!(args.pattern_id, 1);
    assert_eq!(args.max_states, None);
    assert_eq!(args.format, TableFormat::Text);
    assert_eq!(args.output, None);
    assert_eq!(args.trace, None);
}

#[test]
fn compile_collects_literals_in_order() {
    let m = compile_command()
        .try_get_matches_from(["compile", "-l", "GET", "-l", "POST", "--literal", "PUT"])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.signature.literals, ["GET", "POST", "PUT"]);
    assert_eq!(params.signature.pattern, None);
}

#[test]
fn compile_extracts_flags() {
    let m = compile_command()
        .try_get_matches_from([
            "compile",
            "-p",
            "ab",
            "--anchored",
            "--no-minimize",
            "--id",
            "7",
            "--max-states",
            "100",
            "--format",
            "kv",
            "-o",
            "out.kv",
            "--color",
            "never",
        ])
        .unwrap();
    let params = CompileParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Never);

    let args: CompileArgs = params.into();
    assert!(args.anchored);
    assert!(!args.minimize);
    assert_eq!(args.pattern_id, 7);
    assert_eq!(args.max_states, Some(100));
    assert_eq!(args.format, TableFormat::Kv);
    assert_eq!(args.output, Some(PathBuf::from("out.kv")));
    assert!(!args.color);
}

#[test]
fn compile_rejects_zero_id() {
    let result = compile_command().try_get_matches_from(["compile", "-p", "ab", "--id", "0"]);
    assert!(result.is_err(), "id 0 is reserved for non-accepting entries");

    let result = compile_command().try_get_matches_from(["compile", "-p", "ab", "--id", "256"]);
    assert!(result.is_err(), "id must fit in a byte");
}

#[test]
fn compile_rejects_unknown_format() {
    let result =
        compile_command().try_get_matches_from(["compile", "-p", "ab", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn verbose_count_maps_to_trace_level() {
    let level = |flags: &[&str]| {
        let mut argv = vec!["compile", "-p", "ab"];
        argv.extend_from_slice(flags);
        let m = compile_command().try_get_matches_from(argv).unwrap();
        CompileArgs::from(CompileParams::from_matches(&m)).trace
    };

    assert_eq!(level(&[]), None);
    assert_eq!(level(&["-v"]), Some(Verbosity::Verbose));
    assert_eq!(level(&["-vv"]), Some(Verbosity::VeryVerbose));
    assert_eq!(level(&["-v", "-v", "-v"]), Some(Verbosity::VeryVerbose));
}

#[test]
fn graph_extracts_stage() {
    let m = graph_command()
        .try_get_matches_from(["graph", "-p", "a?b", "--stage", "nfa"])
        .unwrap();
    let args: GraphArgs = GraphParams::from_matches(&m).into();

    assert_eq!(args.pattern, "a?b");
    assert_eq!(args.stage, Stage::Nfa);
    assert!(!args.anchored);
}

#[test]
fn graph_defaults_to_minimized() {
    let m = graph_command()
        .try_get_matches_from(["graph", "-p", "ab"])
        .unwrap();
    let params = GraphParams::from_matches(&m);
    assert_eq!(params.stage, Stage::Minimized);
}

#[test]
fn graph_requires_pattern() {
    let result = graph_command().try_get_matches_from(["graph", "--stage", "dfa"]);
    assert!(result.is_err());
}

#[test]
fn graph_does_not_take_literals() {
    let result = graph_command().try_get_matches_from(["graph", "-l", "abc"]);
    assert!(result.is_err());
}

#[test]
fn scan_accepts_table_source() {
    let m = scan_command()
        .try_get_matches_from(["scan", "--table", "rules.kv", "--input", "hotdog"])
        .unwrap();
    let args: ScanArgs = ScanParams::from_matches(&m).into();

    assert_eq!(args.table, Some(PathBuf::from("rules.kv")));
    assert_eq!(args.pattern, None);
    assert_eq!(args.input_text.as_deref(), Some("hotdog"));
    assert_eq!(args.input_file, None);
    assert_eq!(args.depth, None);
}

#[test]
fn scan_rejects_table_with_pattern() {
    let result = scan_command().try_get_matches_from([
        "scan", "--table", "rules.kv", "-p", "ab", "--input", "ab",
    ]);
    assert!(result.is_err(), "table and pattern are mutually exclusive");
}

#[test]
fn scan_requires_payload() {
    let result = scan_command().try_get_matches_from(["scan", "-p", "ab"]);
    assert!(result.is_err());
}

#[test]
fn scan_rejects_two_payloads() {
    let result = scan_command().try_get_matches_from([
        "scan",
        "-p",
        "ab",
        "--input",
        "ab",
        "--input-file",
        "payload.bin",
    ]);
    assert!(result.is_err());
}

#[test]
fn scan_extracts_depth_and_trace() {
    let m = scan_command()
        .try_get_matches_from([
            "scan",
            "-l",
            "abcd",
            "-l",
            "bc",
            "--input-file",
            "payload.bin",
            "--depth",
            "64",
            "-vv",
        ])
        .unwrap();
    let args: ScanArgs = ScanParams::from_matches(&m).into();

    assert_eq!(args.literals, ["abcd", "bc"]);
    assert_eq!(args.input_file, Some(PathBuf::from("payload.bin")));
    assert_eq!(args.depth, Some(64));
    assert_eq!(args.trace, Some(Verbosity::VeryVerbose));
}

#[test]
fn check_extracts_path() {
    let m = check_command()
        .try_get_matches_from(["check", "rules.sig", "--max-states", "10"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.patterns_path, PathBuf::from("rules.sig"));
    assert_eq!(params.max_states, Some(10));
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_requires_path() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn full_cli_dispatches_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["sigmatch", "graph", "-p", "ab"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "graph");
    assert_eq!(GraphParams::from_matches(sub).pattern, "ab");
}
