//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use sigmatch_compiler::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compile::{CompileArgs, TableFormat};
use crate::commands::graph::{GraphArgs, Stage};
use crate::commands::scan::ScanArgs;

/// Signature and compile flags shared by `compile` and `scan`.
pub struct SignatureParams {
    pub pattern: Option<String>,
    pub literals: Vec<String>,
    pub literals_file: Option<PathBuf>,
    pub anchored: bool,
    pub minimize: bool,
    pub pattern_id: u8,
    pub max_states: Option<usize>,
}

impl SignatureParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            literals: m
                .get_many::<String>("literal")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            literals_file: m.get_one::<PathBuf>("literals_file").cloned(),
            anchored: m.get_flag("anchored"),
            minimize: !m.get_flag("no_minimize"),
            pattern_id: m.get_one::<u8>("id").copied().unwrap_or(1),
            max_states: m.get_one::<usize>("max_states").copied(),
        }
    }
}

pub struct CompileParams {
    pub signature: SignatureParams,
    pub format: TableFormat,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            signature: SignatureParams::from_matches(m),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        let s = p.signature;
        Self {
            pattern: s.pattern,
            literals: s.literals,
            literals_file: s.literals_file,
            anchored: s.anchored,
            minimize: s.minimize,
            pattern_id: s.pattern_id,
            max_states: s.max_states,
            format: p.format,
            output: p.output,
            color: p.color.should_colorize(),
            trace: trace_level(p.verbose),
        }
    }
}

pub struct GraphParams {
    pub pattern: String,
    pub stage: Stage,
    pub anchored: bool,
    pub max_states: Option<usize>,
    pub output: Option<PathBuf>,
}

impl GraphParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            stage: parse_stage(m),
            anchored: m.get_flag("anchored"),
            max_states: m.get_one::<usize>("max_states").copied(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<GraphParams> for GraphArgs {
    fn from(p: GraphParams) -> Self {
        Self {
            pattern: p.pattern,
            stage: p.stage,
            anchored: p.anchored,
            max_states: p.max_states,
            output: p.output,
        }
    }
}

pub struct ScanParams {
    pub table: Option<PathBuf>,
    pub signature: SignatureParams,
    pub input_text: Option<String>,
    pub input_file: Option<PathBuf>,
    pub depth: Option<usize>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl ScanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table: m.get_one::<PathBuf>("table").cloned(),
            signature: SignatureParams::from_matches(m),
            input_text: m.get_one::<String>("input_text").cloned(),
            input_file: m.get_one::<PathBuf>("input_file").cloned(),
            depth: m.get_one::<usize>("depth").copied(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ScanParams> for ScanArgs {
    fn from(p: ScanParams) -> Self {
        let s = p.signature;
        Self {
            table: p.table,
            pattern: s.pattern,
            literals: s.literals,
            literals_file: s.literals_file,
            anchored: s.anchored,
            minimize: s.minimize,
            pattern_id: s.pattern_id,
            max_states: s.max_states,
            input_text: p.input_text,
            input_file: p.input_file,
            depth: p.depth,
            color: p.color.should_colorize(),
            trace: trace_level(p.verbose),
        }
    }
}

pub struct CheckParams {
    pub patterns_path: PathBuf,
    pub max_states: Option<usize>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_path: m
                .get_one::<PathBuf>("patterns_path")
                .cloned()
                .unwrap_or_default(),
            max_states: m.get_one::<usize>("max_states").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            patterns_path: p.patterns_path,
            max_states: p.max_states,
            color: p.color.should_colorize(),
        }
    }
}

/// Tracing stays off without `-v`.
fn trace_level(count: u8) -> Option<Verbosity> {
    (count > 0).then(|| Verbosity::from_count(count))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> TableFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => TableFormat::Json,
        Some("kv") => TableFormat::Kv,
        Some("dump") => TableFormat::Dump,
        _ => TableFormat::Text,
    }
}

fn parse_stage(m: &ArgMatches) -> Stage {
    match m.get_one::<String>("stage").map(|s| s.as_str()) {
        Some("nfa") => Stage::Nfa,
        Some("dfa") => Stage::Dfa,
        _ => Stage::Minimized,
    }
}
