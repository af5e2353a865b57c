//! Graphviz export of one compile stage.

use std::path::PathBuf;

use sigmatch_compiler::compile_pattern;
use sigmatch_compiler::dot::{dfa_to_dot, nfa_to_dot};

use super::compile::write_output;
use super::input::{Signature, compile_options, exit_with, render_error};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    Nfa,
    Dfa,
    #[default]
    Minimized,
}

pub struct GraphArgs {
    pub pattern: String,
    pub stage: Stage,
    pub anchored: bool,
    pub max_states: Option<usize>,
    pub output: Option<PathBuf>,
}

pub fn run(args: GraphArgs) {
    let minimize = args.stage == Stage::Minimized;
    let options = compile_options(args.anchored, minimize, 1, args.max_states);
    let compilation = match compile_pattern(&args.pattern, &options) {
        Ok(c) => c,
        Err(e) => {
            let signature = Signature::Pattern(args.pattern);
            eprintln!("{}", render_error(&e, &signature, false));
            std::process::exit(1);
        }
    };

    let dot = match args.stage {
        Stage::Nfa => nfa_to_dot(compilation.nfa()),
        Stage::Dfa => dfa_to_dot(compilation.dfa()),
        Stage::Minimized => dfa_to_dot(compilation.automaton()),
    };

    if let Err(e) = write_output(args.output.as_deref(), dot.as_bytes()) {
        exit_with(e);
    }
}
