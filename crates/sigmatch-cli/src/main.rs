mod cli;
mod commands;

use cli::{CheckParams, CompileParams, GraphParams, ScanParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("graph", m)) => {
            let params = GraphParams::from_matches(m);
            commands::graph::run(params.into());
        }
        Some(("scan", m)) => {
            let params = ScanParams::from_matches(m);
            commands::scan::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
