mod cli;
mod commands;

use cli::{
    CheckParams, DumpParams, ExecParams, ExportParams, LoadParams, PostfixParams, StatsParams,
    SuiteParams, TraceParams, build_cli,
};

fn main() {
    // RUST_LOG=debug shows compiler decisions; warnings only by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("postfix", m)) => {
            let params = PostfixParams::from_matches(m);
            commands::postfix::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        Some(("suite", m)) => {
            let params = SuiteParams::from_matches(m);
            commands::suite::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into());
        }
        Some(("export", m)) => {
            let params = ExportParams::from_matches(m);
            commands::export::run(params.into());
        }
        Some(("load", m)) => {
            let params = LoadParams::from_matches(m);
            commands::load::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
