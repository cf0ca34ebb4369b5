use std::path::Path;
use std::process::ExitCode;

use qtvr_mosaic::{run, Codecs, ExitOutcome};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: qtvr-mosaic FILE");
        return ExitCode::FAILURE;
    };

    let codecs = Codecs::default();
    match run(Path::new(&path), Path::new("."), &codecs) {
        Ok(ExitOutcome::Wrote { kind, paths }) => {
            eprintln!("{kind:?}: wrote {} mosaic page(s)", paths.len());
            ExitCode::SUCCESS
        }
        Ok(ExitOutcome::NotQtvr) => {
            eprintln!("{path}: not a QTVR 1 movie");
            ExitCode::SUCCESS
        }
        Ok(ExitOutcome::UnsupportedVersion(id)) => {
            eprintln!("{path}: QTVR version '{id}' not supported");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            ExitCode::FAILURE
        }
    }
}
