use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = bundler::init() {
        eprintln!("warning: {err:#}");
    }

    bundler::cli::run(std::env::args_os())
}
