//! Command-line surface.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::app::bundle::Bundler;
use crate::domain::errors::BundleError;
use crate::domain::model::BundleRequest;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Embed files as C byte arrays in a generated header",
    long_about = None
)]
pub struct Cli {
    /// Header file to generate (created or truncated)
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Files to embed, in order; the Nth file becomes `bundle<N>`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    pub fn into_request(self) -> BundleRequest {
        BundleRequest::new(self.output, self.inputs)
    }
}

/// Parse `args` (program name first) and run the bundler, returning the
/// process exit status. Failures are reported as a single line on stderr.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::debug!(error = %err, "invalid arguments");
            return report(&BundleError::Usage { program });
        }
    };

    match Bundler::new()
        .with_program(program)
        .execute(&cli.into_request())
    {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &BundleError) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
