use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::time::Instant;

use calicube::{export_model, generate_cube};

/// Generate a labelled calibration cube as an STL or STEP file
///
/// The cube size is engraved on the +X face, the tube size on the -X face
/// and the cube number on the +Y face. The cube rests on Z = 0.
///
/// Example:
///   calicube my_cube stl 1 2.397 0.595
#[derive(Parser, Debug)]
#[command(name = "calicube")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Output file name without extension
    filename: String,

    /// Output format: stl or step
    format: String,

    /// Cube number, engraved on the +Y face
    cube_number: i64,

    /// Cube edge length in mm, engraved on the +X face
    cube_size: f64,

    /// Tube size in mm, engraved on the -X face
    tube_size: f64,
}

#[derive(Debug)]
enum Invocation {
    Run(Args),
    Usage,
}

/// Parse the command line; a wrong number of arguments means "show usage"
fn parse_args<I, T>(args: I) -> std::result::Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(Invocation::Run(args)),
        Err(e) if is_arity_error(e.kind()) => Ok(Invocation::Usage),
        Err(e) => Err(e),
    }
}

fn is_arity_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn print_usage() {
    println!("Usage: calicube <filename> <format> <cube_number> <cube_size> <tube_size>");
    println!("Example: calicube my_cube stl 1 2.397 0.595");
}

fn main() -> Result<()> {
    init_tracing();

    let args = match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Usage) => {
            print_usage();
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    let start = Instant::now();
    let spinner = create_spinner("Generating cube...");
    let cube = generate_cube(args.cube_number, args.cube_size, args.tube_size);
    spinner.finish_and_clear();
    let cube = cube.with_context(|| {
        format!(
            "Failed to generate cube {} (size {}, tube {})",
            args.cube_number, args.cube_size, args.tube_size
        )
    })?;
    tracing::debug!(
        faces = cube.face_iter().count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "cube generated"
    );

    export_model(&cube, &args.filename, &args.format)?;

    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_arguments_run() {
        let parsed = parse_args(["calicube", "my_cube", "stl", "1", "2.397", "0.595"]).unwrap();
        match parsed {
            Invocation::Run(args) => {
                assert_eq!(args.filename, "my_cube");
                assert_eq!(args.format, "stl");
                assert_eq!(args.cube_number, 1);
                assert_eq!(args.cube_size, 2.397);
                assert_eq!(args.tube_size, 0.595);
            }
            Invocation::Usage => panic!("expected a run"),
        }
    }

    #[test]
    fn test_wrong_argument_count_shows_usage() {
        let cases: [&[&str]; 4] = [
            &["calicube"],
            &["calicube", "my_cube"],
            &["calicube", "my_cube", "stl", "1", "2.397"],
            &["calicube", "my_cube", "stl", "1", "2.397", "0.595", "extra"],
        ];
        for case in cases {
            assert!(matches!(parse_args(case.iter().copied()), Ok(Invocation::Usage)));
        }
    }

    #[test]
    fn test_negative_numbers_are_values() {
        let parsed = parse_args(["calicube", "c", "stl", "-3", "2.0", "-0.5"]).unwrap();
        match parsed {
            Invocation::Run(args) => {
                assert_eq!(args.cube_number, -3);
                assert_eq!(args.tube_size, -0.5);
            }
            Invocation::Usage => panic!("expected a run"),
        }
    }

    #[test]
    fn test_bad_number_is_a_parse_error() {
        let err = parse_args(["calicube", "c", "stl", "one", "2.0", "0.5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
