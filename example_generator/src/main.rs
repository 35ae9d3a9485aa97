use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Generate example XML for an element defined in an XSD schema.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the XSD schema file
    schema: PathBuf,
    /// Name of the element to generate
    element: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match examplegen::generate_from_file(&cli.schema, &cli.element) {
        Ok(xml) => {
            println!("{xml}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error generating XML: {err}");
            ExitCode::FAILURE
        }
    }
}
