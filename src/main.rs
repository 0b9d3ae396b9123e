//! csv-alias CLI - extract emails from CSV files and generate aliases

use clap::Parser;
use csv_alias::{export, AliasProcessor, Extraction};
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract names and email addresses from a CSV file and generate alias
/// addresses.
///
/// Works on files with or without header rows: the first row is treated as
/// a header unless it contains an email address itself.
#[derive(Parser, Debug)]
#[command(name = "csv-alias")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file to process
    file: PathBuf,

    /// Output path for the generated CSV (default: email_aliases.csv)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Print the generated CSV to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Output format for the summary: text (default) or json
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// List every extracted record in the summary
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error processing {}: {}", args.file.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let processor = AliasProcessor::new();
    let extraction = processor.process_path(&args.file)?;

    if args.stdout {
        print!("{}", export::records_to_csv_string(&extraction.records)?);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export::EXPORT_FILE_NAME));
    export::write_records_to_path(&output, &extraction.records)?;

    match args.format {
        OutputFormat::Text => print_text_summary(args, &extraction, &output),
        OutputFormat::Json => print_json_summary(args, &extraction, &output),
    }

    Ok(())
}

fn print_text_summary(args: &Args, extraction: &Extraction, output: &PathBuf) {
    println!("File: {}", args.file.display());
    println!("  Mode: {}", extraction.mode);
    println!("  Emails found: {}", extraction.emails_found);
    println!("  Output: {}", output.display());

    if args.verbose {
        println!("  Records:");
        for record in &extraction.records {
            println!(
                "    {}: {} {} <{}> -> {}",
                record.id,
                record.first_name,
                record.last_name,
                record.original_email,
                record.alias_email
            );
        }
    }
}

fn print_json_summary(args: &Args, extraction: &Extraction, output: &PathBuf) {
    print!(
        r#"{{"file":"{}","mode":"{}","emails_found":{},"output":"{}""#,
        args.file.display(),
        extraction.mode,
        extraction.emails_found,
        output.display()
    );

    if args.verbose {
        print!(r#","records":["#);
        for (i, record) in extraction.records.iter().enumerate() {
            if i > 0 {
                print!(",");
            }
            print!(
                r#"{{"id":{},"first_name":"{}","last_name":"{}","original_email":"{}","alias_email":"{}"}}"#,
                record.id,
                record.first_name,
                record.last_name,
                record.original_email,
                record.alias_email
            );
        }
        print!("]");
    }

    println!("}}");
}
