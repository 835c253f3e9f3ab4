use std::{error::Error, path::PathBuf, process::exit};

use clap::{ArgGroup, Parser};

use fintrack::{
    CsvRecordSource, RecordSource, ReportConfig, SqliteRecordSource, generate_reports,
    setup_logging,
};

/// Generates the monthly financial report for a business.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["csv", "db"])))]
struct Args {
    /// File path to a CSV export of the business transactions.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// File path to a SQLite database with a `business` table.
    #[arg(long)]
    db: Option<PathBuf>,

    /// The directory to write the reports to.
    #[arg(short, long, default_value = "reports")]
    output_dir: PathBuf,

    /// The title shown at the top of the report.
    #[arg(long)]
    title: Option<String>,

    /// The company name shown under the title.
    #[arg(long)]
    company: Option<String>,

    /// Also write debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    setup_logging(args.log_file.as_deref())?;

    let source: Box<dyn RecordSource> = match (&args.csv, &args.db) {
        (Some(path), _) => Box::new(CsvRecordSource::new(path)),
        (None, Some(path)) => {
            if !path.is_file() {
                eprintln!("No database found at {path:#?}");
                exit(1);
            }

            Box::new(SqliteRecordSource::new(path))
        }
        (None, None) => unreachable!("clap requires one of --csv or --db"),
    };

    let mut config = ReportConfig::with_output_dir(args.output_dir);

    if let Some(title) = args.title {
        config.title = title;
    }

    if let Some(company) = args.company {
        config.company_name = company;
    }

    let records = source.fetch_records()?;
    let outcome = generate_reports(&records, &config)?;

    if outcome.files.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    for file in &outcome.files {
        println!("Wrote {}", file.display());
    }

    let drops = &outcome.summary.drops;
    if !drops.is_empty() {
        println!(
            "Left out of the totals: {} record(s) with an unrecognised month, \
            {} record(s) that are neither income nor expense.",
            drops.unrecognized_month, drops.unrecognized_type
        );
    }

    Ok(())
}
