use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Month};

use fintrack::{
    CanonicalMonth, RawMonth, RawTransactionRecord, create_business_table, insert_record,
};

/// A utility for creating a test database for fintrack.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The year to generate transactions for.
    #[arg(long, default_value_t = 2024)]
    year: i32,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    create_business_table(&conn)?;

    println!("Creating test transactions...");

    let mut count = 0;

    for month_number in 1..=12u8 {
        let month = Month::try_from(month_number)?;

        // Alternate between numeric and named months like the real data does.
        let raw_month = if month_number % 2 == 0 {
            RawMonth::Number(i64::from(month_number))
        } else {
            RawMonth::Text(CanonicalMonth::from(month).name().to_owned())
        };

        let entries = [
            ("income", "Consulting", "Monthly retainer", "Acme Corp", 4500.0),
            ("expense", "Rent", "Office rent", "City Properties", 1200.0),
            ("expense", "Software", "Subscriptions", "Various", 85.5),
        ];

        for (day, (kind, category, description, counterparty, net_amount)) in
            (1u8..).zip(entries)
        {
            let tax_rate: f64 = if kind == "expense" { 0.13 } else { 0.0 };
            let tax_amount = (net_amount * tax_rate * 100.0).round() / 100.0;

            let record = RawTransactionRecord {
                date: Some(Date::from_calendar_date(args.year, month, day)?),
                month: Some(raw_month.clone()),
                transaction_type: Some(kind.to_owned()),
                category: Some(category.to_owned()),
                description: Some(description.to_owned()),
                counterparty: Some(counterparty.to_owned()),
                net_amount: Some(net_amount),
                tax_rate: Some(tax_rate),
                tax_amount: Some(tax_amount),
                amount: Some(net_amount + tax_amount),
            };

            insert_record(&record, &conn)?;
            count += 1;
        }

        // Office supplies only in the second half of the year so the report
        // has some empty months to fill in.
        if month_number > 6 {
            let record = RawTransactionRecord {
                date: Some(Date::from_calendar_date(args.year, month, 15)?),
                month: Some(raw_month),
                transaction_type: Some("expense".to_owned()),
                category: Some("Office Supplies".to_owned()),
                description: Some("Printer paper".to_owned()),
                counterparty: Some("Staples".to_owned()),
                net_amount: Some(40.0),
                tax_rate: Some(0.13),
                tax_amount: Some(5.2),
                amount: Some(45.2),
            };

            insert_record(&record, &conn)?;
            count += 1;
        }
    }

    println!("Inserted {count} transactions.");
    println!("Success!");

    Ok(())
}
