use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::csv_handler::parse_calendar_date;
use crate::customer::CustomerId;

/// Computes recency, frequency and monetary loyalty metrics for one customer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the purchase CSV file
    #[arg(short, long)]
    pub input: String,

    /// Customer to report on
    #[arg(short, long)]
    pub customer_id: CustomerId,

    /// Reference date for recency, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,
}

impl Args {
    pub fn reference_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(value).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "loyalty_tracker",
            "--input",
            "purchases.csv",
            "--customer-id",
            "19957",
            "--as-of",
            "2024-06-30",
        ])
        .unwrap();

        assert_eq!(args.input, "purchases.csv");
        assert_eq!(args.customer_id, 19957);
        assert_eq!(args.reference_date(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn test_reference_date_defaults_to_today() {
        let args = Args::try_parse_from(["loyalty_tracker", "-i", "purchases.csv", "-c", "1"]).unwrap();

        assert_eq!(args.as_of, None);
        assert_eq!(args.reference_date(), Local::now().date_naive());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Args::try_parse_from(["loyalty_tracker", "-i", "p.csv", "-c", "abc"]).is_err());
        assert!(Args::try_parse_from(["loyalty_tracker", "-i", "p.csv", "-c", "1", "--as-of", "30/06/2024"]).is_err());
        assert!(Args::try_parse_from(["loyalty_tracker", "-i", "p.csv", "-c", "1", "--as-of", "2024-6-30"]).is_err());
        assert!(Args::try_parse_from(["loyalty_tracker", "-i", "p.csv"]).is_err());
    }
}
