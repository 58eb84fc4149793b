use chrono::NaiveDate;
use csv::StringRecord;
use log::warn;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::customer::{Customer, CustomerId, Transaction};
use crate::error::{IngestError, IngestResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A purchase line as it appears in the file, fields taken by position.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerRow {
    #[serde(skip)]
    pub line: u64,
    pub customer_id: String,
    pub age: String,
    pub gender: String,
    pub is_loyalty_member: String,
    pub product_type: String,
    pub sku: String,
    pub rating: String,
    pub order_status: String,
    pub payment_method: String,
    pub total_price: String,
    pub unit_price: String,
    pub quantity: String,
    pub purchase_date: String,
    pub shipping_type: String,
    pub add_ons_purchased: String,
    pub add_on_total: String,
}

impl CustomerRow {
    pub fn customer_id(&self) -> IngestResult<CustomerId> {
        parse_int("customer id", self.line, &self.customer_id)
    }

    /// Builds a customer with no transactions from the demographic columns.
    pub fn to_customer(&self) -> IngestResult<Customer> {
        Ok(Customer::new(
            self.customer_id()?,
            parse_int("age", self.line, &self.age)?,
            self.gender.clone(),
            parse_bool(&self.is_loyalty_member),
        ))
    }

    pub fn to_transaction(&self) -> IngestResult<Transaction> {
        Ok(Transaction {
            product_type: self.product_type.clone(),
            sku: self.sku.clone(),
            rating: parse_lenient("rating", self.line, &self.rating),
            order_status: self.order_status.clone(),
            payment_method: self.payment_method.clone(),
            total_price: parse_lenient("total price", self.line, &self.total_price),
            unit_price: parse_lenient("unit price", self.line, &self.unit_price),
            quantity: parse_int("quantity", self.line, &self.quantity)?,
            purchase_date: parse_date(self.line, &self.purchase_date)?,
            shipping_type: self.shipping_type.clone(),
            add_ons_purchased: self.add_ons_purchased.clone(),
            add_on_total: parse_lenient("add-on total", self.line, &self.add_on_total),
        })
    }
}

fn parse_int(field: &'static str, line: u64, value: &str) -> IngestResult<i32> {
    value.parse().map_err(|_| IngestError::InvalidInteger {
        field,
        line,
        value: value.to_string(),
    })
}

fn parse_lenient(field: &'static str, line: u64, value: &str) -> f64 {
    match value.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("Line {}: {} '{}' is not a number, using 0.0", line, field, value);
            0.0
        }
    }
}

/// Parses a `YYYY-MM-DD` date, rejecting anything that does not format back
/// to the same text (one-digit months or days, signed or extended years).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
}

fn parse_date(line: u64, value: &str) -> IngestResult<NaiveDate> {
    parse_calendar_date(value).ok_or_else(|| IngestError::InvalidDate {
        line,
        value: value.to_string(),
    })
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Opens the purchase file at `path` and returns its data rows, header skipped.
pub fn load_csv_file(path: impl AsRef<Path>) -> IngestResult<impl Iterator<Item = IngestResult<CustomerRow>>> {
    let file = File::open(path)?;
    Ok(read_rows(file))
}

/// Reads purchase rows from any reader. Whitespace around fields is trimmed
/// and invalid UTF-8 is replaced rather than rejected.
pub fn read_rows<R: io::Read>(reader: R) -> impl Iterator<Item = IngestResult<CustomerRow>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_byte_records()
        .map(|result| -> IngestResult<CustomerRow> {
            let record = result?;
            let fields: StringRecord = record.iter().map(String::from_utf8_lossy).collect();
            let mut row: CustomerRow = fields.deserialize(None)?;
            row.line = record.position().map_or(0, |position| position.line());
            Ok(row)
        })
}
