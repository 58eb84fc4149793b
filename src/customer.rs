use chrono::NaiveDate;

pub type CustomerId = i32;

/// One purchase line. Never modified after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub product_type: String,
    pub sku: String,
    pub rating: f64,
    pub order_status: String,
    pub payment_method: String,
    pub total_price: f64,
    pub unit_price: f64,
    pub quantity: i32,
    pub purchase_date: NaiveDate,
    pub shipping_type: String,
    pub add_ons_purchased: String,
    pub add_on_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rfm {
    /// Days between the latest purchase and the reference date.
    pub recency: i64,
    pub frequency: usize,
    pub monetary: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub age: i32,
    pub gender: String,
    pub is_loyalty_member: bool,
    transactions: Vec<Transaction>,
    rfm: Option<Rfm>,
}

impl Customer {
    pub fn new(customer_id: CustomerId, age: i32, gender: String, is_loyalty_member: bool) -> Self {
        Customer {
            customer_id,
            age,
            gender,
            is_loyalty_member,
            transactions: Vec::new(),
            rfm: None,
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Result of the last `calculate_rfm` that had data, if any.
    pub fn rfm(&self) -> Option<&Rfm> {
        self.rfm.as_ref()
    }

    /// Recomputes recency, frequency and monetary from the full transaction list.
    ///
    /// Returns `None` and leaves any previous values in place when the customer
    /// has no transactions. Recency goes negative if `as_of` precedes the
    /// latest purchase.
    pub fn calculate_rfm(&mut self, as_of: NaiveDate) -> Option<Rfm> {
        let last_purchase = self.transactions.iter().map(|t| t.purchase_date).max()?;

        let rfm = Rfm {
            recency: as_of.signed_duration_since(last_purchase).num_days(),
            frequency: self.transactions.len(),
            monetary: self.transactions.iter().map(|t| t.total_price).sum(),
        };
        self.rfm = Some(rfm);
        Some(rfm)
    }
}
