use chrono::NaiveDate;
use log::{debug, info, trace};

use crate::csv_handler::CustomerRow;
use crate::customer::{Customer, CustomerId, Rfm};
use crate::customer_index::CustomerIndex;
use crate::error::IngestResult;

/// Follows a single customer through a purchase file, collecting their
/// transactions and computing RFM metrics for them.
#[derive(Debug)]
pub struct LoyaltyTracker {
    target_customer_id: CustomerId,
    customers: CustomerIndex,
}

impl LoyaltyTracker {
    pub fn new(target_customer_id: CustomerId) -> Self {
        LoyaltyTracker {
            target_customer_id,
            customers: CustomerIndex::default(),
        }
    }

    pub fn target_customer_id(&self) -> CustomerId {
        self.target_customer_id
    }

    /// Consumes rows until the input ends or a row fails, returning how many
    /// rows belonged to the target customer.
    ///
    /// On error everything ingested before the failing row stays in place.
    pub fn load_transactions(&mut self, rows: impl Iterator<Item = IngestResult<CustomerRow>>) -> IngestResult<usize> {
        let mut ingested = 0;
        for row in rows {
            let row = row?;
            let customer_id = row.customer_id()?;
            if customer_id != self.target_customer_id {
                trace!("Line {}: skipping customer {}", row.line, customer_id);
                continue;
            }

            let transaction = row.to_transaction()?;
            if self.customers.search(customer_id).is_none() {
                self.customers.insert(row.to_customer()?);
            }
            debug!(
                "Line {}: customer {} purchased on {} for {:.2}",
                row.line, customer_id, transaction.purchase_date, transaction.total_price
            );
            self.customers
                .search_mut(customer_id)
                .expect("customer is indexed before its transactions are added")
                .add_transaction(transaction);
            ingested += 1;
        }
        info!(
            "Ingested {} transactions for customer {} ({} customers indexed)",
            ingested,
            self.target_customer_id,
            self.customers.len()
        );
        debug!(
            "Indexed customer ids: {:?}",
            self.customers.iter().map(|c| c.customer_id).collect::<Vec<_>>()
        );
        Ok(ingested)
    }

    /// Recalculates RFM for the target customer as of `as_of`.
    ///
    /// `None` when the customer was never seen or has no transactions.
    pub fn calculate_rfm(&mut self, as_of: NaiveDate) -> Option<Rfm> {
        let Some(customer) = self.customers.search_mut(self.target_customer_id) else {
            info!("Customer {} not found, nothing to calculate", self.target_customer_id);
            return None;
        };
        let rfm = customer.calculate_rfm(as_of);
        match rfm {
            Some(rfm) => info!(
                "RFM for customer {} as of {}: recency {} days, frequency {}, monetary {:.2}",
                customer.customer_id, as_of, rfm.recency, rfm.frequency, rfm.monetary
            ),
            None => info!("No transactions for customer {} to calculate RFM", customer.customer_id),
        }
        rfm
    }

    pub fn target_customer(&self) -> Option<&Customer> {
        self.customers.search(self.target_customer_id)
    }

    pub fn customers(&self) -> &CustomerIndex {
        &self.customers
    }
}
