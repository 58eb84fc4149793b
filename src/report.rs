use std::io::{self, Write};

use crate::customer::{Customer, CustomerId, Transaction};

const RULE: &str = "------------------------------";

/// Writes the customer profile, RFM metrics and each transaction to `out`.
pub fn write_customer_report<W: Write>(
    out: &mut W,
    customer_id: CustomerId,
    customer: Option<&Customer>,
) -> io::Result<()> {
    let Some(customer) = customer else {
        writeln!(out, "Customer with ID {} not found.", customer_id)?;
        return Ok(());
    };

    writeln!(out, "Customer ID: {}", customer.customer_id)?;
    writeln!(out, "Age: {}", customer.age)?;
    writeln!(out, "Gender: {}", customer.gender)?;
    writeln!(out, "Loyalty Member: {}", customer.is_loyalty_member)?;
    writeln!(out, "Total Transactions: {}", customer.transactions().len())?;

    if customer.transactions().is_empty() {
        writeln!(out, "No transactions recorded for customer {}; RFM unavailable.", customer.customer_id)?;
        return Ok(());
    }

    match customer.rfm() {
        Some(rfm) => {
            writeln!(out, "Recency: {} days", rfm.recency)?;
            writeln!(out, "Frequency: {}", rfm.frequency)?;
            writeln!(out, "Monetary: $ {:.2}", rfm.monetary)?;
        }
        None => writeln!(out, "RFM: not calculated")?,
    }
    writeln!(out)?;

    for (i, transaction) in customer.transactions().iter().enumerate() {
        write_transaction(out, i + 1, transaction)?;
    }
    Ok(())
}

fn write_transaction<W: Write>(out: &mut W, number: usize, t: &Transaction) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "        Transaction {}", number)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  Product Type: {}", t.product_type)?;
    writeln!(out, "  SKU: {}", t.sku)?;
    writeln!(out, "  Rating: {:?}", t.rating)?;
    writeln!(out, "  Order Status: {}", t.order_status)?;
    writeln!(out, "  Payment Method: {}", t.payment_method)?;
    writeln!(out, "  Total Price: $ {:.2}", t.total_price)?;
    writeln!(out, "  Unit Price: $ {:.2}", t.unit_price)?;
    writeln!(out, "  Quantity: {} pcs", t.quantity)?;
    writeln!(out, "  Purchase Date: {}", t.purchase_date)?;
    writeln!(out, "  Shipping Type: {}", t.shipping_type)?;
    writeln!(out, "  Add-ons Purchased: {}", t.add_ons_purchased)?;
    writeln!(out, "  Add-on Total: $ {:.2}", t.add_on_total)?;
    writeln!(out)
}
