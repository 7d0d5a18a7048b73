//! Printable receipt
//!
//! Turns an order into a fixed-width text document the cashier can send
//! to any printer. Amounts use the backend's convention: subtotal is the
//! order total, tax is added on top at a fixed rate.

use shared::models::Order;

/// Tax rate applied on top of the order subtotal
pub const TAX_RATE: f64 = 0.015;

/// One printed line item
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i32,
    pub amount: f64,
}

/// Printable receipt for a single order
#[derive(Debug, Clone)]
pub struct Receipt {
    pub order_id: i64,
    pub table_number: Option<String>,
    pub created_at: String,
    pub payment_method: Option<String>,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Receipt {
    pub fn for_order(order: &Order) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| ReceiptLine {
                name: item.name.clone(),
                quantity: item.quantity,
                amount: item.line_total(),
            })
            .collect();

        let subtotal = order.total_amount;
        let tax = round2(subtotal * TAX_RATE);

        Self {
            order_id: order.id,
            table_number: order.table_number.clone(),
            created_at: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
            payment_method: order.payment_method.clone(),
            lines,
            subtotal,
            tax,
            total: round2(subtotal + tax),
        }
    }

    /// Render the receipt at the given character width
    pub fn render(&self, width: usize) -> String {
        let mut out = String::new();
        let rule = "-".repeat(width);

        out.push_str(&line_lr(
            &format!("ORDER #{}", self.order_id),
            &self.created_at,
            width,
        ));
        if let Some(table) = &self.table_number {
            out.push_str(&line_lr(&format!("Table {}", table), "", width));
        }
        out.push_str(&rule);
        out.push('\n');

        for line in &self.lines {
            out.push_str(&line_lr(
                &format!("{} x{}", line.name, line.quantity),
                &format!("{:.2}", line.amount),
                width,
            ));
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&line_lr("Subtotal", &format!("{:.2}", self.subtotal), width));
        out.push_str(&line_lr("Tax", &format!("{:.2}", self.tax), width));
        out.push_str(&line_lr("Total", &format!("{:.2}", self.total), width));

        if let Some(method) = &self.payment_method {
            out.push_str(&line_lr("Paid by", method, width));
        }

        out
    }
}

/// Left and right text on one line, padded apart to the given width
fn line_lr(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}\n", left, " ".repeat(gap), right)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
