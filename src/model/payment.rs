use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::framework::{Clock, SystemClock};

/// Lifecycle of a payment: Pending -> Completed -> Refunded, or Pending -> Failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment made by a member.
///
/// `status` and `transaction_id` only change through the lifecycle methods,
/// so a payment can never skip a state.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: u32,
    pub member_id: u32,
    pub amount: f64,
    pub date: NaiveDate,
    status: PaymentStatus,
    pub method: String,
    transaction_id: Option<String>,
    pub description: String,
}

/// Payload for recording a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub member_id: u32,
    pub amount: f64,
    pub method: String,
    pub description: String,
}

/// Payload for correcting a payment's details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentUpdate {
    pub member_id: Option<u32>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub method: Option<String>,
    pub description: Option<String>,
}

impl Payment {
    /// Creates a pending payment dated `today`. Amount and method are not validated.
    pub fn new_on(id: u32, params: PaymentCreate, today: NaiveDate) -> Self {
        Self {
            id,
            member_id: params.member_id,
            amount: params.amount,
            date: today,
            status: PaymentStatus::Pending,
            method: params.method,
            transaction_id: None,
            description: params.description,
        }
    }

    pub fn new(id: u32, params: PaymentCreate) -> Self {
        Self::new_on(id, params, SystemClock.today())
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    /// Marks the payment completed under the gateway's transaction id. Always succeeds.
    pub fn process_payment(&mut self, transaction_id: impl Into<String>) -> bool {
        self.transaction_id = Some(transaction_id.into());
        self.status = PaymentStatus::Completed;
        true
    }

    /// Refunds a completed payment. Any other state is left untouched and yields `false`.
    pub fn refund_payment(&mut self, reason: &str) -> bool {
        if self.status != PaymentStatus::Completed {
            return false;
        }
        self.status = PaymentStatus::Refunded;
        self.description = format!("Refunded: {reason}");
        true
    }

    /// Marks a pending payment as failed. Any other state yields `false`.
    pub fn fail_payment(&mut self) -> bool {
        if self.status != PaymentStatus::Pending {
            return false;
        }
        self.status = PaymentStatus::Failed;
        true
    }

    /// Fixed-layout receipt; the amount always carries two decimals.
    ///
    /// An unprocessed payment has no transaction id and prints `Transaction ID: N/A`.
    pub fn generate_receipt(&self) -> String {
        format!(
            "Receipt\n\
             -------\n\
             Payment ID: {}\n\
             Member ID: {}\n\
             Amount: ${}\n\
             Date: {}\n\
             Status: {}\n\
             Payment Method: {}\n\
             Transaction ID: {}\n\
             Description: {}\n",
            self.id,
            self.member_id,
            format_amount(self.amount),
            self.date,
            self.status,
            self.method,
            self.transaction_id.as_deref().unwrap_or("N/A"),
            self.description
        )
    }
}

/// Renders `amount` with two decimals, rounding half away from zero on the
/// shortest decimal form of the value, so `0.125` prints as `0.13`.
fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    // f64's Display gives the shortest round-trip digits and never an exponent.
    let shortest = amount.abs().to_string();
    let (whole, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let cents = digits.split_off(digits.len() - 2);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let whole: String = digits.iter().map(|&d| char::from(d)).collect();
    let cents: String = cents.iter().map(|&d| char::from(d)).collect();
    format!("{sign}{whole}.{cents}")
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Payment {}

impl Hash for Payment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment #{} member #{} ${:.2} on {} [{}] via {}",
            self.id, self.member_id, self.amount, self.date, self.status, self.method
        )?;
        if let Some(txn) = &self.transaction_id {
            write!(f, " txn {txn}")?;
        }
        Ok(())
    }
}
