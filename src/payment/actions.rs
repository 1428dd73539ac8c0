//! Custom actions for the Payment record: the payment lifecycle and receipts.

/// Custom actions for Payment records.
#[derive(Debug, Clone)]
pub enum PaymentAction {
    /// Completes the payment under a gateway transaction id.
    Process { transaction_id: String },
    /// Refunds a completed payment.
    Refund { reason: String },
    /// Marks a pending payment as failed.
    Fail,
    /// Renders the receipt text.
    Receipt,
}

/// Results from PaymentActions - variants match 1:1 with PaymentAction
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentActionResult {
    Process(bool),
    /// `false` when the payment was not in the Completed state
    Refund(bool),
    Fail(bool),
    Receipt(String),
}
