//! Entity trait implementation for the Payment record.
//!
//! Lifecycle transitions that are refused (refunding a pending payment, failing a
//! completed one) are reported as `false` results, not errors.

use crate::framework::{Context, Entity};
use crate::model::{Payment, PaymentCreate, PaymentUpdate};

use super::actions::{PaymentAction, PaymentActionResult};

impl Entity for Payment {
    type Id = u32;
    type CreateParams = PaymentCreate;
    type UpdateParams = PaymentUpdate;
    type Action = PaymentAction;
    type ActionResult = PaymentActionResult;

    fn from_create_params(id: u32, params: PaymentCreate, ctx: &Context<'_>) -> Result<Self, String> {
        Ok(Payment::new_on(id, params, ctx.today))
    }

    /// Corrects payment details. Status and transaction id are not updatable.
    fn on_update(&mut self, update: PaymentUpdate, _ctx: &Context<'_>) -> Result<(), String> {
        if let Some(member_id) = update.member_id {
            self.member_id = member_id;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(method) = update.method {
            self.method = method;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: PaymentAction, _ctx: &Context<'_>) -> Result<PaymentActionResult, String> {
        match action {
            PaymentAction::Process { transaction_id } => {
                Ok(PaymentActionResult::Process(self.process_payment(transaction_id)))
            }
            PaymentAction::Refund { reason } => Ok(PaymentActionResult::Refund(self.refund_payment(&reason))),
            PaymentAction::Fail => Ok(PaymentActionResult::Fail(self.fail_payment())),
            PaymentAction::Receipt => Ok(PaymentActionResult::Receipt(self.generate_receipt())),
        }
    }
}
