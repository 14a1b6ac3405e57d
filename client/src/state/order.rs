//! Order form state: draft fields plus submission status.
//!
//! DESIGN
//! ======
//! The component keeps one `RwSignal<OrderForm>` and drives it through
//! `begin_submit` / `finish`. Validation failures never produce a request,
//! failed deliveries keep the draft so the user can retry, and only a
//! successful delivery clears the fields.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use crate::net::api::SubmitError;
use crate::net::types::LeadRequest;

pub const SUCCESS_MESSAGE: &str = "Buyurtmangiz yuborildi!";

/// Delay before the modal closes itself after a successful submission.
pub const CLOSE_AFTER_SUCCESS_MS: u32 = 1200;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub full_name: String,
    pub phone: String,
    pub note: String,
}

impl OrderDraft {
    /// Build the wire request for this draft.
    #[must_use]
    pub fn to_request(&self, product_label: Option<&str>) -> LeadRequest {
        LeadRequest {
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            note: Some(self.note.clone()).filter(|n| !n.trim().is_empty()),
            product_label: product_label.map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub draft: OrderDraft,
    pub status: SubmitStatus,
}

impl OrderForm {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// Returns the request to send, or `None` when a submission is already in
    /// flight or validation failed (the status then carries the message).
    pub fn begin_submit(&mut self, product_label: Option<&str>) -> Option<LeadRequest> {
        if self.is_submitting() {
            return None;
        }
        let request = self.draft.to_request(product_label);
        if let Err(err) = request.validate() {
            self.status = SubmitStatus::Failed(err.message());
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(request)
    }

    /// Record the outcome of a submission started with `begin_submit`.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.draft = OrderDraft::default();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => self.status = SubmitStatus::Failed(err.message()),
        }
    }

    /// Close request from the user. Ignored while a submission is in flight;
    /// otherwise clears transient messages and keeps the draft.
    pub fn request_close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&'static str> {
        (self.status == SubmitStatus::Succeeded).then_some(SUCCESS_MESSAGE)
    }
}
