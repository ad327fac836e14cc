//! Editable configuration behind the panel's form.

use chrono::NaiveDate;
use shared::{
    domain::{Platform, RequiredField},
    error::ValidationError,
    protocol::OptimizeRequest,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub endpoint: String,
    pub platform: Platform,
    pub account_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Configuration {
    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.endpoint.is_empty() {
            missing.push(RequiredField::Endpoint);
        }
        if self.account_id.is_empty() {
            missing.push(RequiredField::AccountId);
        }
        if self.start_date.is_none() {
            missing.push(RequiredField::StartDate);
        }
        if self.end_date.is_none() {
            missing.push(RequiredField::EndDate);
        }
        missing
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn account_id_hint(&self) -> &'static str {
        self.platform.account_id_hint()
    }

    /// Builds the request body from the current values, unmodified.
    pub fn to_payload(&self) -> Result<OptimizeRequest, ValidationError> {
        match (self.start_date, self.end_date) {
            (Some(start_date), Some(end_date)) if self.is_complete() => Ok(OptimizeRequest::new(
                self.platform,
                self.account_id.clone(),
                start_date,
                end_date,
            )),
            _ => Err(ValidationError::MissingFields(self.missing_fields())),
        }
    }
}
