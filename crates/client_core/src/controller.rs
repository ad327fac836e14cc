//! Submission state machine shared by every front end.

use serde::{Deserialize, Serialize};
use shared::{error::ValidationError, protocol::OptimizeRequest, protocol::ReportResponse};
use tracing::{debug, info, warn};

use crate::{error::SubmissionError, form::Configuration};

pub type Generation = u64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting {
        generation: Generation,
    },
    Success(ReportResponse),
    Failed {
        message: String,
    },
}

/// One outbound call the caller must perform, stamped with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub generation: Generation,
    pub endpoint: String,
    pub payload: OptimizeRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    generation: Generation,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Latest generation handed out by [`SubmissionController::begin`].
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    pub fn can_submit(&self, config: &Configuration) -> bool {
        !self.is_submitting() && config.is_complete()
    }

    pub fn report(&self) -> Option<&ReportResponse> {
        match &self.state {
            SubmissionState::Success(report) if report.success => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Starts a new submission cycle, discarding any previous outcome.
    ///
    /// Fails without touching the current state when a required field is
    /// empty, so no outbound call is ever described for an incomplete form.
    pub fn begin(&mut self, config: &Configuration) -> Result<SubmissionTicket, ValidationError> {
        let payload = config.to_payload()?;

        self.generation += 1;
        self.state = SubmissionState::Submitting {
            generation: self.generation,
        };
        info!(
            generation = self.generation,
            platform = payload.platform().as_str(),
            "submission: started"
        );

        Ok(SubmissionTicket {
            generation: self.generation,
            endpoint: config.endpoint.clone(),
            payload,
        })
    }

    /// Applies the outcome of the call stamped with `generation`.
    ///
    /// Outcomes from superseded generations are dropped.
    pub fn resolve(
        &mut self,
        generation: Generation,
        outcome: Result<ReportResponse, SubmissionError>,
    ) -> Resolution {
        let in_flight = matches!(
            self.state,
            SubmissionState::Submitting { generation: current } if current == generation
        );
        if !in_flight {
            debug!(
                generation,
                latest = self.generation,
                "submission: dropping stale outcome"
            );
            return Resolution::Stale;
        }

        self.state = match outcome {
            Ok(report) if report.success => {
                info!(generation, "submission: report received");
                SubmissionState::Success(report)
            }
            Ok(report) => {
                let message = report.failure_message();
                warn!(generation, %message, "submission: workflow reported failure");
                SubmissionState::Failed { message }
            }
            Err(err) => {
                warn!(generation, error = %err, "submission: call failed");
                SubmissionState::Failed {
                    message: err.user_message(),
                }
            }
        };
        Resolution::Applied
    }

    /// Clears a finished outcome. Ignored while a call is in flight.
    pub fn dismiss(&mut self) {
        if !self.is_submitting() {
            self.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
