pub mod controller;
pub mod error;
pub mod form;
pub mod format;
pub mod report;
pub mod transport;

pub use controller::{
    Generation, Resolution, SubmissionController, SubmissionState, SubmissionTicket,
};
pub use error::SubmissionError;
pub use form::Configuration;
pub use report::{ReportView, Section, SectionKind};
pub use transport::{HttpTransport, ReportTransport};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
