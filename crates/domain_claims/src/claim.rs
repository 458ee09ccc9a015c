//! Claim aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::ClaimId;
use crate::document::Document;
use crate::error::ClaimError;

/// Claim status
///
/// `Draft` and `UnderReview` are not produced by the implemented service
/// paths (claims are created `Submitted`) but remain first-class states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Saved but not yet submitted
    Draft,
    /// Submitted by a lecturer, awaiting review
    Submitted,
    /// Picked up by a reviewer
    UnderReview,
    /// Approved for payment
    Approved,
    /// Rejected (terminal)
    Rejected,
    /// Paid out (terminal)
    Paid,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 6] = [
        ClaimStatus::Draft,
        ClaimStatus::Submitted,
        ClaimStatus::UnderReview,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
        ClaimStatus::Paid,
    ];

    /// Returns the stored textual name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Draft => "Draft",
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::UnderReview => "UnderReview",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::Paid => "Paid",
        }
    }

    /// True for states with no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Rejected | ClaimStatus::Paid)
    }

    /// Completion value (0-100) for progress-indicator display
    ///
    /// Both terminal outcomes map to 100: the lifecycle is finished either
    /// way, even though the outcomes are opposite.
    pub fn progress(&self) -> u8 {
        match self {
            ClaimStatus::Draft => 10,
            ClaimStatus::Submitted => 30,
            ClaimStatus::UnderReview => 50,
            ClaimStatus::Approved => 75,
            ClaimStatus::Paid => 100,
            ClaimStatus::Rejected => 100,
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ClaimError::UnknownStatus(s.to_string()))
    }
}

/// A validated claim awaiting its first persistence
///
/// The amount is derived here, once, as `hours * rate` rounded to two
/// decimal places. Nothing else in the system sets an amount.
#[derive(Debug, Clone)]
pub struct ClaimSubmission {
    lecturer_email: String,
    lecturer_name: String,
    hours_worked: Decimal,
    hourly_rate: Decimal,
    amount: Decimal,
    description: String,
    documents: Vec<Document>,
    submitted_at: DateTime<Utc>,
}

/// Derives the claim amount from hours and rate
pub fn derive_amount(hours: Decimal, rate: Decimal) -> Decimal {
    (hours * rate).round_dp(2)
}

impl ClaimSubmission {
    /// Validates submission input and derives the amount
    ///
    /// # Errors
    ///
    /// `Validation` for negative hours or rate, a non-positive derived
    /// amount, or a blank description.
    pub fn new(
        lecturer_email: impl Into<String>,
        lecturer_name: impl Into<String>,
        hours_worked: Decimal,
        hourly_rate: Decimal,
        description: impl Into<String>,
        documents: Vec<Document>,
    ) -> Result<Self, ClaimError> {
        if hours_worked < Decimal::ZERO {
            return Err(ClaimError::Validation("Hours worked cannot be negative".to_string()));
        }
        if hourly_rate < Decimal::ZERO {
            return Err(ClaimError::Validation("Hourly rate cannot be negative".to_string()));
        }

        let amount = derive_amount(hours_worked, hourly_rate);
        if amount <= Decimal::ZERO {
            return Err(ClaimError::Validation(
                "Claim amount must be greater than zero".to_string(),
            ));
        }

        let description = description.into();
        if description.trim().is_empty() {
            return Err(ClaimError::Validation("Description is required".to_string()));
        }

        Ok(Self {
            lecturer_email: lecturer_email.into(),
            lecturer_name: lecturer_name.into(),
            hours_worked,
            hourly_rate,
            amount,
            description,
            documents,
            submitted_at: Utc::now(),
        })
    }

    pub fn lecturer_email(&self) -> &str {
        &self.lecturer_email
    }

    pub fn lecturer_name(&self) -> &str {
        &self.lecturer_name
    }

    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// A persisted claim
///
/// Fields are private: the amount is fixed at submission and the status
/// moves only through the lifecycle methods in [`crate::lifecycle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub(crate) id: ClaimId,
    pub(crate) lecturer_email: String,
    pub(crate) lecturer_name: String,
    pub(crate) hours_worked: Decimal,
    pub(crate) hourly_rate: Decimal,
    pub(crate) amount: Decimal,
    pub(crate) status: ClaimStatus,
    pub(crate) submitted_at: DateTime<Utc>,
    pub(crate) description: String,
    pub(crate) documents: Vec<Document>,
    pub(crate) document_count: usize,
    pub(crate) reviewed_by: Option<String>,
    pub(crate) reviewed_at: Option<DateTime<Utc>>,
    pub(crate) rejection_reason: Option<String>,
}

/// Plain-field form of a claim for persistence mapping
///
/// Repositories rehydrate claims through this record; it carries no
/// invariants of its own. The store keeps only a document count, not the
/// documents themselves, so rehydrated claims have an empty document list
/// but an accurate count.
#[derive(Debug, Clone)]
pub struct ClaimRecord {
    pub id: ClaimId,
    pub lecturer_email: String,
    pub lecturer_name: String,
    pub hours_worked: Decimal,
    pub hourly_rate: Decimal,
    pub amount: Decimal,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
    pub description: String,
    pub document_count: usize,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

impl Claim {
    /// Creates a claim from a validated submission and its assigned id
    ///
    /// Claims enter the lifecycle at `Submitted`.
    pub fn from_submission(id: ClaimId, submission: ClaimSubmission) -> Self {
        let document_count = submission.documents.len();
        Self {
            id,
            lecturer_email: submission.lecturer_email,
            lecturer_name: submission.lecturer_name,
            hours_worked: submission.hours_worked,
            hourly_rate: submission.hourly_rate,
            amount: submission.amount,
            status: ClaimStatus::Submitted,
            submitted_at: submission.submitted_at,
            description: submission.description,
            documents: submission.documents,
            document_count,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
        }
    }

    /// Rehydrates a claim from storage
    pub fn from_record(record: ClaimRecord) -> Self {
        Self {
            id: record.id,
            lecturer_email: record.lecturer_email,
            lecturer_name: record.lecturer_name,
            hours_worked: record.hours_worked,
            hourly_rate: record.hourly_rate,
            amount: record.amount,
            status: record.status,
            submitted_at: record.submitted_at,
            description: record.description,
            documents: Vec::new(),
            document_count: record.document_count,
            reviewed_by: record.reviewed_by,
            reviewed_at: record.reviewed_at,
            rejection_reason: record.rejection_reason,
        }
    }

    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn lecturer_email(&self) -> &str {
        &self.lecturer_email
    }

    pub fn lecturer_name(&self) -> &str {
        &self.lecturer_name
    }

    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn reviewed_by(&self) -> Option<&str> {
        self.reviewed_by.as_deref()
    }

    pub fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.reviewed_at
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// Completion value (0-100) for progress-indicator display
    pub fn progress(&self) -> u8 {
        self.status.progress()
    }

    /// Checks whether the status may move to `target`
    pub(crate) fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Draft, Submitted)
                | (Submitted, UnderReview)
                | (Submitted, Approved)
                | (Submitted, Rejected)
                | (UnderReview, Approved)
                | (UnderReview, Rejected)
                | (Approved, Paid)
        )
    }
}
