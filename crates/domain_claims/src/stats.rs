//! Dashboard aggregation
//!
//! A pure reduction over the current claim set, recomputed on demand.
//! Nothing is maintained incrementally.

use rust_decimal::Decimal;

use crate::claim::{Claim, ClaimStatus};

/// Aggregate statistics the review dashboards render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// All claims
    pub total: usize,
    /// Submitted or under review
    pub pending_count: usize,
    /// Approved, awaiting payment
    pub approved_count: usize,
    /// Paid
    pub paid_count: usize,
    /// Rejected
    pub rejected_count: usize,
    /// Sum of amounts over approved claims only
    pub total_approved_amount: Decimal,
}

impl DashboardStats {
    /// Reduces a claim set to its dashboard statistics
    pub fn aggregate<'a>(claims: impl IntoIterator<Item = &'a Claim>) -> Self {
        let mut stats = DashboardStats {
            total: 0,
            pending_count: 0,
            approved_count: 0,
            paid_count: 0,
            rejected_count: 0,
            total_approved_amount: Decimal::ZERO,
        };

        for claim in claims {
            stats.total += 1;
            match claim.status() {
                ClaimStatus::Draft => {}
                ClaimStatus::Submitted | ClaimStatus::UnderReview => stats.pending_count += 1,
                ClaimStatus::Approved => {
                    stats.approved_count += 1;
                    stats.total_approved_amount += claim.amount();
                }
                ClaimStatus::Paid => stats.paid_count += 1,
                ClaimStatus::Rejected => stats.rejected_count += 1,
            }
        }

        stats
    }

    /// One-line rendering for the dashboard status bar
    pub fn summary_line(&self) -> String {
        format!(
            "Total: {} | Pending: {} | Approved: {} | Paid: {} | Rejected: {} | Total Approved: R{:.2}",
            self.total,
            self.pending_count,
            self.approved_count,
            self.paid_count,
            self.rejected_count,
            self.total_approved_amount
        )
    }
}
