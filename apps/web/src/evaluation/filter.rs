//! Status filter for the findings list on the Result screen.

use crate::evaluation::models::{Finding, FindingStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FindingStatus),
}

impl StatusFilter {
    /// Filter buckets in display order.
    pub const BUCKETS: [StatusFilter; 6] = [
        StatusFilter::All,
        StatusFilter::Only(FindingStatus::Hata),
        StatusFilter::Only(FindingStatus::Uyari),
        StatusFilter::Only(FindingStatus::Uygun),
        StatusFilter::Only(FindingStatus::NotApplicable),
        StatusFilter::Only(FindingStatus::Bilgi),
    ];

    /// `None` when the value names no bucket. A missing value means `All`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            None | Some("") | Some("ALL") => Some(StatusFilter::All),
            Some(other) => FindingStatus::parse(other).map(StatusFilter::Only),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(self, finding: &Finding) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => finding.status == status,
        }
    }

    /// Keeps the original order of `findings`.
    pub fn apply(self, findings: &[Finding]) -> Vec<&Finding> {
        findings.iter().filter(|f| self.matches(f)).collect()
    }
}
