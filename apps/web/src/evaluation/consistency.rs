//! Consistency checks over a model reply.
//!
//! The rubric arithmetic is done by the model. These checks only report
//! disagreements; a reply is never rejected because of them.

use crate::evaluation::models::{EvaluationResult, FindingStatus, TOTAL_RULES};

/// Returns a human-readable warning for every invariant the reply breaks.
pub fn inspect(result: &EvaluationResult) -> Vec<String> {
    let mut warnings = Vec::new();
    let counts = &result.counts;
    let by_status = &counts.counts_by_status;

    if result.findings_table.len() != TOTAL_RULES as usize {
        warnings.push(format!(
            "findingsTable has {} entries, expected {TOTAL_RULES}",
            result.findings_table.len()
        ));
    }

    if counts.total_rules != TOTAL_RULES {
        warnings.push(format!(
            "totalRules is {}, expected {TOTAL_RULES}",
            counts.total_rules
        ));
    }

    let expected_applicable =
        i64::from(TOTAL_RULES) - i64::from(by_status.n_a) - i64::from(by_status.bilgi);
    if i64::from(counts.applicable) != expected_applicable {
        warnings.push(format!(
            "applicable is {}, expected {expected_applicable} (22 - N_A - BILGI)",
            counts.applicable
        ));
    }

    for status in FindingStatus::ALL {
        let tallied = by_status.get(status) as usize;
        let listed = result
            .findings_table
            .iter()
            .filter(|f| f.status == status)
            .count();
        if tallied != listed {
            warnings.push(format!(
                "countsByStatus.{} is {tallied} but findingsTable lists {listed}",
                status.as_str()
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::models::fixtures::sample_result;

    #[test]
    fn test_consistent_reply_has_no_warnings() {
        assert!(inspect(&sample_result()).is_empty());
    }

    #[test]
    fn test_wrong_applicable_is_reported() {
        let mut result = sample_result();
        result.counts.applicable = 22;
        let warnings = inspect(&result);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("applicable is 22, expected 18"));
    }

    #[test]
    fn test_missing_findings_are_reported() {
        let mut result = sample_result();
        result.findings_table.pop();
        let warnings = inspect(&result);
        assert!(warnings.iter().any(|w| w.contains("21 entries")));
        assert!(warnings.iter().any(|w| w.contains("countsByStatus.BİLGİ is 1")));
    }
}
