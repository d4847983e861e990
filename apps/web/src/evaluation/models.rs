//! Wire model of the evaluation reply.
//!
//! The model returns camelCase JSON. Status spellings differ between the
//! findings table (`N/A`, `BİLGİ`) and the tallies (`N_A`, `BILGI`); both
//! spellings are accepted everywhere.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Number of rules in the IGL-TEF rubric.
pub const TOTAL_RULES: u32 = 22;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub meta: Meta,
    pub decision: Decision,
    pub counts: Counts,
    #[serde(default)]
    pub tiers: Vec<TierSummary>,
    pub findings_table: Vec<Finding>,
    pub report_txt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub candidate_name: String,
    pub file_name: String,
    pub evaluated_at: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub overall: Verdict,
    pub risk: RiskLevel,
    pub summary_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "İDARİ_RED", alias = "IDARI_RED")]
    AdministrativeReject,
    #[serde(rename = "GEÇTİ", alias = "GECTI")]
    Passed,
    #[serde(rename = "DÜZELTME_GEREKİR", alias = "DUZELTME_GEREKIR")]
    RevisionRequired,
    #[serde(rename = "RED")]
    Rejected,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::AdministrativeReject => "İDARİ_RED",
            Verdict::Passed => "GEÇTİ",
            Verdict::RevisionRequired => "DÜZELTME_GEREKİR",
            Verdict::Rejected => "RED",
        }
    }

    /// Display form: the first underscore becomes a space.
    pub fn label(self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    pub fn is_rejection(self) -> bool {
        self.as_str().contains("RED")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "DÜŞÜK", alias = "DUSUK")]
    Low,
    #[serde(rename = "ORTA")]
    Medium,
    #[serde(rename = "YÜKSEK", alias = "YUKSEK")]
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "DÜŞÜK",
            RiskLevel::Medium => "ORTA",
            RiskLevel::High => "YÜKSEK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    #[serde(deserialize_with = "whole_number")]
    pub total_rules: u32,
    #[serde(deserialize_with = "whole_number")]
    pub applicable: u32,
    pub counts_by_status: CountsByStatus,
    pub score: Score,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsByStatus {
    #[serde(rename = "UYGUN", deserialize_with = "whole_number")]
    pub uygun: u32,
    #[serde(rename = "UYARI", deserialize_with = "whole_number")]
    pub uyari: u32,
    #[serde(rename = "HATA", deserialize_with = "whole_number")]
    pub hata: u32,
    #[serde(rename = "N_A", alias = "N/A", deserialize_with = "whole_number")]
    pub n_a: u32,
    #[serde(
        rename = "BILGI",
        alias = "BİLGİ",
        default,
        deserialize_with = "whole_number"
    )]
    pub bilgi: u32,
}

/// Counts are JSON numbers; `18` and `18.0` are the same count.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    if n.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&n) {
        return Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {n}"
        )));
    }
    Ok(n as u32)
}

impl CountsByStatus {
    pub fn get(&self, status: FindingStatus) -> u32 {
        match status {
            FindingStatus::Uygun => self.uygun,
            FindingStatus::Uyari => self.uyari,
            FindingStatus::Hata => self.hata,
            FindingStatus::NotApplicable => self.n_a,
            FindingStatus::Bilgi => self.bilgi,
        }
    }
}

/// Percentages are rendered exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub points: f64,
    pub max_points: f64,
    pub success_rate: f64,
    pub error_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSummary {
    pub tier: String,
    pub status: String,
    pub summary: String,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub tier: String,
    pub rule_id: String,
    pub rule_name: String,
    pub status: FindingStatus,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl Finding {
    /// Evidence worth showing: present and not blank.
    pub fn evidence(&self) -> Option<&str> {
        self.evidence.as_deref().filter(|e| !e.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingStatus {
    #[serde(rename = "UYGUN")]
    Uygun,
    #[serde(rename = "UYARI")]
    Uyari,
    #[serde(rename = "HATA")]
    Hata,
    #[serde(rename = "N/A", alias = "N_A")]
    NotApplicable,
    #[serde(rename = "BİLGİ", alias = "BILGI")]
    Bilgi,
}

impl FindingStatus {
    pub const ALL: [FindingStatus; 5] = [
        FindingStatus::Uygun,
        FindingStatus::Uyari,
        FindingStatus::Hata,
        FindingStatus::NotApplicable,
        FindingStatus::Bilgi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FindingStatus::Uygun => "UYGUN",
            FindingStatus::Uyari => "UYARI",
            FindingStatus::Hata => "HATA",
            FindingStatus::NotApplicable => "N/A",
            FindingStatus::Bilgi => "BİLGİ",
        }
    }

    /// Parses either spelling of a status.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "UYGUN" => Some(FindingStatus::Uygun),
            "UYARI" => Some(FindingStatus::Uyari),
            "HATA" => Some(FindingStatus::Hata),
            "N/A" | "N_A" => Some(FindingStatus::NotApplicable),
            "BİLGİ" | "BILGI" => Some(FindingStatus::Bilgi),
            _ => None,
        }
    }
}
