use serde::{Deserialize, Serialize};

/// Placeholder rendered for any nullable label the backend left out.
pub const MISSING: &str = "-";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    pub id: String,
    pub name: String,
    pub organization_id: String,
    pub status: String,
    pub overall_risk: Option<String>,
    pub risk_score: f64,
    pub target_assets: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl Assessment {
    pub fn risk_label(&self) -> &str {
        self.overall_risk.as_deref().unwrap_or(MISSING)
    }

    pub fn score_label(&self) -> String {
        self.risk_score.to_string()
    }
}

/// `GET /api/v1/assessments`. The backend serializes an empty page as
/// `"assessments": null`, so both fields stay optional on the wire.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentList {
    pub assessments: Option<Vec<Assessment>>,
    pub total_count: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl AssessmentList {
    pub fn into_items(self) -> Vec<Assessment> {
        self.assessments.unwrap_or_default()
    }

    pub fn total(&self) -> u64 {
        self.total_count.unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationList {
    pub organizations: Option<Vec<Organization>>,
    pub total_count: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl OrganizationList {
    pub fn total(&self) -> u64 {
        self.total_count.unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finding {
    pub id: String,
    pub assessment_id: String,
    pub category: String,
    pub risk_level: String,
    pub title: String,
    pub description: String,
    pub affected_asset: String,
    pub current_algorithm: Option<String>,
    pub recommended_algorithm: Option<String>,
    pub remediation: Option<String>,
    pub discovered_at: String,
}

impl Finding {
    pub fn current_algorithm_label(&self) -> &str {
        self.current_algorithm.as_deref().unwrap_or(MISSING)
    }

    pub fn recommended_algorithm_label(&self) -> &str {
        self.recommended_algorithm.as_deref().unwrap_or(MISSING)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FindingList {
    pub findings: Option<Vec<Finding>>,
    pub total_count: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl FindingList {
    pub fn into_items(self) -> Vec<Finding> {
        self.findings.unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HndlRequest {
    pub algorithm: String,
    pub data_shelf_life_years: i64,
}

/// Rendered verbatim; the break-year model lives behind `/api/v1/hndl`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HndlResult {
    pub algorithm: String,
    pub estimated_break_year: i64,
    pub data_shelf_life_years: i64,
    pub risk_window_years: i64,
    pub is_at_risk: bool,
    pub urgency: String,
}

impl HndlResult {
    pub fn at_risk_label(&self) -> &'static str {
        if self.is_at_risk {
            "YES"
        } else {
            "NO"
        }
    }

    /// Label/value pairs in result-panel order.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Algorithm", self.algorithm.clone()),
            ("Estimated break year", self.estimated_break_year.to_string()),
            ("Risk window (years)", self.risk_window_years.to_string()),
            ("At risk?", self.at_risk_label().to_string()),
            ("Urgency", self.urgency.clone()),
        ]
    }
}
