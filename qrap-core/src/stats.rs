/// Counters behind the four dashboard tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_assessments: u64,
    pub completed_assessments: u64,
    pub total_organizations: u64,
    pub critical_findings: u64,
}

impl DashboardStats {
    /// Only two totals are available. `completed_assessments` repeats the
    /// assessment total and `critical_findings` is never populated; no
    /// endpoint reports either number yet.
    pub fn from_totals(assessments: u64, organizations: u64) -> Self {
        Self {
            total_assessments: assessments,
            completed_assessments: assessments,
            total_organizations: organizations,
            critical_findings: 0,
        }
    }

    pub fn tiles(&self) -> [(&'static str, u64); 4] {
        [
            ("Organizations", self.total_organizations),
            ("Total Assessments", self.total_assessments),
            ("Completed", self.completed_assessments),
            ("Critical Findings", self.critical_findings),
        ]
    }
}
