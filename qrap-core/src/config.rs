/// Hard cap on assessment rows per refresh.
pub const MAX_ASSESSMENTS_LIMIT: u32 = 50;
pub const DEFAULT_FINDINGS_LIMIT: u32 = 50;
/// `limit` used when a list endpoint is only asked for `total_count`.
pub const COUNT_ONLY_LIMIT: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    api_base: String,
    assessments_limit: u32,
    findings_limit: u32,
    count_only_limit: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            assessments_limit: MAX_ASSESSMENTS_LIMIT,
            findings_limit: DEFAULT_FINDINGS_LIMIT,
            count_only_limit: COUNT_ONLY_LIMIT,
        }
    }
}

impl DashboardConfig {
    /// Resolve configuration baked in at build time.
    ///
    /// A CSR bundle has no process environment, so `QRAP_API_BASE` is read
    /// when the crate is compiled. Unset means same-origin requests.
    pub fn from_build_env() -> Self {
        Self::default().with_api_base(option_env!("QRAP_API_BASE").unwrap_or_default())
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Clamped to `1..=MAX_ASSESSMENTS_LIMIT`.
    pub fn with_assessments_limit(mut self, limit: u32) -> Self {
        self.assessments_limit = limit.clamp(1, MAX_ASSESSMENTS_LIMIT);
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn assessments_limit(&self) -> u32 {
        self.assessments_limit
    }

    pub fn findings_limit(&self) -> u32 {
        self.findings_limit
    }

    pub fn count_only_limit(&self) -> u32 {
        self.count_only_limit
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.api_base, path_and_query)
    }
}
