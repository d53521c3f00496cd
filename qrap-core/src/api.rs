use crate::config::DashboardConfig;
use crate::dto::{
    Assessment, AssessmentList, Finding, FindingList, HndlRequest, HndlResult, OrganizationList,
};
use crate::error::ApiResult;
use crate::stats::DashboardStats;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const ASSESSMENTS_PATH: &str = "/api/v1/assessments";
pub const ORGANIZATIONS_PATH: &str = "/api/v1/organizations";
pub const FINDINGS_PATH: &str = "/api/v1/findings";
pub const HNDL_PATH: &str = "/api/v1/hndl";

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

/// Sends one request and yields the body of a 2xx response.
///
/// Implementations map network failures to `ApiError::Transport` and
/// non-2xx responses to `ApiError::Status`. No retries, no timeouts.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<String>;
}

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Findings are only requested for a non-empty identifier. Whitespace is
/// not trimmed: `" "` still goes to the server.
pub fn should_fetch_findings(assessment_id: &str) -> bool {
    !assessment_id.is_empty()
}

/// Client-side route that opens the findings page for one assessment.
pub fn findings_link(assessment_id: &str) -> String {
    format!("/findings?assessment_id={}", encode_query_value(assessment_id))
}

#[derive(Clone, Debug)]
pub struct QrapClient<T> {
    transport: T,
    config: DashboardConfig,
}

impl<T: Transport> QrapClient<T> {
    pub fn new(transport: T, config: DashboardConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_assessments(&self) -> ApiResult<Vec<Assessment>> {
        let path = format!(
            "{ASSESSMENTS_PATH}?limit={}",
            self.config.assessments_limit()
        );
        let list: AssessmentList = self.get(&path).await?;
        Ok(list.into_items())
    }

    pub async fn count_assessments(&self) -> ApiResult<u64> {
        let path = format!("{ASSESSMENTS_PATH}?limit={}", self.config.count_only_limit());
        let list: AssessmentList = self.get(&path).await?;
        Ok(list.total())
    }

    pub async fn count_organizations(&self) -> ApiResult<u64> {
        let path = format!(
            "{ORGANIZATIONS_PATH}?limit={}",
            self.config.count_only_limit()
        );
        let list: OrganizationList = self.get(&path).await?;
        Ok(list.total())
    }

    /// Both count requests run concurrently; a failure in either discards both.
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        let (assessments, organizations) =
            futures::join!(self.count_assessments(), self.count_organizations());
        Ok(DashboardStats::from_totals(assessments?, organizations?))
    }

    pub async fn list_findings(&self, assessment_id: &str) -> ApiResult<Vec<Finding>> {
        if !should_fetch_findings(assessment_id) {
            return Ok(Vec::new());
        }
        let path = format!(
            "{FINDINGS_PATH}?assessment_id={}&limit={}",
            encode_query_value(assessment_id),
            self.config.findings_limit()
        );
        let list: FindingList = self.get(&path).await?;
        Ok(list.into_items())
    }

    pub async fn calculate_hndl(&self, request: &HndlRequest) -> ApiResult<HndlResult> {
        self.post(HNDL_PATH, request).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let body = self
            .transport
            .send(ApiRequest {
                method: Method::Get,
                url: self.config.url(path),
                body: None,
            })
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let payload = serde_json::to_string(body)?;
        let raw = self
            .transport
            .send(ApiRequest {
                method: Method::Post,
                url: self.config.url(path),
                body: Some(payload),
            })
            .await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::load::{identifier_from_query, FindingsTrigger, ListLoad, ListState};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Answers by path prefix and records every request it sees.
    #[derive(Default)]
    struct FakeTransport {
        routes: Vec<(&'static str, ApiResult<String>)>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        fn route(mut self, prefix: &'static str, response: ApiResult<&str>) -> Self {
            self.routes.push((prefix, response.map(ToString::to_string)));
            self
        }

        fn seen(&self) -> Vec<ApiRequest> {
            self.seen.borrow().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<String> {
            self.seen.borrow_mut().push(request.clone());
            self.routes
                .iter()
                .find(|(prefix, _)| request.url.starts_with(prefix))
                .map(|(_, response)| response.clone())
                .unwrap_or(Err(ApiError::Status(404)))
        }
    }

    fn client(transport: FakeTransport) -> QrapClient<FakeTransport> {
        QrapClient::new(transport, DashboardConfig::default())
    }

    #[test]
    fn assessments_request_is_capped_at_fifty() {
        let api = client(FakeTransport::default().route(
            ASSESSMENTS_PATH,
            Ok(r#"{"assessments":[{"id":"a1","name":"Q1 Review","status":"completed",
                "overall_risk":null,"risk_score":42,"created_at":"2024-01-01"}],"total_count":1}"#),
        ));
        let rows = block_on(api.list_assessments()).expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].risk_label(), "-");

        let seen = api.transport().seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::Get);
        assert_eq!(seen[0].url, "/api/v1/assessments?limit=50");
    }

    #[test]
    fn each_refresh_issues_a_new_request() {
        let api = client(
            FakeTransport::default().route(ASSESSMENTS_PATH, Ok(r#"{"assessments":null}"#)),
        );
        assert!(block_on(api.list_assessments()).expect("first").is_empty());
        assert!(block_on(api.list_assessments()).expect("second").is_empty());
        assert_eq!(api.transport().seen().len(), 2);
    }

    #[test]
    fn empty_identifier_skips_findings_request() {
        let api = client(FakeTransport::default().route(FINDINGS_PATH, Ok(r#"{"findings":[]}"#)));
        assert!(block_on(api.list_findings("")).expect("empty").is_empty());
        assert!(api.transport().seen().is_empty());

        assert!(block_on(api.list_findings("abc")).expect("abc").is_empty());
        let seen = api.transport().seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "/api/v1/findings?assessment_id=abc&limit=50");
    }

    /// Mirrors the findings page: one trigger per identifier change.
    fn change_identifier(
        api: &QrapClient<FakeTransport>,
        list: &mut ListLoad<Finding>,
        assessment_id: &str,
    ) {
        match FindingsTrigger::for_id(assessment_id) {
            FindingsTrigger::Clear => list.clear(),
            FindingsTrigger::Fetch(id) => {
                list.begin();
                list.apply(block_on(api.list_findings(&id)));
            }
        }
    }

    #[test]
    fn typing_then_clearing_issues_one_request_per_non_empty_id() {
        let api = client(FakeTransport::default().route(
            FINDINGS_PATH,
            Ok(r#"{"findings":[{"id":"f1","title":"RSA key exchange"}]}"#),
        ));
        let mut list = ListLoad::default();

        change_identifier(&api, &mut list, "");
        assert!(api.transport().seen().is_empty());
        assert_eq!(list.state(), ListState::Empty);

        change_identifier(&api, &mut list, "a");
        assert_eq!(api.transport().seen().len(), 1);
        assert_eq!(list.state(), ListState::Rows(1));

        change_identifier(&api, &mut list, "ab");
        change_identifier(&api, &mut list, "");
        let urls: Vec<String> = api.transport().seen().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "/api/v1/findings?assessment_id=a&limit=50".to_string(),
                "/api/v1/findings?assessment_id=ab&limit=50".to_string(),
            ]
        );
        assert_eq!(list.state(), ListState::Empty);
    }

    #[test]
    fn seeded_identifier_fetches_once() {
        let api = client(FakeTransport::default().route(FINDINGS_PATH, Ok(r#"{"findings":[]}"#)));
        let mut list = ListLoad::default();
        let mut current = String::new();

        for query in [Some("abc"), Some("abc")] {
            if let Some(id) = identifier_from_query(&current, query) {
                current = id;
                change_identifier(&api, &mut list, &current);
            }
        }
        assert_eq!(api.transport().seen().len(), 1);
        assert_eq!(list.state(), ListState::Empty);
    }

    #[test]
    fn failed_findings_request_empties_list() {
        let api = client(FakeTransport::default().route(FINDINGS_PATH, Err(ApiError::Status(500))));
        let mut list = ListLoad::default();
        change_identifier(&api, &mut list, "abc");
        assert_eq!(api.transport().seen().len(), 1);
        assert_eq!(list.state(), ListState::Empty);
    }

    #[test]
    fn findings_identifier_is_percent_encoded() {
        let api = client(FakeTransport::default().route(FINDINGS_PATH, Ok("{}")));
        block_on(api.list_findings("a b&c")).expect("list");
        assert_eq!(
            api.transport().seen()[0].url,
            "/api/v1/findings?assessment_id=a%20b%26c&limit=50"
        );
    }

    #[test]
    fn whitespace_identifier_is_still_sent() {
        assert!(should_fetch_findings(" "));
        assert!(!should_fetch_findings(""));
    }

    #[test]
    fn dashboard_stats_use_both_totals() {
        let api = client(
            FakeTransport::default()
                .route(ASSESSMENTS_PATH, Ok(r#"{"assessments":[],"total_count":7}"#))
                .route(ORGANIZATIONS_PATH, Ok(r#"{"total_count":3}"#)),
        );
        let stats = block_on(api.dashboard_stats()).expect("stats");
        assert_eq!(stats, DashboardStats::from_totals(7, 3));

        let urls: Vec<String> = api.transport().seen().into_iter().map(|r| r.url).collect();
        assert!(urls.contains(&"/api/v1/assessments?limit=1".to_string()));
        assert!(urls.contains(&"/api/v1/organizations?limit=1".to_string()));
    }

    #[test]
    fn dashboard_stats_fail_when_either_count_fails() {
        let api = client(
            FakeTransport::default()
                .route(ASSESSMENTS_PATH, Ok(r#"{"total_count":7}"#))
                .route(ORGANIZATIONS_PATH, Err(ApiError::Status(500))),
        );
        assert_eq!(
            block_on(api.dashboard_stats()),
            Err(ApiError::Status(500))
        );
    }

    #[test]
    fn hndl_posts_json_body() {
        let api = client(FakeTransport::default().route(
            HNDL_PATH,
            Ok(r#"{"algorithm":"RSA-2048","estimated_break_year":2030,"data_shelf_life_years":10,
                "risk_window_years":5,"is_at_risk":true,"urgency":"high"}"#),
        ));
        let request = HndlRequest {
            algorithm: "RSA-2048".into(),
            data_shelf_life_years: 10,
        };
        let result = block_on(api.calculate_hndl(&request)).expect("hndl");
        assert!(result.is_at_risk);
        assert_eq!(result.urgency, "high");

        let seen = api.transport().seen();
        assert_eq!(seen[0].method, Method::Post);
        let body: serde_json::Value =
            serde_json::from_str(seen[0].body.as_deref().expect("body")).expect("json");
        assert_eq!(
            body,
            serde_json::json!({"algorithm": "RSA-2048", "data_shelf_life_years": 10})
        );
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let api = client(FakeTransport::default().route(HNDL_PATH, Ok("<html>bad gateway</html>")));
        let request = HndlRequest {
            algorithm: "X25519".into(),
            data_shelf_life_years: 5,
        };
        assert!(matches!(
            block_on(api.calculate_hndl(&request)),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn findings_link_encodes_identifier() {
        assert_eq!(
            findings_link("3f2c-9a"),
            "/findings?assessment_id=3f2c-9a"
        );
        assert_eq!(findings_link("a/b"), "/findings?assessment_id=a%2Fb");
    }
}
