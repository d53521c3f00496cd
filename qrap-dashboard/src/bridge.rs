use js_sys::Promise;
use qrap_core::dto::{Assessment, Finding, HndlRequest, HndlResult};
use qrap_core::stats::DashboardStats;
use qrap_core::{ApiError, ApiRequest, ApiResult, DashboardConfig, QrapClient, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// `window.fetch`, one request per call, no abort signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

fn js_err(context: &str, err: JsValue) -> ApiError {
    ApiError::Transport(format!("{context}: {err:?}"))
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<String> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Transport("window not available".into()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            let headers = Headers::new().map_err(|e| js_err("headers", e))?;
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| js_err("headers", e))?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.url, &init)
            .map_err(|e| js_err("request", e))?;
        let pending: Promise = window.fetch_with_request(&req);
        let value = JsFuture::from(pending)
            .await
            .map_err(|e| js_err("fetch rejected", e))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| js_err("not a Response", e))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let text = response.text().map_err(|e| js_err("body", e))?;
        JsFuture::from(text)
            .await
            .map_err(|e| js_err("body", e))?
            .as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".into()))
    }
}

pub fn client() -> QrapClient<FetchTransport> {
    QrapClient::new(FetchTransport, DashboardConfig::from_build_env())
}

pub async fn fetch_assessments() -> ApiResult<Vec<Assessment>> {
    client().list_assessments().await
}

pub async fn fetch_dashboard_stats() -> ApiResult<DashboardStats> {
    client().dashboard_stats().await
}

pub async fn fetch_findings(assessment_id: &str) -> ApiResult<Vec<Finding>> {
    client().list_findings(assessment_id).await
}

pub async fn calculate_hndl(request: &HndlRequest) -> ApiResult<HndlResult> {
    client().calculate_hndl(request).await
}
