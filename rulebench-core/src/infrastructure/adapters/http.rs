// rulebench-core/src/infrastructure/adapters/http.rs

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

use crate::domain::error::RepositoryError;
use crate::domain::execution::{ExecutionRequest, ExecutionResponse};
use crate::domain::ports::RuleRepository;
use crate::domain::rule::{NewRule, Rule, RuleId};
use crate::error::RulebenchError;
use crate::infrastructure::config::ApiConfig;
use crate::infrastructure::error::InfrastructureError;

const RULES: &str = "rules";
const EXECUTE: &str = "execute";

/// `RuleRepository` over the REST API of the rules service.
#[derive(Clone, Debug)]
pub struct HttpRuleRepository {
    base_url: Url,
    client: Client,
}

impl HttpRuleRepository {
    pub fn new(config: &ApiConfig) -> Result<Self, RulebenchError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build().map_err(InfrastructureError::from)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL. Each segment is percent-escaped.
    ///
    /// URL normalization drops `.` and `..` segments (escaped or not) and an
    /// empty one turns into a trailing slash, so such an id would silently
    /// target another resource. Those are refused before anything is sent.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RepositoryError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            warn!(%segment, "Refusing to address a dot or empty path segment");
            return Err(RepositoryError::UnaddressableId(segment.to_string()));
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, RepositoryError> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "HTTP request");
        Ok(self.client.request(method, url))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RepositoryError> {
        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            error!("❌ Request failed after {:.2?}: {}", start.elapsed(), e);
            RepositoryError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "✅ Response after {:.2?}", start.elapsed());

        if status.is_success() {
            return Ok(response);
        }

        // The body text is the failure message when the service provides one
        let body = response.text().await.unwrap_or_default();
        let err = RepositoryError::rejected(status.as_u16(), &body);
        error!(status = status.as_u16(), "❌ Rules service rejected the request: {}", err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RepositoryError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| RepositoryError::Decode(format!("Failed to decode response: {}", e)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, InfrastructureError> {
    let url = Url::parse(raw).map_err(|e| InfrastructureError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(InfrastructureError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "expected an http(s) URL".to_string(),
        });
    }
    Ok(url)
}

#[async_trait]
impl RuleRepository for HttpRuleRepository {
    #[instrument(skip(self))]
    async fn list_rules(&self) -> Result<Vec<Rule>, RepositoryError> {
        self.send_json(self.request(Method::GET, &[RULES])?).await
    }

    #[instrument(skip(self, rule), fields(rule.name = %rule.name))]
    async fn create_rule(&self, rule: &NewRule) -> Result<Rule, RepositoryError> {
        self.send_json(self.request(Method::POST, &[RULES])?.json(rule))
            .await
    }

    #[instrument(skip(self, rule), fields(rule.id = %rule.id))]
    async fn update_rule(&self, rule: &Rule) -> Result<Rule, RepositoryError> {
        self.send_json(
            self.request(Method::PUT, &[RULES, rule.id.as_str()])?
                .json(rule),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_rule(&self, id: &RuleId) -> Result<(), RepositoryError> {
        // Body ignored: the service answers with an empty document
        self.send(self.request(Method::DELETE, &[RULES, id.as_str()])?)
            .await
            .map(|_| ())
    }

    #[instrument(skip(self, request), fields(rules = request.rule_ids.len()))]
    async fn execute_rules(
        &self,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResponse, RepositoryError> {
        self.send_json(self.request(Method::POST, &[RULES, EXECUTE])?.json(request))
            .await
    }
}
