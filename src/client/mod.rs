//! Client layer: orchestrates the gateway call, the optional log write, and the success check.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{MessageText, Recipient, SendConfig, SendSms, SmsLogEntry};
use crate::log::{BoxError, BoxFuture, SmsLogStore};

const DEFAULT_ENDPOINT: &str = "https://api.msm.az/sendsms";

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let url = url::Url::parse_with_params(url, &params)?;
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsSender`].
///
/// [`SmsError::NotSent`] is the only error the sender produces itself. Failures from the HTTP
/// client or the log store are passed through with their original error as the source.
pub enum SmsError {
    /// The gateway did not report the success code. Carries `errtext`, if any.
    #[error("{}", .text.as_deref().unwrap_or("SMS not sent"))]
    NotSent { text: Option<String> },

    /// HTTP client / transport failure (DNS, TLS, timeouts, invalid endpoint, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The log store failed to persist the attempt.
    #[error("log error: {0}")]
    Log(#[source] Box<dyn StdError + Send + Sync>),

    /// The sender was assembled with inconsistent settings.
    #[error("configuration error: {0}")]
    Config(&'static str),
}

impl SmsError {
    /// Returns `true` if the gateway rejected the message.
    pub fn is_not_sent(&self) -> bool {
        matches!(self, Self::NotSent { .. })
    }

    /// Gateway `errtext` for [`SmsError::NotSent`]; `None` for other variants or when absent.
    pub fn not_sent_text(&self) -> Option<&str> {
        match self {
            Self::NotSent { text } => text.as_deref(),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`SmsSender`].
///
/// Use this when you need a log store, or to customize the endpoint, timeout, or user-agent.
pub struct SmsSenderBuilder {
    config: SendConfig,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    log_store: Option<Arc<dyn SmsLogStore>>,
}

impl SmsSenderBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(config: SendConfig) -> Self {
        Self {
            config,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            log_store: None,
        }
    }

    /// Override the gateway URL (`https://api.msm.az/sendsms` by default).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Store used when `SendConfig::logging` is on. Ignored otherwise.
    pub fn log_store(mut self, store: Arc<dyn SmsLogStore>) -> Self {
        self.log_store = Some(store);
        self
    }

    /// Build a [`SmsSender`].
    ///
    /// Fails with [`SmsError::Config`] if logging is enabled but no store was given.
    pub fn build(self) -> Result<SmsSender, SmsError> {
        let log_store = resolve_log_store(&self.config, self.log_store)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsError::Transport(Box::new(err)))?;

        Ok(SmsSender {
            config: Arc::new(self.config),
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
            log_store,
        })
    }
}

#[derive(Clone)]
/// Sends SMS messages through the MSM.AZ gateway.
///
/// Each [`SmsSender::send`] call is independent: one GET to the gateway, at most one log
/// write, then either `Ok(())` or an error. The configuration is fixed at construction and
/// shared read-only between clones, so a sender can be used from many tasks at once.
pub struct SmsSender {
    config: Arc<SendConfig>,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
    log_store: Option<Arc<dyn SmsLogStore>>,
}

impl SmsSender {
    /// Create a sender using the default endpoint and no log store.
    ///
    /// Fails with [`SmsError::Config`] if `config.logging` is set; use
    /// [`SmsSender::builder`] with [`SmsSenderBuilder::log_store`] in that case.
    pub fn new(config: SendConfig) -> Result<Self, SmsError> {
        let log_store = resolve_log_store(&config, None)?;
        Ok(Self {
            config: Arc::new(config),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            log_store,
        })
    }

    /// Start building a sender with custom settings.
    pub fn builder(config: SendConfig) -> SmsSenderBuilder {
        SmsSenderBuilder::new(config)
    }

    pub fn config(&self) -> &SendConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `message` to `phone`.
    ///
    /// The response body is decoded whatever the HTTP status; only `errno` decides the
    /// outcome. When logging is enabled the attempt is persisted before the outcome is
    /// checked, so rejected messages are logged too.
    ///
    /// Errors:
    /// - [`SmsError::NotSent`] when `errno` is missing or not 100,
    /// - [`SmsError::Transport`] when the request itself fails,
    /// - [`SmsError::Log`] when the log store fails.
    pub async fn send(
        &self,
        phone: impl Into<Recipient>,
        message: impl Into<MessageText>,
    ) -> Result<(), SmsError> {
        let request = SendSms::new(phone, message);
        let params = crate::transport::encode_send_sms_query(&self.config, &request);

        tracing::debug!(
            endpoint = %self.endpoint,
            gsm = %request.phone(),
            sender = %self.config.sender,
            "sending sms"
        );

        let response = self
            .http
            .get(&self.endpoint, params)
            .await
            .map_err(SmsError::Transport)?;

        let parsed = crate::transport::decode_send_sms_response(&response.body);

        tracing::debug!(
            http_status = response.status,
            code = parsed.code.as_ref().map(|code| code.as_str()),
            "gateway responded"
        );

        if self.config.logging {
            if let Some(store) = self.log_store.as_ref() {
                let entry = SmsLogEntry::new(request.phone(), request.message(), &parsed);
                store.record(entry).await.map_err(SmsError::Log)?;
            }
        }

        if !parsed.is_success() {
            tracing::warn!(
                gsm = %request.phone(),
                code = parsed.code.as_ref().map(|code| code.as_str()),
                text = parsed.text.as_deref(),
                "sms not sent"
            );
            return Err(SmsError::NotSent { text: parsed.text });
        }

        Ok(())
    }
}

fn resolve_log_store(
    config: &SendConfig,
    store: Option<Arc<dyn SmsLogStore>>,
) -> Result<Option<Arc<dyn SmsLogStore>>, SmsError> {
    match (config.logging, store) {
        (true, None) => Err(SmsError::Config(
            "logging is enabled but no log store was provided",
        )),
        (true, store) => Ok(store),
        (false, _) => Ok(None),
    }
}
