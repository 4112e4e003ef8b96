use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::app::config::{Config, Credentials, Environment};
use crate::error::{GatewayError, Result, TransportError};
use crate::models::netbanx::{monitor_is_ready, AuthorizationBody, AuthorizationResponse};
use crate::models::{AuthorizationOutcome, PurchaseRequest};
use crate::services::error_codes::{describe_error, ErrorMessageFilter};
use crate::services::gateway::PaymentGateway;
use crate::services::validation::{validate_purchase, AMOUNT_TOO_LARGE_MESSAGE};
use crate::utils::money::{format_minor_units, to_minor_units};

const MONITOR_PATH: &str = "cardpayments/monitor";

/// `Basic` header carrying the base64 of the API key on its own, with no
/// `user:password` pairing. Netbanx issues keys already in `user:password`
/// form, so the key is encoded as-is.
pub fn basic_auth_header(api_key: &str) -> String {
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(api_key)
    )
}

pub struct NetbanxClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
    error_filter: Option<ErrorMessageFilter>,
}

impl NetbanxClient {
    pub fn new(config: &Config) -> Result<Self> {
        config.credentials.validate()?;

        let raw_url = config.base_url();
        let base_url = Url::parse(&raw_url).map_err(|source| GatewayError::InvalidUrl {
            url: raw_url.clone(),
            source,
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()?;

        info!(
            "Netbanx client ready for account {} against {}",
            config.credentials.account_number, base_url
        );

        Ok(Self {
            client,
            base_url,
            credentials: config.credentials.clone(),
            error_filter: None,
        })
    }

    pub fn with_credentials(credentials: Credentials, environment: Environment) -> Result<Self> {
        Self::new(&Config {
            environment,
            credentials,
            ..Config::default()
        })
    }

    pub fn with_error_filter(mut self, filter: ErrorMessageFilter) -> Self {
        self.error_filter = Some(filter);
        self
    }

    fn endpoint(&self, path: &str) -> Url {
        // Paths are fixed relative references and the account number is
        // alphanumeric, so joining cannot fail.
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    pub fn monitor_url(&self) -> Url {
        self.endpoint(MONITOR_PATH)
    }

    pub fn auths_url(&self) -> Url {
        self.endpoint(&format!(
            "cardpayments/v1/accounts/{}/auths",
            self.credentials.account_number
        ))
    }

    /// GET the monitor endpoint; only a `{"status":"READY"}` body counts.
    pub async fn check_liveness(&self) -> bool {
        let url = self.monitor_url();
        let body = match self.client.get(url.clone()).send().await {
            Ok(response) => match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read Netbanx monitor response: {}", e);
                    return false;
                }
            },
            Err(e) => {
                warn!("Netbanx monitor check failed: {}", e);
                return false;
            }
        };

        let ready = monitor_is_ready(&body);
        if ready {
            debug!("Netbanx API is ready");
        } else {
            warn!("Netbanx API not ready, monitor returned: {}", body);
        }
        ready
    }

    async fn submit(
        &self,
        body: &AuthorizationBody,
    ) -> std::result::Result<AuthorizationResponse, TransportError> {
        let url = self.auths_url();
        let response = self
            .client
            .post(url.clone())
            .header(AUTHORIZATION, basic_auth_header(&self.credentials.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!("Netbanx auths responded with HTTP {}", status);

        serde_json::from_str(&text).map_err(|source| TransportError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Turns a decoded auths response into an outcome.
    pub fn interpret(
        &self,
        response: AuthorizationResponse,
    ) -> std::result::Result<AuthorizationOutcome, TransportError> {
        if let Some(api_error) = response.error {
            let reason = describe_error(&api_error);
            let reason = match &self.error_filter {
                Some(filter) => filter(reason, &api_error),
                None => reason,
            };
            return Ok(AuthorizationOutcome::Declined { reason });
        }

        match response.id {
            Some(transaction_id) if !transaction_id.is_empty() => {
                Ok(AuthorizationOutcome::Approved { transaction_id })
            }
            _ => Err(TransportError::UnexpectedBody {
                url: self.auths_url().to_string(),
            }),
        }
    }

    #[instrument(skip(self, request), fields(purchase_key = %request.purchase_key))]
    pub async fn authorize(&self, request: &PurchaseRequest) -> AuthorizationOutcome {
        let errors = validate_purchase(request);
        if !errors.is_empty() {
            info!("Purchase failed validation with {} error(s)", errors.len());
            return AuthorizationOutcome::ValidationFailed { errors };
        }

        let Some(amount) = to_minor_units(request.price) else {
            return AuthorizationOutcome::ValidationFailed {
                errors: vec![AMOUNT_TOO_LARGE_MESSAGE.to_string()],
            };
        };

        if !self.check_liveness().await {
            return AuthorizationOutcome::ProcessorUnavailable;
        }

        let body = AuthorizationBody::from_purchase(request, amount);
        info!(
            "Submitting authorization for {}",
            format_minor_units(amount, &request.currency)
        );

        match self.submit(&body).await.and_then(|response| self.interpret(response)) {
            Ok(outcome) => {
                match &outcome {
                    AuthorizationOutcome::Approved { transaction_id } => {
                        info!("Authorization approved: {}", transaction_id)
                    }
                    AuthorizationOutcome::Declined { reason } => {
                        warn!("Authorization declined: {}", reason)
                    }
                    _ => {}
                }
                outcome
            }
            Err(e) => {
                error!("Netbanx transport error: {}", e);
                AuthorizationOutcome::TransportError
            }
        }
    }
}

#[async_trait]
impl PaymentGateway for NetbanxClient {
    fn id(&self) -> &'static str {
        "netbanx"
    }

    fn admin_label(&self) -> &'static str {
        "Netbanx"
    }

    fn checkout_label(&self) -> &'static str {
        "Credit Card"
    }

    async fn authorize(&self, request: &PurchaseRequest) -> AuthorizationOutcome {
        NetbanxClient::authorize(self, request).await
    }
}
