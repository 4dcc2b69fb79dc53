mod types;

pub use types::{Envelope, ParentFeesData, ParentInfo, PaymentPage, PaymentTransaction};

use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::config::ApiSettings;
use crate::error::{FeesError, Result};

/// Thin client over the school-management REST backend. One request per
/// command, no retries — a failed fetch surfaces as an error and the
/// command aborts.
pub struct ApiClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(settings.timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
        }
    }

    /// Fees of the parent account the configured token belongs to.
    pub fn parent_fees(&self) -> Result<ParentFeesData> {
        let envelope: Envelope<ParentFeesData> = self.get_json("/v1/parent/fees")?;
        Ok(envelope.data)
    }

    /// Admin view of one parent's fees.
    pub fn parent_detail(&self, parent_id: &str) -> Result<ParentFeesData> {
        let path = format!("/v1/admin/parents/{parent_id}");
        let envelope: Envelope<ParentFeesData> = self.get_json(&path)?;
        Ok(envelope.data)
    }

    /// Admin listing of raw payment transactions, paginated.
    pub fn payments(&self, page: u32, limit: u32, status: Option<&str>) -> Result<PaymentPage> {
        let mut path = format!("/v1/admin/payment?page={page}&limit={limit}");
        if let Some(status) = status {
            path.push_str(&format!("&paymentStatus={status}"));
        }
        let envelope: Envelope<PaymentPage> = self.get_json(&path)?;
        Ok(envelope.data)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let auth = format!("Bearer {}", self.token);
        let body = self
            .agent
            .get(&url)
            .header("Authorization", auth.as_str())
            .call()?
            .body_mut()
            .read_to_string()?;

        serde_json::from_str(&body).map_err(|e| FeesError::Decode {
            endpoint: path.to_string(),
            source: e,
        })
    }
}
