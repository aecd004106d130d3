// REST client
//
// Thin typed wrapper over `Auth` for the appliance resources the CLI and most
// integrations need. Every response body is a `{"data": ...}` envelope; the
// envelope is stripped before the caller sees it. The event stream client
// shares the same transport.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{Auth, EventSource, TokenProvider};
use crate::error::Error;
use crate::keys::{CommandKey, SettingKey, StatusKey};
use crate::model::{
    ArrayOfCommands, ArrayOfHomeAppliances, ArrayOfSettings, ArrayOfStatus, HomeAppliance,
    Language, Program, PutValue, Setting, Status, content_type,
};
use crate::stream::SseClient;
use crate::transport::TransportConfig;

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Home Connect API client.
#[derive(Debug, Clone)]
pub struct Client {
    auth: Auth,
    sse: SseClient,
}

impl Client {
    /// Build a client for `host` from a transport config.
    pub fn new(
        host: Url,
        tokens: Arc<dyn TokenProvider>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let auth = Auth::new(host, tokens, transport)?;
        Ok(Self::from_auth(auth, transport))
    }

    pub fn from_auth(auth: Auth, transport: &TransportConfig) -> Self {
        let source: Arc<dyn EventSource> = Arc::new(auth.clone());
        let sse = SseClient::new(source).with_read_timeout(transport.read_timeout);
        Self { auth, sse }
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// The event stream client. Clones share one callback registry.
    pub fn sse(&self) -> &SseClient {
        &self.sse
    }

    // ── Appliances ───────────────────────────────────────────────────

    /// All appliances paired with the account.
    pub async fn get_home_appliances(&self) -> Result<ArrayOfHomeAppliances, Error> {
        self.get("/homeappliances", None).await
    }

    pub async fn get_specific_appliance(&self, ha_id: &str) -> Result<HomeAppliance, Error> {
        self.get(&format!("/homeappliances/{ha_id}"), None).await
    }

    // ── Status ───────────────────────────────────────────────────────

    pub async fn get_status(
        &self,
        ha_id: &str,
        language: Option<Language>,
    ) -> Result<ArrayOfStatus, Error> {
        self.get(&format!("/homeappliances/{ha_id}/status"), language)
            .await
    }

    pub async fn get_status_value(
        &self,
        ha_id: &str,
        key: StatusKey,
        language: Option<Language>,
    ) -> Result<Status, Error> {
        self.get_status_value_raw(ha_id, key.as_str(), language).await
    }

    /// Like [`get_status_value`](Self::get_status_value), for keys newer than
    /// [`StatusKey`] knows about.
    pub async fn get_status_value_raw(
        &self,
        ha_id: &str,
        key: &str,
        language: Option<Language>,
    ) -> Result<Status, Error> {
        self.get(&format!("/homeappliances/{ha_id}/status/{key}"), language)
            .await
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub async fn get_settings(
        &self,
        ha_id: &str,
        language: Option<Language>,
    ) -> Result<ArrayOfSettings, Error> {
        self.get(&format!("/homeappliances/{ha_id}/settings"), language)
            .await
    }

    pub async fn get_setting(
        &self,
        ha_id: &str,
        key: SettingKey,
        language: Option<Language>,
    ) -> Result<Setting, Error> {
        self.get(&format!("/homeappliances/{ha_id}/settings/{key}"), language)
            .await
    }

    pub async fn set_setting(&self, ha_id: &str, key: SettingKey, value: &Value) -> Result<(), Error> {
        let path = format!("/homeappliances/{ha_id}/settings/{key}");
        self.put(&path, &PutValue::new(key.as_str(), value)).await
    }

    // ── Programs ─────────────────────────────────────────────────────

    pub async fn get_active_program(
        &self,
        ha_id: &str,
        language: Option<Language>,
    ) -> Result<Program, Error> {
        self.get(&format!("/homeappliances/{ha_id}/programs/active"), language)
            .await
    }

    pub async fn stop_program(&self, ha_id: &str) -> Result<(), Error> {
        let path = format!("/homeappliances/{ha_id}/programs/active");
        let request = self.auth.request(Method::DELETE, &path, None).await?;
        self.auth.send(request).await?;
        Ok(())
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub async fn get_available_commands(
        &self,
        ha_id: &str,
        language: Option<Language>,
    ) -> Result<ArrayOfCommands, Error> {
        self.get(&format!("/homeappliances/{ha_id}/commands"), language)
            .await
    }

    /// Execute a command. Most commands take `true` as their value.
    pub async fn put_command(&self, ha_id: &str, key: CommandKey, value: &Value) -> Result<(), Error> {
        let path = format!("/homeappliances/{ha_id}/commands/{key}");
        self.put(&path, &PutValue::new(key.as_str(), value)).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        language: Option<Language>,
    ) -> Result<T, Error> {
        let request = self
            .auth
            .request(Method::GET, path, language)
            .await?
            .header(reqwest::header::ACCEPT, content_type::JSON);
        let response = self.auth.send(request).await?;
        let body = response.text().await?;

        serde_json::from_str::<DataEnvelope<T>>(&body)
            .map(|envelope| envelope.data)
            .map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            })
    }

    async fn put(&self, path: &str, body: &PutValue<'_>) -> Result<(), Error> {
        let request = self
            .auth
            .request(Method::PUT, path, None)
            .await?
            .header(reqwest::header::CONTENT_TYPE, content_type::JSON)
            .json(body);
        self.auth.send(request).await?;
        Ok(())
    }
}
