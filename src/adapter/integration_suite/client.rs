//! Integration Suite Client
//!
//! 統合プラットフォーム API クライアントの実装

use async_trait::async_trait;
use log::debug;

use super::requests::{
    build_fetch_csrf_request, build_token_request, build_update_resource_request,
    check_update_response, parse_access_token, parse_csrf_token,
};
use crate::adapter::http::HttpTransport;
use crate::application::dto::connection_config::ConnectionConfig;
use crate::domain::entities::iflow::{Iflow, Script};
use crate::domain::entities::session::Session;
use crate::domain::errors::ClientError;
use crate::domain::repositories::integration_client::IntegrationClient;

/// Protocol client holding the session of one upload run
pub struct IntegrationSuiteClient<T: HttpTransport> {
    transport: T,
    config: ConnectionConfig,
    session: Session,
}

impl<T: HttpTransport> IntegrationSuiteClient<T> {
    pub fn new(transport: T, config: ConnectionConfig) -> Self {
        Self {
            transport,
            config,
            session: Session::new(),
        }
    }

    /// Starts from an existing session instead of an empty one
    #[cfg(test)]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[async_trait]
impl<T: HttpTransport> IntegrationClient for IntegrationSuiteClient<T> {
    async fn request_token(&mut self) -> Result<(), ClientError> {
        let request = build_token_request(
            &self.config.token_url,
            &self.config.client_id,
            &self.config.client_secret,
        )?;
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Transport)?;

        let access_token = parse_access_token(&response)?;
        self.session.set_access_token(access_token);
        debug!("Access token acquired");
        Ok(())
    }

    async fn fetch_csrf_token(&mut self) -> Result<(), ClientError> {
        let access_token = self
            .session
            .access_token()
            .ok_or(ClientError::NoAccessToken)?;

        let request = build_fetch_csrf_request(&self.config.api_url, access_token)?;
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Transport)?;

        let csrf_token = parse_csrf_token(&response)?;
        self.session.set_csrf_token(csrf_token);
        debug!("CSRF token acquired");
        Ok(())
    }

    async fn update_resource(
        &self,
        payload: &[u8],
        iflow: &Iflow,
        script: &Script,
    ) -> Result<(), ClientError> {
        let access_token = self
            .session
            .access_token()
            .ok_or(ClientError::NoAccessToken)?;
        let csrf_token = self
            .session
            .csrf_token()
            .ok_or(ClientError::NoCsrfToken)?;

        let request = build_update_resource_request(
            &self.config.api_url,
            iflow,
            script,
            payload,
            access_token,
            csrf_token,
        )?;
        debug!("{} {}", request.method, request.request_uri());

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Transport)?;

        check_update_response(&response)
    }
}
