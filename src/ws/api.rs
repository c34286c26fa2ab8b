/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::errors::PiwigoError;
use crate::ws::form;
use crate::ws::methods::Method;
use log::debug;
use num_enum::TryFromPrimitive;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Web-service path appended to the gallery address.
pub const API_PATH: &str = "/ws.php?format=json";

/// Directly communicates with the web service.
///
/// One instance is bound to one gallery address for its whole lifetime.
/// The HTTP client keeps the cookie the server issues on login, which is
/// all the session state the service uses.
#[derive(Debug, Clone)]
pub struct ApiClient {
    host: String,
    endpoint: url::Url,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the gallery at `host`, e.g.
    /// `https://gallery.example.com` or `https://example.com/piwigo`.
    pub fn new(host: &str) -> Result<Self, PiwigoError> {
        let host = host.trim_end_matches('/').to_string();
        let endpoint = url::Url::parse(&format!("{host}{API_PATH}"))?;
        Ok(Self {
            host,
            endpoint,
            https_client: reqwest::Client::builder().cookie_store(true).build()?,
        })
    }

    /// Creates a client for a different gallery address that shares this
    /// one's transport (connection pool and cookie store; cookies stay
    /// scoped to the host that set them).
    pub fn with_host(&self, host: &str) -> Result<Self, PiwigoError> {
        let host = host.trim_end_matches('/').to_string();
        let endpoint = url::Url::parse(&format!("{host}{API_PATH}"))?;
        Ok(Self {
            host,
            endpoint,
            https_client: self.https_client.clone(),
        })
    }

    /// Address of the gallery this client talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Issues one `method` call against the gallery.
    ///
    /// `params` is serialized to JSON and flattened into the multipart
    /// form the service expects. Returns the decoded `result` payload,
    /// which some mutating methods leave out.
    pub async fn send<T, P>(&self, method: Method, params: &P) -> Result<Option<T>, PiwigoError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let form = form::into_form(method, &serde_json::to_value(params)?);
        debug!("dispatching {} to {}", method, self.endpoint);
        let resp = self
            .https_client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;
        let body = resp.text().await?;
        match serde_json::from_str::<ResponseBody<T>>(&body) {
            Ok(body) => {
                if body.stat != "ok" {
                    let code = body.err.unwrap_or_default();
                    let message = body.message.unwrap_or_default();
                    debug!("{} returned error {}: {}", method, code, message);
                    return Err(PiwigoError::ApiResponse(code, message));
                }
                Ok(body.result)
            }
            Err(err) => Err(PiwigoError::ApiResponseMalformed(err)),
        }
    }
}

/// Error codes the web service is known to emit in failed envelopes.
///
/// The `err` field is open ended (plugins add their own codes), so
/// classification is fallible and unknown codes stay raw in
/// [`PiwigoError::ApiResponse`].
#[derive(Debug, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    AccessDenied = 401,
    Forbidden = 403,
    NotFound = 404,
    PostRequired = 405,
    ServerError = 500,
    InvalidMethod = 501,
    AuthenticationFailed = 999,
    MissingParameter = 1002,
    InvalidParameter = 1003,
}

// Base expected response body to be returned from the web service
#[derive(Deserialize, Debug)]
struct ResponseBody<ResponseType> {
    stat: String,
    err: Option<u32>,
    message: Option<String>,
    result: Option<ResponseType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The envelope must not demand a Default impl of its payload type.
    #[derive(Deserialize, Debug)]
    struct Payload {
        version: String,
    }

    #[test]
    fn an_ok_envelope_decodes_with_every_optional_field_absent() {
        let body = serde_json::from_str::<ResponseBody<Payload>>(r#"{"stat":"ok"}"#).unwrap();
        assert_eq!(body.stat, "ok");
        assert!(body.err.is_none());
        assert!(body.message.is_none());
        assert!(body.result.is_none());
    }

    #[test]
    fn a_result_payload_decodes_when_present() {
        let body = serde_json::from_str::<ResponseBody<Payload>>(
            r#"{"stat":"ok","result":{"version":"15.0.0"}}"#,
        )
        .unwrap();
        assert_eq!(body.result.unwrap().version, "15.0.0");
    }

    #[test]
    fn a_failed_envelope_carries_its_code_and_message() {
        let body = serde_json::from_str::<ResponseBody<Payload>>(
            r#"{"stat":"fail","err":501,"message":"Method name is not valid"}"#,
        )
        .unwrap();
        assert_eq!(body.stat, "fail");
        assert_eq!(body.err, Some(501));
        assert_eq!(body.message.as_deref(), Some("Method name is not valid"));
        assert!(body.result.is_none());
    }
}
