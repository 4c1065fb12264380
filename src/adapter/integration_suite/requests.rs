//! Integration Suite Request Building
//!
//! リクエストの組み立てとレスポンスの解釈

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use url::Url;

use crate::adapter::http::{HttpRequest, HttpResponse};
use crate::domain::entities::iflow::{Iflow, Script};
use crate::domain::errors::ClientError;

pub const CSRF_TOKEN_HEADER: &str = "x-csrf-token";
pub const CSRF_FETCH: &str = "fetch";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const APPLICATION_JSON: &str = "application/json";

fn parse_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
        name,
        reason: e.to_string(),
    })
}

fn bearer(access_token: &str) -> Result<HeaderValue, ClientError> {
    header_value("authorization", &format!("Bearer {}", access_token))
}

/// Builds the OAuth2 client-credentials request with Basic authentication
pub fn build_token_request(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<HttpRequest, ClientError> {
    let mut url = parse_url(token_url)?;
    url.query_pairs_mut()
        .append_pair("grant_type", "client_credentials");

    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let mut request = HttpRequest::new(Method::POST, url);
    request.headers.insert(
        AUTHORIZATION,
        header_value("authorization", &format!("Basic {}", credentials))?,
    );
    request
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
    Ok(request)
}

/// Checks the status and extracts `access_token` from the JSON body
pub fn parse_access_token(response: &HttpResponse) -> Result<String, ClientError> {
    if response.status != StatusCode::OK {
        return Err(ClientError::UnexpectedStatus {
            status: response.status.as_u16(),
            body: response.body_text(),
        });
    }

    let body: Value =
        serde_json::from_slice(&response.body).map_err(ClientError::InvalidTokenResponse)?;

    match body.get("access_token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(ClientError::EmptyAccessToken),
    }
}

pub fn build_fetch_csrf_request(
    api_url: &str,
    access_token: &str,
) -> Result<HttpRequest, ClientError> {
    let url = parse_url(&format!("{}/api/v1/", api_url))?;

    let mut request = HttpRequest::new(Method::GET, url);
    request.headers.insert(AUTHORIZATION, bearer(access_token)?);
    request
        .headers
        .insert(CSRF_TOKEN_HEADER, HeaderValue::from_static(CSRF_FETCH));
    Ok(request)
}

/// Checks the status and extracts the token from the `x-csrf-token` header
pub fn parse_csrf_token(response: &HttpResponse) -> Result<String, ClientError> {
    if response.status != StatusCode::OK {
        return Err(ClientError::UnexpectedStatus {
            status: response.status.as_u16(),
            body: response.body_text(),
        });
    }

    match response.header(CSRF_TOKEN_HEADER) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(ClientError::CsrfTokenNotFound),
    }
}

pub fn update_resource_url(api_url: &str, iflow: &Iflow, script: &Script) -> String {
    format!(
        "{}/api/v1/IntegrationDesigntimeArtifacts(Id='{}',Version='{}')/$links/Resources(Name='{}',ResourceType='{}')",
        api_url, iflow.id, iflow.version, script.id, script.script_type
    )
}

pub fn build_update_resource_request(
    api_url: &str,
    iflow: &Iflow,
    script: &Script,
    payload: &[u8],
    access_token: &str,
    csrf_token: &str,
) -> Result<HttpRequest, ClientError> {
    let url = parse_url(&update_resource_url(api_url, iflow, script))?;
    let body = json!({ "ResourceContent": STANDARD.encode(payload) });

    let mut request = HttpRequest::new(Method::PUT, url);
    request
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    request.headers.insert(
        CSRF_TOKEN_HEADER,
        header_value(CSRF_TOKEN_HEADER, csrf_token)?,
    );
    request.headers.insert(AUTHORIZATION, bearer(access_token)?);
    request.body = Some(body.to_string().into_bytes());
    Ok(request)
}

/// Creation (201) and update (200) are both success
pub fn check_update_response(response: &HttpResponse) -> Result<(), ClientError> {
    match response.status {
        StatusCode::OK | StatusCode::CREATED => Ok(()),
        status => Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body: response.body_text(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;

    const TOKEN_URL: &str = "https://itevia.com/oauth/token";
    const API_URL: &str = "https://api.itevia.com";
    const BAD_URL: &str = "://bad-url";

    fn test_iflow() -> Iflow {
        Iflow::new("iflowid", "iflowversion", vec![])
    }

    fn test_script() -> Script {
        Script::new("scriptid", "scripttype", "scriptpath")
    }

    #[test]
    fn test_build_token_request() {
        assert!(matches!(
            build_token_request(BAD_URL, "clientid", "clientsecret"),
            Err(ClientError::InvalidUrl { .. })
        ));

        let request = build_token_request(TOKEN_URL, "clientid", "clientsecret").unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.request_uri(),
            "/oauth/token?grant_type=client_credentials"
        );
        assert_eq!(
            request.header("authorization"),
            Some(format!("Basic {}", STANDARD.encode("clientid:clientsecret")).as_str())
        );
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_fetch_csrf_request() {
        assert!(build_fetch_csrf_request(BAD_URL, "myaccesstoken").is_err());

        let request = build_fetch_csrf_request(API_URL, "myaccesstoken").unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.request_uri(), "/api/v1/");
        assert_eq!(request.header("authorization"), Some("Bearer myaccesstoken"));
        assert_eq!(request.header(CSRF_TOKEN_HEADER), Some(CSRF_FETCH));
    }

    #[test]
    fn test_build_update_resource_request() {
        assert!(build_update_resource_request(
            BAD_URL,
            &test_iflow(),
            &test_script(),
            b"data",
            "myaccesstoken",
            "mycsrftoken"
        )
        .is_err());

        let request = build_update_resource_request(
            API_URL,
            &test_iflow(),
            &test_script(),
            b"data",
            "myaccesstoken",
            "mycsrftoken",
        )
        .unwrap();

        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.request_uri(),
            "/api/v1/IntegrationDesigntimeArtifacts(Id='iflowid',Version='iflowversion')/$links/Resources(Name='scriptid',ResourceType='scripttype')"
        );
        assert_eq!(request.header("authorization"), Some("Bearer myaccesstoken"));
        assert_eq!(request.header(CSRF_TOKEN_HEADER), Some("mycsrftoken"));
        assert_eq!(request.header("content-type"), Some("application/json"));

        let body: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "ResourceContent": "ZGF0YQ==" }));
    }

    #[test]
    fn test_invalid_token_cannot_be_sent_as_header() {
        let result = build_fetch_csrf_request(API_URL, "bad\ntoken");
        assert!(matches!(
            result,
            Err(ClientError::InvalidHeader {
                name: "authorization",
                ..
            })
        ));
    }

    #[test]
    fn test_request_building_errors_carry_the_cause_as_text() {
        let err = build_token_request(BAD_URL, "clientid", "clientsecret").unwrap_err();
        match err {
            ClientError::InvalidUrl { url, reason } => {
                assert_eq!(url, BAD_URL);
                assert_eq!(reason, url::ParseError::RelativeUrlWithoutBase.to_string());
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = build_fetch_csrf_request(API_URL, "bad\ntoken").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("invalid value for header authorization: "));
    }

    #[test]
    fn test_parse_access_token() {
        let err = parse_access_token(&HttpResponse::new(StatusCode::BAD_REQUEST)).unwrap_err();
        assert_eq!(err.status(), Some(400));

        let err = parse_access_token(
            &HttpResponse::new(StatusCode::OK).with_body(r#"{"a":"b"}"#),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::EmptyAccessToken));

        let err = parse_access_token(
            &HttpResponse::new(StatusCode::OK).with_body(r#"{"access_token": 42}"#),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::EmptyAccessToken));

        let err = parse_access_token(
            &HttpResponse::new(StatusCode::OK).with_body(r#"{access_token": "myaccesstoken"}"#),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidTokenResponse(_)));

        let token = parse_access_token(
            &HttpResponse::new(StatusCode::OK).with_body(r#"{"access_token": "myaccesstoken"}"#),
        )
        .unwrap();
        assert_eq!(token, "myaccesstoken");
    }

    #[test]
    fn test_parse_csrf_token() {
        let err = parse_csrf_token(&HttpResponse::new(StatusCode::BAD_GATEWAY)).unwrap_err();
        assert_eq!(err.status(), Some(502));

        let err = parse_csrf_token(&HttpResponse::new(StatusCode::OK)).unwrap_err();
        assert!(matches!(err, ClientError::CsrfTokenNotFound));

        let response = HttpResponse::new(StatusCode::OK).with_header(
            HeaderName::from_static(CSRF_TOKEN_HEADER),
            HeaderValue::from_static("X"),
        );
        assert_eq!(parse_csrf_token(&response).unwrap(), "X");
    }

    #[test]
    fn test_check_update_response() {
        assert!(check_update_response(&HttpResponse::new(StatusCode::OK)).is_ok());
        assert!(check_update_response(&HttpResponse::new(StatusCode::CREATED)).is_ok());

        let err = check_update_response(
            &HttpResponse::new(StatusCode::BAD_GATEWAY).with_body(r#"{"message":"error cause"}"#),
        )
        .unwrap_err();
        assert!(err.to_string().contains("error cause"));
        assert_eq!(err.status(), Some(502));
    }
}
