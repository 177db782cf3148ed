//! libcurl-backed transport.
//!
//! One `Easy` handle per request; nothing is pooled or kept between calls.
//! Runs in the current thread; call from `spawn_blocking` if used from async code.

use super::{HttpRequest, HttpResponse, RequestBody, Transport};
use crate::config::ClientConfig;
use crate::descriptor::HttpMethod;
use crate::error::ClientError;
use curl::easy::{Easy, Form, List};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct CurlTransport {
    base_url: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl CurlTransport {
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::Validation(format!("invalid base URL {}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::Validation(format!(
                "base URL must be http or https ({})",
                base_url
            )));
        }
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            connect_timeout,
            request_timeout,
        })
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&cfg.base_url, cfg.connect_timeout(), cfg.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn configure(
        &self,
        easy: &mut Easy,
        request: &HttpRequest,
        form: Option<Form>,
    ) -> Result<(), curl::Error> {
        easy.url(&self.url_for(&request.path))?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        let mut headers = List::new();
        headers.append("Accept: application/json")?;

        match request.method {
            HttpMethod::Get => easy.get(true)?,
            HttpMethod::Post => easy.post(true)?,
            HttpMethod::Delete => easy.custom_request("DELETE")?,
        }

        match &request.body {
            RequestBody::Empty => {
                if request.method == HttpMethod::Post {
                    easy.post_field_size(0)?;
                }
            }
            RequestBody::Json(bytes) => {
                headers.append("Content-Type: application/json")?;
                easy.post_fields_copy(bytes)?;
            }
            RequestBody::Multipart(_) => {
                // Suppress `Expect: 100-continue`; the cluster answers it poorly.
                headers.append("Expect:")?;
            }
        }
        if let Some(form) = form {
            easy.httppost(form)?;
        }

        easy.http_headers(headers)?;
        Ok(())
    }
}

fn build_form(body: &RequestBody) -> Result<Option<Form>, ClientError> {
    let RequestBody::Multipart(files) = body else {
        return Ok(None);
    };
    let mut form = Form::new();
    for upload in files {
        form.part(&upload.field)
            .file(&upload.path)
            .content_type(&upload.content_type)
            .add()?;
    }
    Ok(Some(form))
}

/// Errors from `perform`: timeouts are their own kind, everything else is a
/// connection failure for the retry classifier to inspect.
fn perform_error(e: curl::Error) -> ClientError {
    if e.is_operation_timedout() {
        ClientError::Timeout
    } else {
        ClientError::Connection(e)
    }
}

impl Transport for CurlTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let form = build_form(&request.body)?;
        let mut easy = Easy::new();
        self.configure(&mut easy, request, form)
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| ClientError::Setup(e.to_string()))?;
            transfer.perform().map_err(perform_error)?;
        }

        let status = easy.response_code().map_err(perform_error)?;
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            bytes = body.len(),
            "http exchange"
        );
        Ok(HttpResponse { status, body })
    }
}
