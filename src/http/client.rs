use std::error::Error as _;

use reqwest::header::{HeaderName, HeaderValue};

use super::request::RequestInput;
use super::response::HttpResponse;

/// Perform exactly one exchange. Any response that parses as HTTP comes back
/// as `Ok`, whatever its status; everything below HTTP is an `Err` message.
pub async fn send_request(
    client: &reqwest::Client,
    request: &RequestInput,
) -> Result<HttpResponse, String> {
    let method: reqwest::Method = request.method.into();
    let mut req_builder = client.request(method, request.url.clone());

    for (key, value) in &request.headers {
        let header_name =
            HeaderName::from_bytes(key.as_bytes()).map_err(|e| format!("Invalid header key `{key}`: {e}"))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| format!("Invalid header value `{value}`: {e}"))?;
        req_builder = req_builder.header(header_name, header_value);
    }

    if let Some(body) = &request.body {
        req_builder = req_builder.body(body.clone());
    }

    let response = req_builder
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", describe(&e)))?;

    let status = response.status().as_u16();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("Failed to read response: {}", describe(&e)))?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(HttpResponse { status, body })
}

/// Flatten an error and its sources into one line, e.g.
/// `error sending request for url (...): client error (Connect): Connection refused`.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
