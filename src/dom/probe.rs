//! Résumé existence check.

use gloo_net::http::{Method, RequestBuilder, Response};

use crate::links::ProbeOutcome;

/// Send one HEAD request to `url`. Network errors count as missing.
///
/// No retry and no timeout: the browser's own fetch limits apply.
pub async fn head(url: &str) -> ProbeOutcome {
    let response = RequestBuilder::new(url).method(Method::HEAD).send().await;
    ProbeOutcome::from_response(response.as_ref().map(Response::ok))
}
