use reqwest::Url;

const SENSITIVE_PARAMS: [&str; 8] = [
    "token",
    "access_token",
    "apikey",
    "api_key",
    "key",
    "sig",
    "signature",
    "x-amz-signature",
];

/// Renders a URL for logs with credentials and signing parameters masked.
///
/// Signed storage links carry their authorization in the query string, so
/// the values of known secret parameters are replaced and any userinfo is
/// dropped.
pub fn redact_url(url: &Url) -> String {
    let mut redacted = url.clone();
    let _ = redacted.set_username("");
    let _ = redacted.set_password(None);

    if url.query().is_some() {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let value = if SENSITIVE_PARAMS.contains(&k.to_ascii_lowercase().as_str()) {
                    "[REDACTED]".to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), value)
            })
            .collect();

        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }

    redacted.to_string()
}
