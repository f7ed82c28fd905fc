//! Ollama server address resolution

/// Address used when nothing else is configured
pub const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1:11434";

/// Default port of a plain-HTTP Ollama server
const DEFAULT_PORT: u16 = 11434;

/// Normalize a user-supplied Ollama address.
///
/// Accepts the same loose forms as `OLLAMA_HOST`: a missing scheme means
/// `http`, a missing port means 11434 (443 for `https`), an empty host
/// means the loopback address, and trailing slashes are dropped.
pub fn normalize_host(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');
    if raw.is_empty() {
        return DEFAULT_OLLAMA_HOST.to_string();
    }

    let (scheme, rest) = raw.split_once("://").unwrap_or(("http", raw));
    let (authority, path) = match rest.split_once('/') {
        Some((authority, path)) => (authority, format!("/{}", path)),
        None => (rest, String::new()),
    };

    let has_port = authority
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()));

    let authority = match (authority, has_port) {
        ("", _) => format!("127.0.0.1:{}", DEFAULT_PORT),
        (a, true) if a.starts_with(':') => format!("127.0.0.1{}", a),
        (a, true) => a.to_string(),
        (a, false) if scheme == "https" => format!("{}:443", a),
        (a, false) => format!("{}:{}", a, DEFAULT_PORT),
    };

    format!("{}://{}{}", scheme, authority, path)
}

/// Pick the configured host, falling back to `OLLAMA_HOST`, then the default.
pub fn resolve_host(configured: Option<&str>, env_host: Option<&str>) -> String {
    configured
        .filter(|h| !h.trim().is_empty())
        .or(env_host.filter(|h| !h.trim().is_empty()))
        .map(normalize_host)
        .unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string())
}
