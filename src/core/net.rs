// src/core/net.rs
// HTTP/1.0 GET over plain TCP, std-only, no TLS. HTTP/1.0 with
// Connection: close means the server ends the stream for us, so there
// is no chunked-transfer handling. Single attempt, no retries: a
// network failure is fatal to startup.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::consts::{HTTP_PORT, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::IngestError;

/// Split an `http://` URL into (host, port, path).
///
/// `https://` is refused outright: this client is TLS-free. For
/// https-only sources, save the page and use the file source instead.
pub fn split_url(url: &str) -> Result<(String, u16, String), IngestError> {
    let rest = if let Some(r) = url.strip_prefix("http://") {
        r
    } else if url.starts_with("https://") {
        return Err(IngestError::fetch(format!(
            "https not supported (TLS-free client): {url}"
        )));
    } else {
        url
    };

    let (host_port, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    if host_port.is_empty() {
        return Err(IngestError::fetch(format!("bad url: {url}")));
    }

    let (host, port) = match host_port.rsplit_once(':') {
        Some((h, p)) => {
            let port = p
                .parse::<u16>()
                .map_err(|_| IngestError::fetch(format!("bad port in url: {url}")))?;
            (h, port)
        }
        None => (host_port, HTTP_PORT),
    };

    Ok((s!(host), port, s!(path)))
}

/// Perform a plain HTTP GET and return the response body.
pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, IngestError> {
    let mut stream = TcpStream::connect((host, port))
        .map_err(|e| IngestError::fetch(format!("connect {host}:{port}: {e}")))?;
    let timeout = Some(Duration::from_secs(HTTP_TIMEOUT_SECS));
    stream
        .set_read_timeout(timeout)
        .and_then(|_| stream.set_write_timeout(timeout))
        .map_err(|e| IngestError::fetch(format!("socket setup: {e}")))?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\n\r\n"
    );
    stream
        .write_all(req.as_bytes())
        .and_then(|_| stream.flush())
        .map_err(|e| IngestError::fetch(format!("send {host}{path}: {e}")))?;

    let mut buf = Vec::new();
    stream
        .read_to_end(&mut buf)
        .map_err(|e| IngestError::fetch(format!("read {host}{path}: {e}")))?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(IngestError::fetch(format!("HTTP error: {status} {host}{path}")));
    }

    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| IngestError::fetch(s!("malformed HTTP response")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}
