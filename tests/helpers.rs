/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One canned reply the stub gallery plays back.
#[allow(dead_code)]
pub(crate) struct StubReply {
    status: &'static str,
    content_type: &'static str,
    body: String,
    extra_headers: Vec<String>,
}

#[allow(dead_code)]
impl StubReply {
    pub(crate) fn json(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: "application/json",
            body: body.to_string(),
            extra_headers: Vec::new(),
        }
    }

    pub(crate) fn html(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: "text/html",
            body: body.to_string(),
            extra_headers: Vec::new(),
        }
    }

    pub(crate) fn with_header(mut self, header: &str) -> Self {
        self.extra_headers.push(header.to_string());
        self
    }
}

/// Stub gallery bound to a random local port. Plays back one canned
/// reply per request and captures each raw request for assertions.
#[allow(dead_code)]
pub(crate) struct Stub {
    pub(crate) host: String,
    requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl Stub {
    pub(crate) async fn serve(replies: Vec<StubReply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        tokio::spawn(async move {
            for reply in replies {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let request = read_request(&mut socket).await;
                captured.lock().unwrap().push(request);

                let extra = reply
                    .extra_headers
                    .iter()
                    .map(|h| format!("{h}\r\n"))
                    .collect::<String>();
                let response = format!(
                    "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\n{}connection: close\r\n\r\n{}",
                    reply.status,
                    reply.content_type,
                    reply.body.len(),
                    extra,
                    reply.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            host: format!("http://{addr}"),
            requests,
        }
    }

    /// Raw request (start line, headers and body) of the nth call.
    pub(crate) fn request(&self, n: usize) -> String {
        self.requests.lock().unwrap()[n].clone()
    }
}

// Reads one full HTTP request, honoring content-length or chunked
// framing for the body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = blank_line(&buf) {
            break pos;
        }
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return String::from_utf8_lossy(&buf).into_owned();
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let mut body: Vec<u8> = buf[header_end + 4..].to_vec();

    if let Some(len) = header_value(&headers, "content-length").and_then(|v| v.parse::<usize>().ok())
    {
        while body.len() < len {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
    } else if header_value(&headers, "transfer-encoding").is_some_and(|v| v.contains("chunked")) {
        while !body.windows(5).any(|w| w == b"0\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
        body = dechunk(&body);
    }

    let mut request = buf[..header_end + 4].to_vec();
    request.extend_from_slice(&body);
    String::from_utf8_lossy(&request).into_owned()
}

fn blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn header_value(headers: &str, name: &str) -> Option<String> {
    headers.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

fn dechunk(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut rest = raw;
    while let Some(line_end) = rest.windows(2).position(|w| w == b"\r\n") {
        let size_text = String::from_utf8_lossy(&rest[..line_end]);
        let Ok(size) = usize::from_str_radix(size_text.trim(), 16) else {
            break;
        };
        if size == 0 {
            break;
        }
        let start = line_end + 2;
        let end = start + size;
        if rest.len() < end {
            break;
        }
        out.extend_from_slice(&rest[start..end]);
        rest = rest.get(end + 2..).unwrap_or_default();
    }
    out
}

/// Value of one multipart form field in a captured request.
#[allow(dead_code)]
pub(crate) fn form_value(request: &str, field: &str) -> Option<String> {
    let marker = format!("name=\"{field}\"");
    let after_marker = request.find(&marker)? + marker.len();
    let rest = &request[after_marker..];
    let value_start = rest.find("\r\n\r\n")? + 4;
    let rest = &rest[value_start..];
    let value_end = rest.find("\r\n")?;
    Some(rest[..value_end].to_string())
}

#[allow(dead_code)]
pub(crate) struct GalleryLogin {
    pub(crate) host: String,
    pub(crate) username: String,
    pub(crate) password: String,
}

// Live-gallery credentials for the ignored tests.
#[allow(dead_code)]
pub(crate) fn get_gallery_login() -> anyhow::Result<GalleryLogin> {
    Ok(GalleryLogin {
        host: std::env::var("PIWIGO_HOST")?,
        username: std::env::var("PIWIGO_USERNAME")?,
        password: std::env::var("PIWIGO_PASSWORD")?,
    })
}
