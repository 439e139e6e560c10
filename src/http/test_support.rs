use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};

const READ_CHUNK: usize = 4096;
const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// What the mock server does with the n-th accepted connection.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ConnectionBehavior {
    Respond(u16),
    /// Read the request and never answer.
    Hang,
    /// Read the request and close the socket without answering.
    Close,
}

#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    pub(crate) head: String,
    pub(crate) body: Vec<u8>,
}

impl CapturedRequest {
    pub(crate) fn method(&self) -> &str {
        self.head.split_whitespace().next().unwrap_or_default()
    }

    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }
}

type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

pub(crate) struct MockServer {
    pub(crate) url: String,
    connections: Arc<AtomicUsize>,
    captured: Captured,
    accept_task: JoinHandle<()>,
}

impl MockServer {
    /// Binds an ephemeral port and serves each accepted connection according
    /// to `script(connection_index)`. Responses carry `Connection: close`, so
    /// every request arrives on its own connection.
    pub(crate) async fn start<F>(script: F) -> AppResult<Self>
    where
        F: Fn(usize) -> ConnectionBehavior + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let connections = Arc::new(AtomicUsize::new(0));
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));

        let accept_connections = Arc::clone(&connections);
        let accept_captured = Arc::clone(&captured);
        let accept_task = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let index = accept_connections.fetch_add(1, Ordering::SeqCst);
                let behavior = script(index);
                let captured = Arc::clone(&accept_captured);
                tokio::spawn(handle_connection(stream, behavior, captured));
            }
        });

        Ok(Self {
            url: format!("http://{}/", addr),
            connections,
            captured,
            accept_task,
        })
    }

    pub(crate) fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> AppResult<Vec<CapturedRequest>> {
        self.captured
            .lock()
            .map(|captured| captured.clone())
            .map_err(|_poisoned| AppError::validation("Capture lock poisoned"))
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

/// Returns a URL on a port that refuses connections.
pub(crate) async fn refused_url() -> AppResult<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

async fn handle_connection(mut stream: TcpStream, behavior: ConnectionBehavior, captured: Captured) {
    let Ok(request) = read_request(&mut stream).await else {
        return;
    };
    if let Ok(mut captured) = captured.lock() {
        captured.push(request);
    }

    match behavior {
        ConnectionBehavior::Respond(status) => {
            let response = format!(
                "HTTP/1.1 {} Mock\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
                status
            );
            if stream.write_all(response.as_bytes()).await.is_err() {
                return;
            }
            drop(stream.shutdown().await);
        }
        ConnectionBehavior::Hang => {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        ConnectionBehavior::Close => drop(stream),
    }
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<CapturedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    let head_end = loop {
        if let Some(pos) = buffer
            .windows(HEAD_TERMINATOR.len())
            .position(|window| window == HEAD_TERMINATOR)
        {
            break pos;
        }
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        buffer.extend_from_slice(chunk.get(..read).unwrap_or_default());
    };

    let head = String::from_utf8_lossy(buffer.get(..head_end).unwrap_or_default()).into_owned();
    let body_start = head_end.saturating_add(HEAD_TERMINATOR.len());
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let body_end = body_start.saturating_add(content_length);

    while buffer.len() < body_end {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(chunk.get(..read).unwrap_or_default());
    }

    let body = buffer
        .get(body_start..body_end.min(buffer.len()))
        .map(<[u8]>::to_vec)
        .unwrap_or_default();
    Ok(CapturedRequest { head, body })
}
