//! Common test utilities and fixtures for wavotes tests
//!
//! Fixture content follows what the hourly vote recorder writes: quoted
//! fields wherever a value contains a comma, doubled quotes inside them.

use std::path::Path;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wavotes::source::{MemorySource, RESOLUTIONS_CSV, VOTES_CSV};

/// Three resolutions across both chambers, one with a quoted co-author list
pub const RESOLUTIONS_FIXTURE: &str = concat!(
    "id,council,name,proposed_by,promoted,coauthor\n",
    "310,1,Repeal \"Rights of Minors\",alpha,1700000000,\"beta,gamma land\"\n",
    "311,2,\"Commend Testlandia, Again\",beta,1700345600,\n",
    "312,1,\"The \"\"Fair\"\" Trade Act\",gamma land,1700691200,alpha\n",
);

/// Four nations; an empty cell means no vote
pub const VOTES_FIXTURE: &str = concat!(
    "nation_id,310,311,312\n",
    "alpha,1,1,0\n",
    "beta,0,1,0\n",
    "gamma_land,1,,1\n",
    "delta,,0,1\n",
);

/// In-memory source serving the two fixtures
pub fn memory_source() -> MemorySource {
    MemorySource::new()
        .with_resource(RESOLUTIONS_CSV, RESOLUTIONS_FIXTURE)
        .with_resource(VOTES_CSV, VOTES_FIXTURE)
}

/// Write both fixtures into `dir`
pub async fn write_fixtures(dir: &Path) {
    tokio::fs::write(dir.join(RESOLUTIONS_CSV), RESOLUTIONS_FIXTURE)
        .await
        .unwrap();
    tokio::fs::write(dir.join(VOTES_CSV), VOTES_FIXTURE)
        .await
        .unwrap();
}

/// Temporary directory holding both fixtures
#[allow(dead_code)]
pub async fn fixture_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path()).await;
    temp_dir
}

/// Serve canned responses over HTTP/1.1 on a random local port.
///
/// Each route is `(path, status, body)`; unknown paths answer 404.
/// Returns the base URL `http://127.0.0.1:<port>/data/`.
#[allow(dead_code)]
pub async fn spawn_http_server(routes: Vec<(String, u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();

            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map(|(_, s, b)| (*s, b.clone()))
                    .unwrap_or((404, String::new()));
                let reason = if status == 200 { "OK" } else { "Error" };

                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/data/")
}

/// HTTP client that never goes through a proxy, for talking to the local server
#[allow(dead_code)]
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
