//! Blocking `ureq` implementation of [`ClassifierApi`].

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{
    ArticlePayload, ClassifierApi, EdaData, EvaluationArtifacts, HealthStatus, Prediction,
    RemoteError,
};
use crate::http_client;

const EDA_PATH: &str = "exploratory-data-analysis";
const ARTIFACTS_PATH: &str = "evaluation-artifacts";
const PREDICT_PATH: &str = "predict";
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Parse and normalize a base URL so endpoint paths join beneath it.
///
/// Only absolute `http`/`https` URLs are accepted. A trailing slash is added
/// so `https://host/api` resolves `predict` to `https://host/api/predict`.
pub fn parse_base_url(raw: &str) -> Result<Url, String> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|err| format!("'{trimmed}': {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("'{trimmed}': scheme must be http or https"));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(format!("'{trimmed}': not an absolute base URL"));
    }
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// HTTP client for the remote classifier, one attempt per call.
#[derive(Clone, Debug)]
pub struct ClassifierClient {
    base_url: Url,
    display_url: String,
    agent: ureq::Agent,
}

impl ClassifierClient {
    /// Create a client for `base_url` using the shared agent (no timeouts).
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        let parsed = parse_base_url(base_url).map_err(RemoteError::InvalidUrl)?;
        let display_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(Self {
            base_url: parsed,
            display_url,
            agent: http_client::agent().clone(),
        })
    }

    /// Apply a whole-request timeout; `None` keeps requests unbounded.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.agent = http_client::agent_with_timeout(timeout);
        }
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        self.base_url
            .join(path)
            .map_err(|err| RemoteError::InvalidUrl(format!("{path}: {err}")))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {url}");
        let response = self.agent.get(url.as_str()).call();
        decode_response(read_success(response)?)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RemoteError> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {url}");
        let response = self
            .agent
            .post(url.as_str())
            .set("Accept", "application/json")
            .send_json(body);
        decode_response(read_success(response)?)
    }
}

impl ClassifierApi for ClassifierClient {
    fn base_url(&self) -> &str {
        &self.display_url
    }

    fn fetch_eda(&self) -> Result<EdaData, RemoteError> {
        self.get_json(EDA_PATH)
    }

    fn fetch_evaluation_artifacts(&self) -> Result<EvaluationArtifacts, RemoteError> {
        self.get_json(ARTIFACTS_PATH)
    }

    fn predict(&self, payload: &ArticlePayload) -> Result<Prediction, RemoteError> {
        self.post_json(PREDICT_PATH, payload)
    }

    fn health(&self) -> Result<HealthStatus, RemoteError> {
        self.get_json("")
    }

    fn docs_url(&self) -> String {
        self.endpoint("docs")
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}/docs", self.display_url))
    }
}

fn read_success(result: Result<ureq::Response, ureq::Error>) -> Result<Vec<u8>, RemoteError> {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            let body = http_client::read_error_body(response, MAX_ERROR_BODY_BYTES);
            return Err(RemoteError::Status { status, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(RemoteError::Transport(err.to_string()));
        }
    };
    http_client::read_response_bytes(response, http_client::MAX_RESPONSE_BYTES)
        .map_err(|err| RemoteError::Decode(err.to_string()))
}

fn decode_response<T: DeserializeOwned>(bytes: Vec<u8>) -> Result<T, RemoteError> {
    if bytes.iter().all(|byte| byte.is_ascii_whitespace()) {
        return Err(RemoteError::Decode("Empty response body".to_string()));
    }
    tracing::debug!("Decoding {} response bytes", bytes.len());
    serde_json::from_slice(&bytes).map_err(|err| RemoteError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned response and hand back the raw request text.
    fn serve_once(response: String) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_request(&mut stream);
                let _ = stream.write_all(response.as_bytes());
                let _ = tx.send(request);
            }
        });
        (format!("http://{addr}"), rx)
    }

    fn read_request(stream: &mut std::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let Ok(read) = stream.read(&mut buf) else {
                break;
            };
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..read]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(split) = text.find("\r\n\r\n") {
                let content_length = text[..split]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= split + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    fn json_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[test]
    fn base_url_gains_trailing_slash_and_keeps_prefix() {
        let url = parse_base_url(" https://example.org/api?x=1 ").unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/");
        assert_eq!(url.join(PREDICT_PATH).unwrap().as_str(), "https://example.org/api/predict");
    }

    #[test]
    fn base_url_rejects_non_http_schemes() {
        assert!(parse_base_url("ftp://example.org").is_err());
        assert!(parse_base_url("not a url").is_err());
        assert!(ClassifierClient::new("mailto:someone@example.org").is_err());
    }

    #[test]
    fn fetch_eda_decodes_success_body() {
        let body = r#"{
            "general_stats": {"total_articles": 3, "avg_abstract_length": 900, "total_unique_labels": 1},
            "label_distribution": {"Oncological": 3},
            "length_distribution": {"501-1000": 3}
        }"#;
        let (url, requests) = serve_once(json_response("200 OK", body));
        let client = ClassifierClient::new(&url).unwrap();
        let eda = client.fetch_eda().unwrap();
        assert_eq!(eda.general_stats.total_articles, 3);
        let request = requests.recv().unwrap();
        assert!(request.starts_with("GET /exploratory-data-analysis "));
    }

    #[test]
    fn predict_posts_title_and_abstract() {
        let body = r#"{"labels": ["Oncological"], "confidences": [0.93], "is_low_confidence": false}"#;
        let (url, requests) = serve_once(json_response("200 OK", body));
        let client = ClassifierClient::new(&url).unwrap();
        let prediction = client
            .predict(&ArticlePayload::new("Tumor growth", "Metastasis in carcinoma"))
            .unwrap();
        assert_eq!(prediction.labels, vec!["Oncological".to_string()]);
        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /predict "));
        assert!(request.contains(r#""abstract":"Metastasis in carcinoma""#));
        assert!(request.contains(r#""title":"Tumor growth""#));
    }

    #[test]
    fn non_success_status_carries_code_and_body() {
        let (url, _requests) = serve_once(json_response(
            "404 Not Found",
            r#"{"detail": "Evaluation artifacts not found"}"#,
        ));
        let client = ClassifierClient::new(&url).unwrap();
        let err = client.fetch_evaluation_artifacts().unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.display_message().contains("Evaluation artifacts not found"));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let (url, _requests) = serve_once(json_response("200 OK", r#"{"labels": "nope"}"#));
        let client = ClassifierClient::new(&url).unwrap();
        let err = client
            .predict(&ArticlePayload::new("t", "a"))
            .unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ClassifierClient::new(&format!("http://{addr}")).unwrap();
        let err = client.health().unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn health_reads_root_endpoint() {
        let (url, requests) = serve_once(json_response(
            "200 OK",
            r#"{"status": "ok", "message": "running"}"#,
        ));
        let client = ClassifierClient::new(&url).unwrap();
        assert!(client.health().unwrap().is_ok());
        assert!(requests.recv().unwrap().starts_with("GET / "));
        assert_eq!(client.base_url(), url);
        assert_eq!(client.docs_url(), format!("{url}/docs"));
    }
}
