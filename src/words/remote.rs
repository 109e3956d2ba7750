//! Remote word service client
//!
//! Asks an HTTP endpoint for a random word of a given length. The endpoint
//! answers `GET <endpoint>?length=<n>` with a JSON array whose first element
//! is the word.

use std::time::Duration;
use thiserror::Error;

/// Default word service
pub const DEFAULT_ENDPOINT: &str = "https://random-word-api.herokuapp.com/word";

/// Default bound on a single lookup
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7);

/// Why a remote lookup produced no usable word
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("word service returned an empty list")]
    Empty,
    #[error("word service returned '{word}', expected {expected} ASCII letters")]
    Malformed { word: String, expected: usize },
    #[error("remote lookup disabled")]
    Disabled,
}

/// Something that can be asked for a word of a given length
///
/// Implementations make at most one attempt per call; retrying and falling
/// back are the caller's business.
pub trait RemoteLookup {
    /// Look up one word of exactly `length` letters
    ///
    /// # Errors
    /// Returns `LookupError` on any transport, status, or payload problem.
    fn lookup(&self, length: usize) -> Result<String, LookupError>;
}

/// Blocking HTTP client for the word service
#[derive(Debug, Clone)]
pub struct HttpLookup {
    endpoint: String,
    timeout: Duration,
}

impl HttpLookup {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpLookup {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }
}

impl RemoteLookup for HttpLookup {
    fn lookup(&self, length: usize) -> Result<String, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let words: Vec<String> = client
            .get(&self.endpoint)
            .query(&[("length", length)])
            .send()?
            .error_for_status()?
            .json()?;

        let word = words.into_iter().next().ok_or(LookupError::Empty)?;
        validate(&word, length)
    }
}

/// Lookup that never reaches the network
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl RemoteLookup for Offline {
    fn lookup(&self, _length: usize) -> Result<String, LookupError> {
        Err(LookupError::Disabled)
    }
}

/// Accept only words the game can actually play with
fn validate(word: &str, expected: usize) -> Result<String, LookupError> {
    let word = word.trim().to_lowercase();
    if word.len() == expected && word.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(word)
    } else {
        Err(LookupError::Malformed { word, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answer exactly one request with `status` and a JSON `body`
    ///
    /// The handle yields the request line the server received.
    fn serve_once(status: &'static str, body: &'static str) -> (HttpLookup, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }

            write!(
                stream,
                "HTTP/1.1 {status}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_string()
        });

        let lookup = HttpLookup::new(format!("http://{addr}/word"), Duration::from_secs(5));
        (lookup, handle)
    }

    #[test]
    fn first_word_of_array_is_used() {
        let (lookup, server) = serve_once("200 OK", r#"["Apple", "mango"]"#);
        assert_eq!(lookup.lookup(5).unwrap(), "apple");
        assert!(server.join().unwrap().starts_with("GET /word?length=5 "));
    }

    #[test]
    fn empty_array_is_empty() {
        let (lookup, server) = serve_once("200 OK", "[]");
        assert!(matches!(lookup.lookup(5), Err(LookupError::Empty)));
        server.join().unwrap();
    }

    #[test]
    fn non_array_body_is_an_error() {
        let (lookup, server) = serve_once("200 OK", r#"{"w":1}"#);
        assert!(matches!(lookup.lookup(5), Err(LookupError::Http(e)) if e.is_decode()));
        server.join().unwrap();
    }

    #[test]
    fn error_status_is_an_error() {
        let (lookup, server) = serve_once("500 Internal Server Error", r#"["apple"]"#);
        let err = lookup.lookup(5).unwrap_err();
        assert!(matches!(
            &err,
            LookupError::Http(e) if e.status() == Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        ));
        server.join().unwrap();
    }

    #[test]
    fn served_word_of_wrong_length_is_malformed() {
        let (lookup, server) = serve_once("200 OK", r#"["banana"]"#);
        assert!(matches!(
            lookup.lookup(5),
            Err(LookupError::Malformed { expected: 5, .. })
        ));
        server.join().unwrap();
    }

    #[test]
    fn validate_accepts_exact_length() {
        assert_eq!(validate("Apple", 5).unwrap(), "apple");
    }

    #[test]
    fn validate_rejects_wrong_length() {
        assert!(matches!(
            validate("banana", 5),
            Err(LookupError::Malformed { expected: 5, .. })
        ));
    }

    #[test]
    fn validate_rejects_non_letters() {
        assert!(validate("ice-cream", 9).is_err());
        assert!(validate("", 4).is_err());
    }

    #[test]
    fn offline_always_fails() {
        assert!(matches!(Offline.lookup(5), Err(LookupError::Disabled)));
    }

    #[test]
    fn unreachable_endpoint_is_an_error() {
        // Port 9 (discard) is closed on loopback, so the connection is refused quickly
        let lookup = HttpLookup::new("http://127.0.0.1:9/word", Duration::from_millis(500));
        assert!(matches!(lookup.lookup(5), Err(LookupError::Http(_))));
    }

    #[test]
    fn default_points_at_word_service() {
        let lookup = HttpLookup::default();
        assert_eq!(lookup.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(lookup.timeout(), DEFAULT_TIMEOUT);
    }
}
