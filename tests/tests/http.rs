use std::fs;

use tests::{request, TestServer};

const OCTET_STREAM: (&str, &str) = ("Content-Type", "application/octet-stream");

#[test]
fn test_root() {
    let server = TestServer::start();
    let response = server.get("/", &[("Host", "localhost:4221")]);

    assert_eq!(response.bytes, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_echo() {
    let server = TestServer::start();
    let response = server.get("/echo/hello-world", &[]);

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("Content-Length"), Some("11"));
    assert_eq!(response.body(), b"hello-world");
}

#[test]
fn test_echo_nested_path() {
    let server = TestServer::start();
    let response = server.get("/echo/abc/def/", &[]);

    assert_eq!(response.body(), b"abc/def");
    assert_eq!(response.header("Content-Length"), Some("7"));
}

#[test]
fn test_echo_gzip() {
    let server = TestServer::start();
    let response = server.get("/echo/abc", &[("Accept-Encoding", "invalid-encoding-1, gzip, invalid-encoding-2")]);

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Encoding"), Some("gzip"));
    assert_eq!(response.header("Vary"), Some("Accept-Encoding"));

    let compressed_length = response.body().len();
    let expected_length = (compressed_length + 2).to_string();
    assert_eq!(response.header("Content-Length"), Some(expected_length.as_str()));

    assert_eq!(response.text(), "abc");
}

#[test]
fn test_echo_without_gzip() {
    let server = TestServer::start();
    let response = server.get("/echo/abc", &[("Accept-Encoding", "invalid-encoding")]);

    assert_eq!(response.header("Content-Encoding"), None);
    assert_eq!(response.header("Vary"), None);
    assert_eq!(response.body(), b"abc");
}

#[test]
fn test_user_agent() {
    let server = TestServer::start();
    let response = server.get("/user-agent", &[("User-Agent", "test-agent/1.0")]);

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Length"), Some("14"));
    assert_eq!(response.body(), b"test-agent/1.0");
}

#[test]
fn test_user_agent_lowercase_header() {
    let server = TestServer::start();
    let response = server.get("/user-agent", &[("user-agent", "curl/8.4.0")]);

    assert_eq!(response.body(), b"curl/8.4.0");
}

#[test]
fn test_user_agent_missing() {
    let server = TestServer::start();
    let response = server.get("/user-agent", &[]);

    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");
}

#[test]
fn test_get_file() {
    let server = TestServer::start();
    fs::write(server.files.join("hello.txt"), "Hello, World!").unwrap();

    let response = server.get("/files/hello.txt", &[]);

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(response.header("Content-Length"), Some("13"));
    assert_eq!(response.body(), b"Hello, World!");
}

#[test]
fn test_get_file_missing() {
    let server = TestServer::start();
    let response = server.get("/files/non_existent_file", &[]);

    assert_eq!(response.bytes, b"HTTP/1.1 404 Not Found\r\n\r\n");
    assert_eq!(response.header("Content-Type"), None);
    assert_eq!(response.header("Content-Length"), None);
}

#[test]
fn test_post_then_get_file() {
    let server = TestServer::start();
    let body = b"line one\nline two\n";

    let created = server.send(&request("POST", "/files/lines.txt", &[OCTET_STREAM], body));
    assert_eq!(created.bytes, b"HTTP/1.1 201 Created\r\n\r\n");
    assert_eq!(fs::read(server.files.join("lines.txt")).unwrap(), body);

    let response = server.get("/files/lines.txt", &[]);

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.body(), body);
    // newlines are not counted
    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_post_file_wrong_content_type() {
    let server = TestServer::start();
    let raw = request("POST", "/files/note.txt", &[("Content-Type", "text/plain")], b"hi");

    let response = server.send(&raw);

    assert_eq!(response.status_line, "HTTP/1.1 415 Unsupported Media Type");
    assert!(!server.files.join("note.txt").exists());
}

#[test]
fn test_unknown_path() {
    let server = TestServer::start();
    let response = server.get("/unknown-path", &[]);

    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.body(), b"<h1>404 Not Found</h1>");
}

#[test]
fn test_html_page_is_never_compressed() {
    let server = TestServer::start();
    fs::write(server.assets.join("index.html"), "<h1>Home</h1>").unwrap();

    let response = server.get("/index.html", &[("Accept-Encoding", "gzip")]);

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Encoding"), None);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("Content-Length"), Some("13"));
    assert_eq!(response.body(), b"<h1>Home</h1>");
}

#[test]
fn test_malformed_request_is_answered() {
    let server = TestServer::start();
    let response = server.send(b"GET /echo/abc\r\nHost: localhost\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
}

#[test]
fn test_malformed_header_is_answered() {
    let server = TestServer::start();
    let response = server.send(b"GET /echo/abc HTTP/1.1\r\nHost localhost\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");
}

#[test]
fn test_unsupported_method() {
    let server = TestServer::start();
    let response = server.send(&request("PUT", "/files/a", &[OCTET_STREAM], b"x"));

    assert_eq!(response.status_line, "HTTP/1.1 501 Not Implemented");
}

#[test]
fn test_concurrent_connections() {
    let server = TestServer::start();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let server = &server;
                scope.spawn(move || server.get(&format!("/echo/{}", i), &[]))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let response = handle.join().unwrap();
            assert_eq!(response.body(), i.to_string().as_bytes());
        }
    });
}

#[test]
fn test_access_log() {
    let server = TestServer::start();
    server.get("/echo/abc", &[]);
    server.send(b"nonsense\r\n\r\n");

    let lines = server.log.wait_for(2);

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().any(|l| l.contains("accessing /echo/abc with method GET: 200 OK")));
    assert!(lines.iter().any(|l| l.contains("sent an unreadable request: 400 Bad Request")));
}
