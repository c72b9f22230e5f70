use message::error::ParseError;
use message::method::Method;
use message::request::Request;
use message::response::Response;
use message::status::Status;
use tests::{request, RawResponse};

#[test]
fn test_request_round_trip() {
    let raw = request(
        "POST",
        "/files/report.bin",
        &[("Host", "localhost:4221"), ("Content-Type", "application/octet-stream")],
        &[0x00, 0x0a, 0xff],
    );

    let parsed = Request::parse(&raw).unwrap();
    let reparsed = Request::parse(&parsed.to_bytes()).unwrap();

    assert_eq!(reparsed.method(), Method::Post);
    assert_eq!(reparsed.path(), "/files/report.bin");
    assert_eq!(reparsed.headers(), parsed.headers());
    assert_eq!(reparsed.body(), &[0x00u8, 0x0a, 0xff]);
    assert_eq!(reparsed, parsed);
}

#[test]
fn test_echo_bodies_survive_compression() {
    for text in ["a", "hello-world", "ünïcødé", &"x".repeat(1500)] {
        let raw = request("GET", &format!("/echo/{}", text), &[("Accept-Encoding", "gzip")], b"");
        let parsed = Request::parse(&raw).unwrap();

        let mut response = Response::for_request(&parsed);
        response.set_content("text/plain", parsed.remainder());
        assert_eq!(response.status(), Status::Ok);

        let wire = RawResponse::parse(response.into_bytes().unwrap());

        assert_eq!(wire.header("Content-Encoding"), Some("gzip"));
        assert_eq!(wire.text(), text);
    }
}

#[test]
fn test_space_in_echo_target_is_malformed() {
    let raw = request("GET", "/echo/hello world", &[("Accept-Encoding", "gzip")], b"");

    let expected = ParseError::RequestLine("GET /echo/hello world HTTP/1.1".into());
    assert_eq!(Request::parse(&raw), Err(expected));
}
