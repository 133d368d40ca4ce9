use hgen_core::errors::{ErrorInfo, HgenError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "/tmp/out")
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = HgenError::InvalidArgument(sample_info("total-size-too-small", "need a node"));
    assert_eq!(err.info().code, "total-size-too-small");
    assert!(err.to_string().starts_with("invalid argument"));
}

#[test]
fn io_surface() {
    let err = HgenError::io(
        "write-dat",
        std::path::Path::new("/nonexistent/x.dat"),
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    );
    assert_eq!(err.info().code, "write-dat");
    assert_eq!(err.info().context["path"], "/nonexistent/x.dat");
}

#[test]
fn parse_surface() {
    let err = HgenError::Parse(sample_info("bad-token", "not an integer"));
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn errors_roundtrip_through_json() {
    let err = HgenError::Serde(sample_info("json-encode", "boom").with_hint("retry"));
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Serde\""));
    let back: HgenError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
