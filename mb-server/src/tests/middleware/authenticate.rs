use crate::middleware::authenticate::extract_token;

use axum::http::{HeaderMap, HeaderValue, header};

const COOKIE_NAME: &str = "token";

fn headers_with(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.insert(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    headers
}

#[test]
fn test_extract_token_from_bearer_header() {
    let headers = headers_with(&[(header::AUTHORIZATION, "Bearer abc.def.ghi")]);

    assert_eq!(
        extract_token(&headers, COOKIE_NAME),
        Some("abc.def.ghi".to_string())
    );
}

#[test]
fn test_extract_token_trims_whitespace_after_scheme() {
    let headers = headers_with(&[(header::AUTHORIZATION, "Bearer   abc.def.ghi  ")]);

    assert_eq!(
        extract_token(&headers, COOKIE_NAME),
        Some("abc.def.ghi".to_string())
    );
}

#[test]
fn test_extract_token_from_cookie() {
    let headers = headers_with(&[(header::COOKIE, "theme=dark; token=abc.def.ghi; lang=en")]);

    assert_eq!(
        extract_token(&headers, COOKIE_NAME),
        Some("abc.def.ghi".to_string())
    );
}

#[test]
fn test_header_takes_precedence_over_cookie() {
    let headers = headers_with(&[
        (header::AUTHORIZATION, "Bearer from-header"),
        (header::COOKIE, "token=from-cookie"),
    ]);

    assert_eq!(
        extract_token(&headers, COOKIE_NAME),
        Some("from-header".to_string())
    );
}

#[test]
fn test_non_bearer_header_falls_through_to_cookie() {
    let headers = headers_with(&[
        (header::AUTHORIZATION, "Basic dXNlcjpwYXNz"),
        (header::COOKIE, "token=from-cookie"),
    ]);

    assert_eq!(
        extract_token(&headers, COOKIE_NAME),
        Some("from-cookie".to_string())
    );
}

#[test]
fn test_empty_bearer_token_falls_through_to_cookie() {
    let headers = headers_with(&[
        (header::AUTHORIZATION, "Bearer "),
        (header::COOKIE, "token=from-cookie"),
    ]);

    assert_eq!(
        extract_token(&headers, COOKIE_NAME),
        Some("from-cookie".to_string())
    );
}

#[test]
fn test_no_token_anywhere_yields_none() {
    let headers = HeaderMap::new();

    assert_eq!(extract_token(&headers, COOKIE_NAME), None);
}

#[test]
fn test_cookie_with_other_name_is_ignored() {
    let headers = headers_with(&[(header::COOKIE, "session=abc; auth=def")]);

    assert_eq!(extract_token(&headers, COOKIE_NAME), None);
}

#[test]
fn test_empty_cookie_value_is_ignored() {
    let headers = headers_with(&[(header::COOKIE, "token=")]);

    assert_eq!(extract_token(&headers, COOKIE_NAME), None);
}

#[test]
fn test_custom_cookie_name_is_honored() {
    let headers = headers_with(&[(header::COOKIE, "jwt=abc.def.ghi")]);

    assert_eq!(
        extract_token(&headers, "jwt"),
        Some("abc.def.ghi".to_string())
    );
    assert_eq!(extract_token(&headers, COOKIE_NAME), None);
}
