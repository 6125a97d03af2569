//! Integration tests for the shopper cookie probe and sign-out.

use atlas_integration_tests::{SHOPPER_COOKIE, TestContext};
use reqwest::{StatusCode, header};

const SIGN_OUT_FORM: &str = r#"action="/sign-out""#;

#[tokio::test]
async fn test_sign_out_hidden_without_cookie() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get_text("/").await;

    assert!(!body.contains(SIGN_OUT_FORM));
}

#[tokio::test]
async fn test_sign_out_shown_with_cookie() {
    let ctx = TestContext::new().await;
    ctx.set_cookie(&format!("{SHOPPER_COOKIE}=eyJhbGciOi; Path=/"));

    let (_, body) = ctx.get_text("/").await;
    assert!(body.contains(SIGN_OUT_FORM));
    assert!(body.contains("Sign Out"));
}

#[tokio::test]
async fn test_sign_out_expires_cookie_and_redirects() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .client
        .post(ctx.url("/sign-out"))
        .header(header::COOKIE, format!("{SHOPPER_COOKIE}=eyJhbGciOi"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/my-account")
    );

    let cleared = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(SHOPPER_COOKIE))
        .expect("shopper cookie cleared");
    assert!(cleared.starts_with(&format!("{SHOPPER_COOKIE}=;")));
    assert!(cleared.contains("Path=/"));
    assert!(cleared.contains("01 Jan 1970"));
}

#[tokio::test]
async fn test_sign_out_rejects_get() {
    let ctx = TestContext::new().await;
    ctx.set_cookie(&format!("{SHOPPER_COOKIE}=token-abc; Path=/"));

    let resp = ctx
        .client
        .get(ctx.url("/sign-out"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(!resp.headers().contains_key(header::SET_COOKIE));

    // Still signed in
    let (_, body) = ctx.get_text("/").await;
    assert!(body.contains(SIGN_OUT_FORM));
}

#[tokio::test]
async fn test_sign_out_when_already_signed_out() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .client
        .post(ctx.url("/sign-out"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(resp.headers().contains_key(header::SET_COOKIE));
}

#[tokio::test]
async fn test_header_reflects_sign_out_on_next_render() {
    let ctx = TestContext::new().await;
    ctx.set_cookie(&format!("{SHOPPER_COOKIE}=eyJhbGciOi; Path=/"));

    let (_, before) = ctx.get_text("/shop").await;
    assert!(before.contains(SIGN_OUT_FORM));

    let resp = ctx
        .client
        .post(ctx.url("/sign-out"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // The jar honours the expired cookie, so the next page is signed out
    let (_, after) = ctx.get_text("/shop").await;
    assert!(!after.contains(SIGN_OUT_FORM));
}
