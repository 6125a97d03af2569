//! Integration tests for page routing through the template registry.

use atlas_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_every_template_key_is_routed() {
    let ctx = TestContext::new().await;

    let cases = [
        ("/", "front-page"),
        ("/shop", "page-shop"),
        ("/search", "page-search"),
        ("/category/journal", "category"),
        ("/tag/ultralight", "tag"),
        ("/product/summit-pack", "product"),
        ("/product-category/packs", "product-category"),
        ("/posts/first-ascent", "single"),
        ("/about", "page"),
    ];

    for (path, key) in cases {
        let (status, body) = ctx.get_text(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(
            body.contains(&format!(r#"data-template="{key}""#)),
            "{path} should render {key}"
        );
        assert!(body.contains("Atlas Outfitters"), "{path} lacks header");
    }
}

#[tokio::test]
async fn test_slug_becomes_title() {
    let ctx = TestContext::new().await;

    let (_, body) = ctx.get_text("/product/summit-pack").await;
    assert!(body.contains("Summit Pack"));
    assert!(body.contains(r#"data-slug="summit-pack""#));

    let (_, body) = ctx.get_text("/my-account").await;
    assert!(body.contains("<title>My Account | Atlas Outfitters</title>"));
}

#[tokio::test]
async fn test_search_echoes_query_escaped() {
    let ctx = TestContext::new().await;

    let (_, body) = ctx.get_text("/search?q=%3Cb%3Etent%3C%2Fb%3E").await;
    assert!(body.contains("Results for"));
    assert!(body.contains("&#60;b&#62;tent&#60;/b&#62;") || body.contains("&lt;b&gt;tent&lt;/b&gt;"));
    assert!(!body.contains("<b>tent</b>"));

    let (_, blank) = ctx.get_text("/search?q=+++").await;
    assert!(!blank.contains("Results for"));
}

#[tokio::test]
async fn test_unknown_nested_path_is_not_found() {
    let ctx = TestContext::new().await;

    let (status, _) = ctx.get_text("/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = ctx.get_text("/product/summit-pack/reviews").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_assets_served() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.get_text("/static/js/header.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("cart-updated"));

    let (status, _) = ctx.get_text("/static/css/main.css").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = ctx.get_text("/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
