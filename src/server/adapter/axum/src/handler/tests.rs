/* src/server/adapter/axum/src/handler/tests.rs */

use std::collections::BTreeMap;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use orman_routing::{LocaleRegistry, PathResolver, PathnameTable, RoutingConfig};
use orman_seo::SitemapPage;
use tower::ServiceExt;

use crate::{IntoAxumRouter, SeoSite};

fn site() -> SeoSite {
  let registry =
    LocaleRegistry::new(vec!["tr".into(), "en".into(), "de".into()], "tr").unwrap();
  let table = PathnameTable::new()
    .with_literal("/", "/")
    .with_localized("/products", [("tr", "/urunler"), ("en", "/products")]);
  let config = RoutingConfig::new(registry, table, "https://orman.shop").unwrap();
  SeoSite::new(PathResolver::new(config))
    .sitemap_pages(vec![SitemapPage::new("/"), SitemapPage::new("/products")])
    .product_paths(BTreeMap::from([(
      "walnut-tray".to_string(),
      BTreeMap::from([
        ("tr".to_string(), "/urunler/ceviz-tepsi".to_string()),
        ("en".to_string(), "/products/walnut-tray".to_string()),
      ]),
    )]))
}

async fn get(uri: &str, headers: &[(header::HeaderName, &str)]) -> axum::response::Response {
  let mut req = Request::builder().uri(uri);
  for (name, value) in headers {
    req = req.header(name, *value);
  }
  site().into_axum_router().oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
  let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
  serde_json::from_str(&body_string(resp).await).unwrap()
}

#[tokio::test]
async fn sitemap_lists_every_locale() {
  let resp = get("/sitemap.xml", &[]).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/xml; charset=utf-8");
  let xml = body_string(resp).await;
  // 2 pages x 3 locales
  assert_eq!(xml.matches("<url>").count(), 6);
  assert!(xml.contains("<loc>https://orman.shop/tr/urunler</loc>"));
  assert!(xml.contains("<loc>https://orman.shop/de/products</loc>"));
}

#[tokio::test]
async fn robots_points_at_sitemap() {
  let resp = get("/robots.txt", &[]).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let txt = body_string(resp).await;
  assert!(txt.contains("Disallow: /admin"));
  assert!(txt.contains("Sitemap: https://orman.shop/sitemap.xml"));
}

#[tokio::test]
async fn alternates_endpoint() {
  let resp = get("/_orman/alternates?path=/products&locale=en", &[]).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["ok"], true);
  assert_eq!(json["data"]["tr"], "https://orman.shop/tr/urunler");
  assert_eq!(json["data"]["de"], "https://orman.shop/de/products");
  assert_eq!(json["data"]["x-default"], "https://orman.shop/tr/urunler");
}

#[tokio::test]
async fn alternates_with_product_override() {
  let resp = get("/_orman/alternates?path=/urunler/%5Bslug%5D&product=walnut-tray", &[]).await;
  let json = body_json(resp).await;
  assert_eq!(json["data"]["en"], "https://orman.shop/en/products/walnut-tray");
  assert!(json["data"].get("de").is_none());
}

#[tokio::test]
async fn alternates_unknown_locale_is_bad_request() {
  let resp = get("/_orman/alternates?path=/products&locale=fr", &[]).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let json = body_json(resp).await;
  assert_eq!(json["ok"], false);
  assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn alternates_unknown_product_is_not_found() {
  let resp = get("/_orman/alternates?path=/x&product=missing", &[]).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resolve_endpoint() {
  let resp = get("/_orman/resolve?path=/products&locale=tr", &[]).await;
  let json = body_json(resp).await;
  assert_eq!(json["data"]["path"], "/urunler");
  assert_eq!(json["data"]["href"], "/tr/urunler");
  assert_eq!(json["data"]["url"], "https://orman.shop/tr/urunler");
}

#[tokio::test]
async fn unprefixed_path_redirects_to_negotiated_locale() {
  let resp = get("/products?sort=price", &[(header::ACCEPT_LANGUAGE, "en-GB,en;q=0.8")]).await;
  assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(resp.headers()[header::LOCATION], "/en/products?sort=price");
}

#[tokio::test]
async fn cookie_beats_accept_language_on_redirect() {
  let resp =
    get("/products", &[(header::COOKIE, "ORMAN_LOCALE=tr"), (header::ACCEPT_LANGUAGE, "en")]).await;
  assert_eq!(resp.headers()[header::LOCATION], "/tr/urunler");
}

#[tokio::test]
async fn root_redirects_to_default_locale() {
  let resp = get("/", &[]).await;
  assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(resp.headers()[header::LOCATION], "/tr");
}

#[tokio::test]
async fn prefixed_unknown_path_is_not_found() {
  let resp = get("/en/nothing-here", &[]).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
