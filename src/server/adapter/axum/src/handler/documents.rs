/* src/server/adapter/axum/src/handler/documents.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use orman_seo::{build_sitemap, render_robots_txt, render_sitemap_xml};

use crate::SeoSite;

pub(super) async fn handle_sitemap(State(site): State<Arc<SeoSite>>) -> impl IntoResponse {
  let urls = build_sitemap(&site.resolver, &site.sitemap_pages);
  tracing::debug!(urls = urls.len(), "rendering sitemap");
  ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], render_sitemap_xml(&urls))
}

pub(super) async fn handle_robots(State(site): State<Arc<SeoSite>>) -> impl IntoResponse {
  let body = render_robots_txt(&site.robots, site.resolver.base_url());
  ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
