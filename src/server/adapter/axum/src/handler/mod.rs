/* src/server/adapter/axum/src/handler/mod.rs */

mod api;
mod documents;
mod redirect;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::SeoSite;

pub(crate) fn build_router(site: SeoSite) -> Router {
  // Page rendering stays with the application: merge this router into the
  // app router so only unmatched, un-prefixed paths reach the redirect fallback.
  Router::new()
    .route("/sitemap.xml", get(documents::handle_sitemap))
    .route("/robots.txt", get(documents::handle_robots))
    .route("/_orman/alternates", get(api::handle_alternates))
    .route("/_orman/resolve", get(api::handle_resolve))
    .fallback(redirect::handle_fallback)
    .with_state(Arc::new(site))
}

#[cfg(test)]
mod tests;
