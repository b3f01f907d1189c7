/* src/server/adapter/axum/src/handler/redirect.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Uri, header};
use axum::response::{IntoResponse, Redirect, Response};
use orman_routing::{NegotiateContext, negotiate_locale, split_locale_prefix};

use crate::error::{AxumError, SeoError};
use crate::SeoSite;

/// Send un-prefixed paths to their localized form for the negotiated locale.
/// Prefixed paths that reach here have no handler and get a 404.
pub(super) async fn handle_fallback(
  State(site): State<Arc<SeoSite>>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let path = uri.path();
  let registry = site.resolver.registry();

  if let (Some(locale), rest) = split_locale_prefix(path, registry) {
    tracing::debug!(path, locale, rest, "no handler for localized path");
    return Err(SeoError::not_found(format!("No page at '{path}'")).into());
  }

  let ctx = NegotiateContext {
    path,
    cookie_header: headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
    accept_language: headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
  };
  let locale = negotiate_locale(&ctx, registry);

  let mut target = site.resolver.localized_href(path, locale);
  if let Some(query) = uri.query() {
    target.push('?');
    target.push_str(query);
  }
  tracing::debug!(path, locale, target = %target, "locale redirect");
  Ok(Redirect::temporary(&target).into_response())
}
