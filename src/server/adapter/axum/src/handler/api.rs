/* src/server/adapter/axum/src/handler/api.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::{AxumError, SeoError};
use crate::SeoSite;

#[derive(Deserialize)]
pub(super) struct AlternatesQuery {
  path: String,
  #[serde(default)]
  locale: Option<String>,
  #[serde(default)]
  product: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct ResolveQuery {
  path: String,
  locale: String,
}

/// Reject locales outside the registry; `None` means the default locale.
fn checked_locale<'a>(site: &'a SeoSite, locale: Option<&'a str>) -> Result<&'a str, SeoError> {
  let registry = site.resolver.registry();
  match locale {
    None => Ok(registry.default_locale()),
    Some(loc) if registry.contains(loc) => Ok(loc),
    Some(loc) => Err(SeoError::validation(format!("Unknown locale '{loc}'"))),
  }
}

pub(super) async fn handle_alternates(
  State(site): State<Arc<SeoSite>>,
  Query(query): Query<AlternatesQuery>,
) -> Result<Json<serde_json::Value>, AxumError> {
  let locale = checked_locale(&site, query.locale.as_deref())?;
  let set = site.alternates(&query.path, locale, query.product.as_deref())?;
  Ok(Json(serde_json::json!({ "ok": true, "data": set })))
}

pub(super) async fn handle_resolve(
  State(site): State<Arc<SeoSite>>,
  Query(query): Query<ResolveQuery>,
) -> Result<Json<serde_json::Value>, AxumError> {
  let locale = checked_locale(&site, Some(query.locale.as_str()))?;
  let path = site.resolver.resolve_path(&query.path, locale);
  Ok(Json(serde_json::json!({
    "ok": true,
    "data": {
      "locale": locale,
      "path": path,
      "href": site.resolver.localized_href(&query.path, locale),
      "url": site.resolver.absolute_url(locale, path),
    }
  })))
}
