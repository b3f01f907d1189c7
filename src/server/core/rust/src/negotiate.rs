/* src/server/core/rust/src/negotiate.rs */

use crate::locale::LocaleRegistry;

/// Cookie remembering the visitor's last explicit locale choice.
pub const LOCALE_COOKIE: &str = "ORMAN_LOCALE";

pub struct NegotiateContext<'a> {
  pub path: &'a str,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
}

/// Pick a locale for a request: path prefix -> cookie -> Accept-Language -> default.
/// Every stage only accepts registered locales.
pub fn negotiate_locale<'r>(ctx: &NegotiateContext<'_>, registry: &'r LocaleRegistry) -> &'r str {
  split_locale_prefix(ctx.path, registry)
    .0
    .or_else(|| ctx.cookie_header.and_then(|h| cookie_locale(h, LOCALE_COOKIE, registry)))
    .or_else(|| ctx.accept_language.and_then(|h| accept_language_locale(h, registry)))
    .unwrap_or_else(|| registry.default_locale())
}

/// Split `/tr/urunler` into `(Some("tr"), "/urunler")`. The first segment only
/// counts as a prefix when it is a registered locale; the remainder is `/`
/// when nothing follows the prefix. The locale borrows from the registry.
pub fn split_locale_prefix<'p, 'r>(
  path: &'p str,
  registry: &'r LocaleRegistry,
) -> (Option<&'r str>, &'p str) {
  let trimmed = path.strip_prefix('/').unwrap_or(path);
  let (first, rest) = trimmed.split_at(trimmed.find('/').unwrap_or(trimmed.len()));
  match registered(registry, first) {
    Some(locale) => (Some(locale), if rest.is_empty() { "/" } else { rest }),
    None => (None, path),
  }
}

fn registered<'r>(registry: &'r LocaleRegistry, candidate: &str) -> Option<&'r str> {
  registry.iter().find(|l| *l == candidate)
}

/// Language tags compare case-insensitively (`en-GB` and `EN-gb` are equal).
fn registered_tag<'r>(registry: &'r LocaleRegistry, tag: &str) -> Option<&'r str> {
  registry.iter().find(|l| l.eq_ignore_ascii_case(tag))
}

/// First `name=value` pair whose value is registered. A stale value (a locale
/// since removed) does not hide a later pair of the same name.
fn cookie_locale<'r>(header: &str, name: &str, registry: &'r LocaleRegistry) -> Option<&'r str> {
  header
    .split(';')
    .filter_map(|pair| pair.split_once('='))
    .filter(|(key, _)| key.trim() == name)
    .find_map(|(_, value)| registered(registry, value.trim().trim_matches('"')))
}

/// Language ranges with a positive quality, best first. Equal qualities keep
/// header order (the sort is stable); missing or unparsable `q` counts as 1.
fn ranked_languages(header: &str) -> Vec<(&str, f32)> {
  let mut ranked: Vec<(&str, f32)> = header
    .split(',')
    .filter_map(|item| {
      let mut params = item.split(';');
      let tag = params.next()?.trim();
      let quality = params
        .filter_map(|p| p.trim().strip_prefix("q="))
        .find_map(|v| v.trim().parse::<f32>().ok())
        .unwrap_or(1.0);
      (!tag.is_empty() && quality > 0.0).then_some((tag, quality))
    })
    .collect();
  ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
  ranked
}

/// Best registered match; a region tag (`de-AT`) also matches its primary
/// language (`de`).
fn accept_language_locale<'r>(header: &str, registry: &'r LocaleRegistry) -> Option<&'r str> {
  ranked_languages(header).into_iter().find_map(|(tag, _)| {
    registered_tag(registry, tag)
      .or_else(|| tag.split_once('-').and_then(|(primary, _)| registered_tag(registry, primary)))
  })
}
