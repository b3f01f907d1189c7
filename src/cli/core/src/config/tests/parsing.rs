/* src/cli/core/src/config/tests/parsing.rs */

use orman_routing::PathnameEntry;

use super::*;

#[test]
fn parse_sample_config() {
  let config = parse_orman_config(SAMPLE).unwrap();
  assert_eq!(config.site.name, "Orman Atölye");
  assert_eq!(config.i18n.locales, vec!["tr", "en", "de"]);
  assert_eq!(config.i18n.default_locale(), Some("tr"));
  assert_eq!(config.pathnames.len(), 4);
  assert_eq!(config.pathnames.lookup("/"), Some(&PathnameEntry::Literal("/".into())));
  assert_eq!(config.sitemap.pages.len(), 2);
  assert_eq!(config.sitemap.pages[1].priority, Some(0.9));
  assert_eq!(config.robots.rules[0].disallow, vec!["/admin", "/api", "/sepet"]);
  assert_eq!(config.robots.rules[0].user_agent, "*");
}

#[test]
fn parse_products() {
  let config = parse_orman_config(SAMPLE).unwrap();
  let product = config.product("walnut-tray").unwrap();
  assert_eq!(product.base_path, "/products/[slug]");
  assert_eq!(product.slugs["tr"], "ceviz-tepsi");
  assert!(!product.slugs.contains_key("de"));
  assert!(config.product("missing").is_none());
}

#[test]
fn parse_minimal_config_defaults() {
  let config = parse_orman_config(
    r#"
[site]
name = "x"
base_url = "https://example.com"

[i18n]
locales = ["en", "tr"]
"#,
  )
  .unwrap();
  assert_eq!(config.i18n.default_locale(), Some("en"));
  assert!(config.pathnames.is_empty());
  assert!(config.sitemap.pages.is_empty());
  assert!(config.sitemap.include_products);
  assert!(config.products.is_empty());
  assert_eq!(config.server.addr, "127.0.0.1:3000");
  assert_eq!(config.robots.rules[0].disallow, vec!["/admin", "/api"]);
}

#[test]
fn routing_trims_base_url() {
  let config = parse_orman_config(
    r#"
[site]
name = "x"
base_url = "https://example.com/"

[i18n]
locales = ["en"]
"#,
  )
  .unwrap();
  assert_eq!(config.routing().unwrap().base_url, "https://example.com");
}

#[test]
fn missing_site_errors() {
  let result = parse_orman_config(
    r#"
[i18n]
locales = ["en"]
"#,
  );
  assert!(result.is_err());
}
