/* src/cli/core/src/config/tests/mod.rs */

use super::*;

mod parsing;

const SAMPLE: &str = r#"
[site]
name = "Orman Atölye"
base_url = "https://orman.shop"

[i18n]
locales = ["tr", "en", "de"]
default = "tr"

[pathnames]
"/" = "/"
"/products" = { tr = "/urunler", en = "/products", de = "/produkte" }
"/products/[slug]" = { tr = "/urunler/[slug]", en = "/products/[slug]", de = "/produkte/[slug]" }
"/about" = { tr = "/hakkimizda", en = "/about" }

[[sitemap.pages]]
base_path = "/"
change_frequency = "weekly"
priority = 1.0

[[sitemap.pages]]
base_path = "/products"
priority = 0.9

[robots]
sitemaps = ["https://orman.shop/sitemap.xml"]

[[robots.rules]]
disallow = ["/admin", "/api", "/sepet"]

[[products]]
id = "walnut-tray"
slugs = { tr = "ceviz-tepsi", en = "walnut-tray" }
last_modified = "2024-05-01"
"#;
