/* src/server/engine/rust/src/lib.rs */

pub mod escape;
pub mod head;
pub mod jsonld;
pub mod robots;
pub mod sitemap;

// Public API re-exports
pub use escape::{escape_html, escape_json_for_script, escape_xml};
pub use head::{
  PageHead, inject_head_meta, inject_html_lang, render_alternate_links, render_canonical_link,
  render_jsonld_script,
};
pub use jsonld::{
  AggregateRating, Availability, OrganizationInfo, ProductInfo, aggregate_rating, breadcrumbs,
  organization, product, website,
};
pub use robots::{RobotsConfig, RobotsRule, render_robots_txt};
pub use sitemap::{ChangeFrequency, SitemapPage, SitemapUrl, build_sitemap, render_sitemap_xml};
