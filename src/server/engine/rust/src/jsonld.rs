/* src/server/engine/rust/src/jsonld.rs */

//! schema.org structured data builders.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

const CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationInfo {
  pub name: String,
  pub url: String,
  #[serde(default)]
  pub logo: Option<String>,
  #[serde(default)]
  pub same_as: Vec<String>,
}

pub fn organization(info: &OrganizationInfo) -> Value {
  let mut value = json!({
    "@context": CONTEXT,
    "@type": "Organization",
    "name": info.name,
    "url": info.url,
  });
  if let Some(ref logo) = info.logo {
    value["logo"] = json!(logo);
  }
  if !info.same_as.is_empty() {
    value["sameAs"] = json!(info.same_as);
  }
  value
}

pub fn website(name: &str, url: &str, locales: &[String]) -> Value {
  json!({
    "@context": CONTEXT,
    "@type": "WebSite",
    "name": name,
    "url": url,
    "inLanguage": locales,
  })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
  #[default]
  InStock,
  OutOfStock,
  PreOrder,
  MadeToOrder,
}

impl Availability {
  pub fn schema_url(self) -> &'static str {
    match self {
      Self::InStock => "https://schema.org/InStock",
      Self::OutOfStock => "https://schema.org/OutOfStock",
      Self::PreOrder => "https://schema.org/PreOrder",
      Self::MadeToOrder => "https://schema.org/MadeToOrder",
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct ProductInfo {
  pub name: String,
  pub description: Option<String>,
  pub url: String,
  pub images: Vec<String>,
  pub sku: Option<String>,
  pub brand: Option<String>,
  pub price: Option<f64>,
  pub currency: String,
  pub availability: Availability,
  /// Individual review scores on a 1..=5 scale.
  pub review_scores: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
  #[serde(rename = "@type")]
  kind: &'static str,
  pub rating_value: f64,
  pub review_count: usize,
  pub best_rating: u8,
  pub worst_rating: u8,
}

/// Mean of the in-range scores rounded to one decimal; `None` without reviews.
pub fn aggregate_rating(scores: &[u8]) -> Option<AggregateRating> {
  let valid: Vec<u8> = scores.iter().copied().filter(|s| (1..=5).contains(s)).collect();
  if valid.is_empty() {
    return None;
  }
  let sum: u32 = valid.iter().map(|s| u32::from(*s)).sum();
  let mean = f64::from(sum) / valid.len() as f64;
  Some(AggregateRating {
    kind: "AggregateRating",
    rating_value: (mean * 10.0).round() / 10.0,
    review_count: valid.len(),
    best_rating: 5,
    worst_rating: 1,
  })
}

pub fn product(info: &ProductInfo) -> Value {
  let mut value = json!({
    "@context": CONTEXT,
    "@type": "Product",
    "name": info.name,
    "url": info.url,
  });
  if let Some(ref desc) = info.description {
    value["description"] = json!(desc);
  }
  if !info.images.is_empty() {
    value["image"] = json!(info.images);
  }
  if let Some(ref sku) = info.sku {
    value["sku"] = json!(sku);
  }
  if let Some(ref brand) = info.brand {
    value["brand"] = json!({ "@type": "Brand", "name": brand });
  }
  if let Some(price) = info.price {
    value["offers"] = json!({
      "@type": "Offer",
      "url": info.url,
      "price": format!("{price:.2}"),
      "priceCurrency": info.currency,
      "availability": info.availability.schema_url(),
    });
  }
  if let Some(rating) = aggregate_rating(&info.review_scores) {
    value["aggregateRating"] = json!(rating);
  }
  value
}

/// `BreadcrumbList` from (name, absolute url) pairs, outermost first.
pub fn breadcrumbs<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Value {
  let elements: Vec<Value> = items
    .into_iter()
    .enumerate()
    .map(|(i, (name, url))| {
      json!({
        "@type": "ListItem",
        "position": i + 1,
        "name": name,
        "item": url,
      })
    })
    .collect();
  json!({
    "@context": CONTEXT,
    "@type": "BreadcrumbList",
    "itemListElement": elements,
  })
}
