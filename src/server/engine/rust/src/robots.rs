/* src/server/engine/rust/src/robots.rs */

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RobotsRule {
  #[serde(default = "default_user_agent")]
  pub user_agent: String,
  #[serde(default)]
  pub allow: Vec<String>,
  #[serde(default)]
  pub disallow: Vec<String>,
}

fn default_user_agent() -> String {
  "*".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RobotsConfig {
  #[serde(default = "default_rules")]
  pub rules: Vec<RobotsRule>,
  /// Absolute sitemap URLs. Empty means `{base_url}/sitemap.xml`.
  #[serde(default)]
  pub sitemaps: Vec<String>,
  #[serde(default)]
  pub host: Option<String>,
}

fn default_rules() -> Vec<RobotsRule> {
  vec![RobotsRule {
    user_agent: default_user_agent(),
    allow: vec!["/".into()],
    disallow: vec!["/admin".into(), "/api".into()],
  }]
}

impl Default for RobotsConfig {
  fn default() -> Self {
    Self { rules: default_rules(), sitemaps: vec![], host: None }
  }
}

/// Render `robots.txt`. `base_url` supplies the sitemap location when none is configured.
pub fn render_robots_txt(config: &RobotsConfig, base_url: &str) -> String {
  let mut out = String::new();
  for (i, rule) in config.rules.iter().enumerate() {
    if i > 0 {
      out.push('\n');
    }
    out.push_str(&format!("User-agent: {}\n", rule.user_agent));
    for path in &rule.allow {
      out.push_str(&format!("Allow: {path}\n"));
    }
    for path in &rule.disallow {
      out.push_str(&format!("Disallow: {path}\n"));
    }
  }
  if let Some(ref host) = config.host {
    out.push_str(&format!("\nHost: {host}\n"));
  }
  out.push('\n');
  if config.sitemaps.is_empty() {
    out.push_str(&format!("Sitemap: {}/sitemap.xml\n", base_url.trim_end_matches('/')));
  } else {
    for sitemap in &config.sitemaps {
      out.push_str(&format!("Sitemap: {sitemap}\n"));
    }
  }
  out
}
