/* src/cli/core/src/check.rs */

use anyhow::{Result, bail};
use orman_routing::PathResolver;

use crate::config::OrmanConfig;
use crate::ui;

/// A translation gap that resolves silently at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
  pub subject: String,
  pub message: String,
}

impl Finding {
  fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
    Self { subject: subject.into(), message: message.into() }
  }
}

pub fn lint(config: &OrmanConfig, resolver: &PathResolver) -> Vec<Finding> {
  let registry = resolver.registry();
  let mut findings = Vec::new();

  for (base, missing) in resolver.pathnames().uncovered_locales(registry) {
    findings.push(Finding::new(
      format!("pathnames.\"{base}\""),
      format!("no entry for {}; falls back to \"{base}\"", missing.join(", ")),
    ));
  }

  for product in &config.products {
    let missing: Vec<&str> = registry.iter().filter(|l| !product.slugs.contains_key(*l)).collect();
    if missing.len() == registry.len() {
      findings.push(Finding::new(
        format!("products.{}", product.id),
        "no slugs; left out of alternates and the sitemap",
      ));
    } else if !missing.is_empty() {
      findings.push(Finding::new(
        format!("products.{}", product.id),
        format!("no slug for {}; omitted from alternates", missing.join(", ")),
      ));
    }
  }

  for page in &config.sitemap.pages {
    if resolver.pathnames().lookup(&page.base_path).is_none() {
      findings.push(Finding::new(
        format!("sitemap.pages \"{}\"", page.base_path),
        "not in [pathnames]; listed under the same path in every locale",
      ));
    }
  }

  findings
}

/// Print every finding; with `strict`, any finding fails the command.
pub fn run_check(config: &OrmanConfig, resolver: &PathResolver, strict: bool) -> Result<()> {
  ui::banner("check");
  let findings = lint(config, resolver);
  ui::arrow(&format!(
    "{} locales, {} pathnames, {} products",
    resolver.registry().len(),
    resolver.pathnames().len(),
    config.products.len()
  ));

  if findings.is_empty() {
    ui::ok("every locale is covered");
    ui::blank();
    return Ok(());
  }

  for finding in &findings {
    ui::warn(&finding.subject);
    ui::detail(&finding.message);
  }
  ui::blank();

  if strict {
    ui::fail(&format!("{} warning(s)", findings.len()));
    bail!("check failed with {} warning(s)", findings.len());
  }
  ui::ok(&format!("{} warning(s), not failing without --strict", findings.len()));
  Ok(())
}
