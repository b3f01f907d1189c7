/* src/cli/core/src/main.rs */

mod check;
mod config;
mod head;
mod site;
mod ui;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use orman_routing::{OverrideResult, PathOverride, PathResolver, build_alternates};
use orman_seo::{build_sitemap, render_alternate_links, render_robots_txt, render_sitemap_xml};
use orman_server_axum::IntoAxumRouter;

use config::{OrmanConfig, find_orman_config, load_orman_config};

#[derive(Parser)]
#[command(name = "orman", about = "Localized routing and SEO files for the Orman storefront")]
struct Cli {
  /// Path to orman.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
  #[default]
  Json,
  Html,
}

#[derive(Subcommand)]
enum Command {
  /// Resolve a base path for one locale
  Resolve {
    /// Canonical base path, e.g. /products
    path: String,
    #[arg(short, long)]
    locale: String,
  },
  /// Print the hreflang alternate set for a page
  Alternates {
    /// Canonical base path; defaults to the product's base path with --product
    path: Option<String>,
    /// Locale the page is rendered in (defaults to the site default)
    #[arg(short, long)]
    locale: Option<String>,
    /// Use a catalog product's slugs as the per-locale override
    #[arg(short, long)]
    product: Option<String>,
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },
  /// Render title, canonical, hreflang and JSON-LD tags for a served path
  Head {
    /// Localized path as served, e.g. /tr/urunler/ceviz-tepsi
    path: String,
    /// HTML document to inject the tags into (tags alone if omitted)
    #[arg(long)]
    html: Option<PathBuf>,
    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Render sitemap.xml
  Sitemap {
    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Render robots.txt
  Robots {
    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Report locales that silently fall back to the base path
  Check {
    /// Exit non-zero when anything is reported
    #[arg(long)]
    strict: bool,
  },
  /// Serve sitemap.xml, robots.txt and the alternates API
  Serve {
    /// Listen address (defaults to [server].addr)
    #[arg(short, long)]
    addr: Option<String>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, OrmanConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_orman_config(&cwd)?
    }
  };
  let config = load_orman_config(&path)?;
  Ok((path, config))
}

fn checked_locale<'a>(resolver: &'a PathResolver, locale: Option<&'a str>) -> Result<&'a str> {
  match locale {
    None => Ok(resolver.registry().default_locale()),
    Some(loc) if resolver.registry().contains(loc) => Ok(loc),
    Some(loc) => {
      bail!("unknown locale \"{loc}\" (registered: {})", resolver.registry().locales().join(", "))
    }
  }
}

/// Write `content` to `out`, or to stdout when no file is given.
fn emit(content: &str, out: Option<&Path>, what: &str) -> Result<()> {
  match out {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
      ui::ok(&format!("{what} -> {}", path.display()));
    }
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(content.as_bytes()).context("failed to write to stdout")?;
      if !content.ends_with('\n') {
        writeln!(stdout).context("failed to write to stdout")?;
      }
    }
  }
  Ok(())
}

/// Alternate set for a base path (or a product's base path) in the chosen format.
fn run_alternates(
  config: &OrmanConfig,
  resolver: &PathResolver,
  path: Option<&str>,
  locale: Option<&str>,
  product: Option<&str>,
  format: OutputFormat,
) -> Result<String> {
  let locale = checked_locale(resolver, locale)?;
  let product = match product {
    Some(id) => Some(config.product(id).with_context(|| format!("unknown product \"{id}\""))?),
    None => None,
  };
  let base_path = match (path, product) {
    (Some(p), _) => p,
    (None, Some(p)) => p.base_path.as_str(),
    (None, None) => bail!("alternates needs a path or --product"),
  };

  let set = match product {
    Some(p) => {
      let paths = site::product_paths(resolver, p);
      let lookup = |l: &str| OverrideResult::from(paths.get(l).cloned());
      build_alternates(resolver, base_path, locale, PathOverride::OverrideFn(&lookup))
    }
    None => build_alternates(resolver, base_path, locale, PathOverride::NoOverride),
  };
  if set.is_empty() {
    ui::warn(&format!("no alternates for \"{base_path}\""));
  }

  match format {
    OutputFormat::Json => {
      serde_json::to_string_pretty(&set).context("failed to serialize alternates")
    }
    OutputFormat::Html => Ok(render_alternate_links(&set)),
  }
}

/// Events go to stderr; stdout carries generated documents.
fn init_tracing() {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing();
  let (config_path, orman_config) = resolve_config(cli.config)?;
  tracing::debug!(config = %config_path.display(), "loaded config");
  let resolver = site::build_resolver(&orman_config)
    .with_context(|| format!("invalid routing in {}", config_path.display()))?;

  match cli.command {
    Command::Resolve { path, locale } => {
      let locale = checked_locale(&resolver, Some(locale.as_str()))?;
      let resolved = resolver.resolve_path(&path, locale);
      ui::field("path", resolved);
      ui::field("href", &resolver.localized_href(&path, locale));
      ui::field("url", &resolver.absolute_url(locale, resolved));
    }
    Command::Alternates { path, locale, product, format } => {
      let rendered = run_alternates(
        &orman_config,
        &resolver,
        path.as_deref(),
        locale.as_deref(),
        product.as_deref(),
        format,
      )?;
      emit(&rendered, None, "alternates")?;
    }
    Command::Head { path, html, out } => {
      let page = head::identify_page(&orman_config, &resolver, &path)?;
      tracing::debug!(
        locale = %page.locale,
        base_path = %page.base_path,
        product = page.product.map(|p| p.id.as_str()),
        "page identified"
      );
      let page_head = head::page_head(&orman_config, &resolver, &page);
      let document = match html {
        Some(file) => Some(
          std::fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?,
        ),
        None => None,
      };
      let rendered = head::render_head(&page_head, &page.locale, document.as_deref());
      let injectable = |doc: &str| doc.contains("<head>") || doc.contains("<meta charset");
      if document.as_deref().is_some_and(|doc| !injectable(doc)) {
        ui::warn("no <head> found; tags were not injected");
      }
      emit(&rendered, out.as_deref(), &format!("head for {path}"))?;
    }
    Command::Sitemap { out } => {
      let pages = site::sitemap_pages(&orman_config, &resolver);
      let urls = build_sitemap(&resolver, &pages);
      let xml = render_sitemap_xml(&urls);
      emit(&xml, out.as_deref(), &format!("sitemap.xml ({} urls)", urls.len()))?;
    }
    Command::Robots { out } => {
      let txt = render_robots_txt(&orman_config.robots, resolver.base_url());
      emit(&txt, out.as_deref(), "robots.txt")?;
    }
    Command::Check { strict } => {
      check::run_check(&orman_config, &resolver, strict)?;
    }
    Command::Serve { addr } => {
      let addr = addr.unwrap_or_else(|| orman_config.server.addr.clone());
      let seo = site::seo_site(&orman_config)?;
      tracing::info!(
        site = %orman_config.site.name,
        locales = resolver.registry().len(),
        sitemap_pages = seo.sitemap_pages.len(),
        products = seo.product_paths.len(),
        "starting orman server"
      );
      ui::banner("serve");
      ui::arrow(&format!("{} on http://{addr}", orman_config.site.name));
      seo.serve(&addr).await.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parse_alternates_with_product() {
    let cli = Cli::try_parse_from([
      "orman",
      "alternates",
      "--product",
      "walnut-tray",
      "--format",
      "html",
      "--config",
      "shop/orman.toml",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("shop/orman.toml")));
    match cli.command {
      Command::Alternates { path, product, format, .. } => {
        assert!(path.is_none());
        assert_eq!(product.as_deref(), Some("walnut-tray"));
        assert!(matches!(format, OutputFormat::Html));
      }
      _ => panic!("expected alternates"),
    }
  }

  #[test]
  fn resolve_requires_locale() {
    assert!(Cli::try_parse_from(["orman", "resolve", "/products"]).is_err());
  }

  #[test]
  fn checked_locale_defaults_and_rejects() {
    let config = config::parse_orman_config(
      r#"
[site]
name = "Orman"
base_url = "https://orman.shop"

[i18n]
locales = ["tr", "en"]
"#,
    )
    .unwrap();
    let resolver = site::build_resolver(&config).unwrap();
    assert_eq!(checked_locale(&resolver, None).unwrap(), "tr");
    assert_eq!(checked_locale(&resolver, Some("en")).unwrap(), "en");
    let err = checked_locale(&resolver, Some("fr")).unwrap_err().to_string();
    assert!(err.contains("unknown locale \"fr\""), "{err}");
  }

  #[test]
  fn parse_head_with_document() {
    let cli = Cli::try_parse_from(["orman", "head", "/tr/urunler", "--html", "dist/index.html"])
      .unwrap();
    match cli.command {
      Command::Head { path, html, out } => {
        assert_eq!(path, "/tr/urunler");
        assert_eq!(html, Some(PathBuf::from("dist/index.html")));
        assert!(out.is_none());
      }
      _ => panic!("expected head"),
    }
  }

  #[test]
  fn alternates_for_product_omit_missing_slugs() {
    let config = config::parse_orman_config(
      r#"
[site]
name = "Orman"
base_url = "https://orman.shop"

[i18n]
locales = ["tr", "en", "de"]

[[products]]
id = "walnut-tray"
slugs = { tr = "ceviz-tepsi", en = "walnut-tray" }
"#,
    )
    .unwrap();
    let resolver = site::build_resolver(&config).unwrap();
    let json = run_alternates(
      &config,
      &resolver,
      None,
      Some("en"),
      Some("walnut-tray"),
      OutputFormat::Json,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["en"], "https://orman.shop/en/products/walnut-tray");
    assert_eq!(value["x-default"], "https://orman.shop/tr/products/ceviz-tepsi");
    assert!(value.get("de").is_none());

    let err = run_alternates(&config, &resolver, None, None, None, OutputFormat::Html).unwrap_err();
    assert!(err.to_string().contains("needs a path or --product"));
  }

  #[test]
  fn emit_writes_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("public/robots.txt");
    emit("User-agent: *\n", Some(&out), "robots.txt").unwrap();
    assert_eq!(std::fs::read_to_string(out).unwrap(), "User-agent: *\n");
  }
}
