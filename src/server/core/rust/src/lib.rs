/* src/server/core/rust/src/lib.rs */

pub mod alternates;
pub mod errors;
pub mod locale;
pub mod negotiate;
pub mod pathnames;
pub mod resolve;

// Re-exports for ergonomic use
pub use alternates::{AlternateSet, OverrideResult, PathOverride, X_DEFAULT, build_alternates};
pub use errors::RoutingError;
pub use locale::LocaleRegistry;
pub use negotiate::{LOCALE_COOKIE, NegotiateContext, negotiate_locale, split_locale_prefix};
pub use pathnames::{PathnameEntry, PathnameTable};
pub use resolve::{LocalizedMatch, PathResolver, RoutingConfig, interpolate};
