//! The built-in structural checks.
//!
//! | Rule id | Description |
//! |---------|-------------|
//! | `no-get-prefix` | Accessors must not start with `Get` |
//! | `param-count` | Functions take at most four parameters |
//! | `file-ordering` | Top-level sections follow the canonical order |

pub mod ordering;
pub mod params;
pub mod prefix;

pub use ordering::DeclarationOrderingChecker;
pub use params::ParameterCountChecker;
pub use prefix::NamingPrefixChecker;
