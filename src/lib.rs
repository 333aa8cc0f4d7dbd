//! Appscope - cross-platform access to application-specific directories.
//!
//! This crate retrieves standard locations for storing application data,
//! configuration files, cache and logs across Unix, macOS and Windows. On
//! Unix it follows the XDG Base Directory Specification
//! (<https://specifications.freedesktop.org/basedir-spec/>).
//!
//! Create a [`Scope`] with the desired kind and application name, then query
//! it for standard directories:
//!
//! ```rust,no_run
//! # use appscope::{Scope, ScopeKind};
//! # fn main() -> Result<(), appscope::Error> {
//! let scope = Scope::new(ScopeKind::User, "myapp")?;
//!
//! let _data = scope.data_dir()?; // ~/.local/share/myapp
//! let _config = scope.config_dir()?; // ~/.config/myapp
//! let _cache = scope.cache_dir()?; // ~/.cache/myapp
//! let _log = scope.log_dir()?; // ~/.local/share/myapp
//! # Ok(())
//! # }
//! ```
//!
//! Applications that belong to a vendor prefix every path with the vendor
//! segment:
//!
//! ```rust,no_run
//! # use appscope::{Scope, ScopeKind};
//! # fn main() -> Result<(), appscope::Error> {
//! let scope = Scope::with_vendor(ScopeKind::User, "mycompany", "myapp")?;
//! # Ok(())
//! # }
//! ```
//!
//! Lookup methods find existing files across the whole search path, in
//! precedence order:
//!
//! ```rust,no_run
//! # use appscope::{Scope, ScopeKind};
//! # fn main() -> Result<(), appscope::Error> {
//! # let scope = Scope::new(ScopeKind::User, "myapp")?;
//! let _configs = scope.lookup_config("myapp.conf")?;
//! let _data_files = scope.lookup_data_file("data.json")?;
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod error;
pub mod expand;
mod lookup;
mod platform;
pub mod scope;

pub use error::Error;
pub use scope::{Scope, ScopeKind};
