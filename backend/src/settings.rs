//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BOOKSHELF_*` environment variables, and the
//! configuration file, in OrthoConfig's usual precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::NotFoundPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings for the Bookshelf server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSHELF")]
pub struct BookshelfSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// JSON catalogue replacing the built-in seed books.
    pub seed_path: Option<PathBuf>,
    /// Answer unknown book keys with 404 instead of an empty success.
    #[ortho_config(default = false)]
    pub strict_not_found: bool,
}

impl BookshelfSettings {
    /// Configured host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the bind address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("host `{}` resolved to no address", self.host()),
                )
            })
    }

    /// Policy for lookups that match no book.
    #[must_use]
    pub const fn not_found_policy(&self) -> NotFoundPolicy {
        NotFoundPolicy::from_strict(self.strict_not_found)
    }
}
