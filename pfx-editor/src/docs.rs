//! Opening the documentation in a browser.
//!
//! `open` shows the index page; `lookup` opens the reference page filtered
//! by a search query. Repeating the same query within the cooldown is
//! refused so a held key or double press does not spawn a pile of tabs.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::time::{Duration, Instant};

use tracing::{debug, info};

/// Something that can show a URL to the user.
pub trait Launcher {
    fn launch(&mut self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// Errors from documentation requests.
#[derive(Debug)]
pub enum DocsError {
    /// The same query was looked up too recently.
    Cooldown {
        query: String,
        remaining: Duration,
    },
    /// The launcher failed to open the page.
    Launch(io::Error),
}

impl DocsError {
    /// Short headline for user-facing notices.
    pub fn title(&self) -> &'static str {
        match self {
            DocsError::Cooldown { .. } => "Too many identical requests",
            DocsError::Launch(_) => "Could not open documentation",
        }
    }
}

impl fmt::Display for DocsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocsError::Cooldown { query, remaining } => write!(
                f,
                "Please wait {} s before searching \"{}\" again",
                remaining.as_secs(),
                query
            ),
            DocsError::Launch(e) => write!(f, "Failed to launch browser: {}", e),
        }
    }
}

impl std::error::Error for DocsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocsError::Launch(e) => Some(e),
            DocsError::Cooldown { .. } => None,
        }
    }
}

impl From<io::Error> for DocsError {
    fn from(e: io::Error) -> Self {
        DocsError::Launch(e)
    }
}

/// Documentation front end with a per-query cooldown.
pub struct DocService<L: Launcher = SystemLauncher> {
    base_url: String,
    cooldown: Duration,
    last_lookup: HashMap<String, Instant>,
    launcher: L,
}

impl<L: Launcher> DocService<L> {
    pub fn new(base_url: impl Into<String>, cooldown: Duration, launcher: L) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            cooldown,
            last_lookup: HashMap::new(),
            launcher,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn index_url(&self) -> String {
        format!("{}/index.html", self.base_url)
    }

    pub fn lookup_url(&self, query: &str) -> String {
        format!(
            "{}/pages/references.html?search={}",
            self.base_url,
            encode_query(query)
        )
    }

    /// Open the documentation index.
    pub fn open(&mut self) -> Result<(), DocsError> {
        let url = self.index_url();
        info!(%url, "opening documentation");
        self.launcher.launch(&url)?;
        Ok(())
    }

    /// Open the reference page searched for `query`.
    pub fn lookup(&mut self, query: &str) -> Result<(), DocsError> {
        self.lookup_at(query, Instant::now())
    }

    /// [`lookup`](Self::lookup) with an explicit clock reading.
    pub fn lookup_at(&mut self, query: &str, now: Instant) -> Result<(), DocsError> {
        if let Some(&last) = self.last_lookup.get(query) {
            let since = now.saturating_duration_since(last);
            if since < self.cooldown {
                debug!(query, "documentation lookup throttled");
                return Err(DocsError::Cooldown {
                    query: query.to_string(),
                    remaining: self.cooldown - since,
                });
            }
        }

        self.last_lookup.insert(query.to_string(), now);
        let url = self.lookup_url(query);
        info!(%url, "opening documentation");
        self.launcher.launch(&url)?;
        Ok(())
    }
}

/// Form-encode a query string: unreserved bytes pass through, spaces become
/// `+`, everything else is percent-encoded per UTF-8 byte.
pub fn encode_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for b in query.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
