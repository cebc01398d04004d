use url::Url;

/// Default hosts whose videos must carry upload metadata.
pub const DEFAULT_VIDEO_HOSTS: &[&str] = &["www.youtube.com"];

/// Allow-list of recognized video hosting hostnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHosts {
    hosts: Vec<String>,
}

impl VideoHosts {
    /// Builds the allow-list, normalizing entries to trimmed lowercase and dropping blanks.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hosts: Vec<String> = hosts
            .into_iter()
            .map(|h| h.as_ref().trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        hosts.sort();
        hosts.dedup();
        Self { hosts }
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Returns true if `url` parses and its host is on the allow-list.
    pub fn is_recognized(&self, url: &str) -> bool {
        match host_of(url) {
            Some(host) => self.hosts.iter().any(|h| *h == host),
            None => false,
        }
    }
}

impl Default for VideoHosts {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_HOSTS)
    }
}

/// Extracts the lowercase host of `url`, if it has one.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().map(|h| h.to_ascii_lowercase())
}
