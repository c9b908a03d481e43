/// The set of hostnames through which clients may connect.
///
/// Entries are stored lower-cased, in configuration order, without
/// duplicates. They are otherwise kept exactly as configured, so surrounding
/// whitespace is significant. An empty list allows nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    domains: Vec<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ret = Self::new();
        for domain in domains {
            ret.add(domain.as_ref());
        }
        ret
    }

    fn add(&mut self, domain: &str) {
        let domain = domain.to_lowercase();
        if domain.is_empty() || self.domains.contains(&domain) {
            return;
        }
        self.domains.push(domain);
    }

    /// Determine whether the given hostname is allowed. Comparison is
    /// case-insensitive.
    pub fn contains(&self, hostname: &str) -> bool {
        let hostname = hostname.to_lowercase();
        self.domains.iter().any(|d| *d == hostname)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}
