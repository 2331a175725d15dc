use urlencoding::encode;

/// Builds download references for matched resumes
///
/// The results page only knows a resume's filename key; the bytes live
/// behind a separate file-serving endpoint. Implementations turn the key
/// into an href that endpoint understands, and must be cheap and pure so
/// the renderer stays side-effect free.
pub trait DownloadLinkResolver: Send + Sync {
    fn resolve(&self, filename: &str) -> String;
}

/// Resolver for the standard file-serving route
///
/// Joins a fixed base path with the percent-encoded filename, e.g.
/// `/download/alice.pdf`. The base path comes from configuration so
/// deployments can point the page at a CDN or a different mount.
#[derive(Debug, Clone)]
pub struct StaticPathResolver {
    base_path: String,
}

impl StaticPathResolver {
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path = base_path.into().trim_end_matches('/').to_string();
        Self { base_path }
    }
}

impl DownloadLinkResolver for StaticPathResolver {
    fn resolve(&self, filename: &str) -> String {
        format!("{}/{}", self.base_path, encode(filename))
    }
}
