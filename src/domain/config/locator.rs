use std::fmt;

/// Content-addressed pointer to an exact revision of an analyzed project.
///
/// Renders as `<fetcher>+<project>$<revision>`, e.g. `git+github.com/acme/widget$0123abcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub fetcher: String,
    pub project: String,
    pub revision: String,
}

impl Locator {
    pub const GIT_FETCHER: &'static str = "git";

    /// Build a `git` locator. Returns `None` unless both parts are present.
    pub fn git(project: &str, revision: &str) -> Option<Self> {
        if project.is_empty() || revision.is_empty() {
            return None;
        }
        Some(Self {
            fetcher: Self::GIT_FETCHER.to_string(),
            project: project.to_string(),
            revision: revision.to_string(),
        })
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}${}", self.fetcher, self.project, self.revision)
    }
}
