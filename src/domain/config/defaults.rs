//! Fill unset config fields from the environment and the git repository.

use std::path::Path;

use tracing::debug;

use super::document::{CliSection, ConfigDocument};
use super::locator::Locator;
use super::paths::{API_KEY_ENV, CONFIG_VERSION, DEFAULT_ENDPOINT, ENDPOINT_ENV, ORIGIN_REMOTE};
use crate::ports::{GitInspector, GitRepository};

/// Apply defaults to a parsed (or zero-value) document.
///
/// Precedence per field is file, then environment, then inference:
/// - `version` is always stamped to [`CONFIG_VERSION`].
/// - `server` falls back to `$FOSSA_ENDPOINT`, then [`DEFAULT_ENDPOINT`].
/// - `api_key` falls back to `$FOSSA_API_KEY`, otherwise stays unset.
/// - When `locator` is unset, `work_dir` is inspected as a git repository:
///   an unset `project` takes the first `origin` URL, and `locator` becomes
///   `git+<project>$<HEAD>` when both parts are known.
///
/// Inference only looks at `work_dir`. Callers resolving a module that lives
/// elsewhere pass that module's directory.
///
/// Never fails: anything that cannot be inferred is left unset.
pub fn apply_defaults<G>(mut document: ConfigDocument, work_dir: &Path, git: &G) -> ConfigDocument
where
    G: GitInspector + ?Sized,
{
    document.version = CONFIG_VERSION;

    let cli = &mut document.cli;
    if cli.server.is_none() {
        cli.server = Some(match env_value(ENDPOINT_ENV) {
            Some(endpoint) => {
                debug!("server taken from ${}", ENDPOINT_ENV);
                endpoint
            }
            None => DEFAULT_ENDPOINT.to_string(),
        });
    }

    if cli.api_key.is_none() {
        cli.api_key = env_value(API_KEY_ENV);
        if cli.api_key.is_some() {
            debug!("api_key taken from ${}", API_KEY_ENV);
        }
    }

    if cli.locator.is_none() {
        infer_from_git(cli, work_dir, git);
    }

    document
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn infer_from_git<G>(cli: &mut CliSection, work_dir: &Path, git: &G)
where
    G: GitInspector + ?Sized,
{
    let repo = match git.open_repository(work_dir) {
        Ok(repo) => repo,
        Err(err) => {
            debug!(dir = %work_dir.display(), "not a git repository, locator left unset: {err}");
            return;
        }
    };

    if cli.project.is_none() {
        match repo.remote_urls(ORIGIN_REMOTE) {
            Ok(urls) => cli.project = urls.into_iter().next().filter(|url| !url.is_empty()),
            Err(err) => debug!("no {} remote, project left unset: {err}", ORIGIN_REMOTE),
        }
    }

    let revision = match repo.head_revision() {
        Ok(revision) => revision,
        Err(err) => {
            debug!("HEAD unreadable, locator left unset: {err}");
            return;
        }
    };

    match cli.project.as_deref().and_then(|project| Locator::git(project, &revision)) {
        Some(locator) => cli.locator = Some(locator.to_string()),
        None => debug!("no project known, locator left unset"),
    }
}
