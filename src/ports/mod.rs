mod git;

pub use git::{GitInspector, GitRepository};
