mod git2_inspector;

pub use git2_inspector::{Git2Inspector, Git2Repository};
