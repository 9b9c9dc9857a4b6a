mod env_guard;
mod fake_git;

pub use env_guard::EnvVarGuard;
pub use fake_git::FakeGit;
