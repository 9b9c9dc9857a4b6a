#![allow(dead_code, unused_imports)]

pub(crate) mod env_guard;
pub(crate) mod git_repository;

pub(crate) use env_guard::EnvVarGuard;
pub(crate) use test_context::TestContext;
