use std::ffi::{OsStr, OsString};

/// Restores an environment variable on drop. Callers must be `#[serial]`.
pub(crate) struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    pub(crate) fn set<K: Into<String>, V: AsRef<OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::set_var(&key, value) };
        Self { key, original }
    }

    pub(crate) fn remove<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        unsafe { std::env::remove_var(&key) };
        Self { key, original }
    }

    /// Clear every variable the config resolver reads.
    pub(crate) fn clear_fossa_env() -> Vec<Self> {
        vec![Self::remove("FOSSA_ENDPOINT"), Self::remove("FOSSA_API_KEY")]
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { std::env::set_var(&self.key, original) };
        } else {
            unsafe { std::env::remove_var(&self.key) };
        }
    }
}
