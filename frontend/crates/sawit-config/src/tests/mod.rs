
use std::env;

/// Environment variables read by `Config::load_from`.
pub(crate) const SAWIT_ENV_VARS: [&str; 10] = [
    "SAWIT_IDENTITY_SERVICE_URL",
    "SAWIT_PLANTATION_SERVICE_URL",
    "SAWIT_HARVEST_SERVICE_URL",
    "SAWIT_SHIPMENT_SERVICE_URL",
    "SAWIT_PAYROLL_SERVICE_URL",
    "SAWIT_LOG_LEVEL",
    "SAWIT_LOG_COLORED",
    "SAWIT_LOG_FILE",
    "SAWIT_SESSION_ENABLED",
    "SAWIT_SESSION_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every SAWIT_* override so a test starts from file/default values.
pub(crate) fn clean_env() -> Vec<EnvGuard> {
    SAWIT_ENV_VARS.iter().map(|key| EnvGuard::remove(key)).collect()
}
