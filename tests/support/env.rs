use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points `CARDSTACK_CONFIG_HOME` at a scratch directory for the guard's
/// lifetime, restoring the previous value on drop.
pub struct CardstackEnvGuard {
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl CardstackEnvGuard {
    pub fn set_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = std::env::var("CARDSTACK_CONFIG_HOME").ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var("CARDSTACK_CONFIG_HOME", path);
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for CardstackEnvGuard {
    fn drop(&mut self) {
        // SAFETY: still holding the global env lock.
        unsafe {
            match self.previous.take() {
                Some(value) => std::env::set_var("CARDSTACK_CONFIG_HOME", value),
                None => std::env::remove_var("CARDSTACK_CONFIG_HOME"),
            }
        }
    }
}
