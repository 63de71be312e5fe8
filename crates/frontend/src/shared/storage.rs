use contracts::shared::onboarding::{KeyValueStore, MemoryStore};
use web_sys::window;

/// Ключ для переопределения конфигурации (TOML целиком)
pub const CONFIG_OVERRIDE_KEY: &str = "nexq_config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `KeyValueStore` over `window.localStorage`.
///
/// Без доступа к localStorage (приватный режим, не браузер) значения
/// живут в памяти до перезагрузки страницы.
#[derive(Default)]
pub struct LocalStorageStore {
    fallback: MemoryStore,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        match get_local_storage() {
            Some(storage) => storage.get_item(key).ok()?,
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected '{}', keeping it in memory", key);
                    self.fallback.set(key, value);
                }
            }
            None => self.fallback.set(key, value),
        }
    }
}

/// Config override saved by hand in devtools, if any.
pub fn config_override() -> Option<String> {
    get_local_storage()?.get_item(CONFIG_OVERRIDE_KEY).ok()?
}
