//! Build-time configuration for the storage slot and branding with an
//! optional runtime override. The runtime config is read from
//! `window.GOTRAVEL_CONFIG` (if present) so static deployments can change
//! values without rebuilding. Configuration values are public; do not store
//! secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_key: String,
    pub brand_name: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let storage_key = option_env!("GOTRAVEL_STORAGE_KEY").unwrap_or("gt_users");
        let brand_name = option_env!("GOTRAVEL_BRAND_NAME").unwrap_or("GoTravel");

        let mut config = Self {
            storage_key: storage_key.to_string(),
            brand_name: brand_name.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    storage_key: Option<String>,
    brand_name: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.storage_key {
        config.storage_key = value;
    }
    if let Some(value) = runtime.brand_name {
        config.brand_name = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("GOTRAVEL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        storage_key: read_runtime_value(&object, "storage_key"),
        brand_name: read_runtime_value(&object, "brand_name"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  gt_users_staging "),
            Some("gt_users_staging".to_string())
        );
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let config = AppConfig::load();
        assert!(!config.storage_key.is_empty());
        assert!(!config.brand_name.is_empty());
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            storage_key: "gt_users".to_string(),
            brand_name: "GoTravel".to_string(),
        };
        let runtime = RuntimeConfig {
            storage_key: normalize_runtime_value(""),
            brand_name: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.storage_key, "gt_users");
        assert_eq!(config.brand_name, "GoTravel");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            storage_key: "gt_users".to_string(),
            brand_name: "GoTravel".to_string(),
        };
        let runtime = RuntimeConfig {
            storage_key: normalize_runtime_value("gt_users_v2"),
            brand_name: normalize_runtime_value("GoTravel Pink"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.storage_key, "gt_users_v2");
        assert_eq!(config.brand_name, "GoTravel Pink");
    }
}
