use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub organization: OrganizationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Реквизиты организации — шапка первой страницы, строка города и подпись
#[derive(Debug, Deserialize, Clone)]
pub struct OrganizationConfig {
    pub name: String,
    pub phone: String,
    pub ogrn: String,
    pub address_line1: String,
    pub address_line2: String,
    pub email: String,
    pub inn: String,
    pub website: String,
    pub kpp: String,
    pub city: String,
    pub director_title: String,
    pub director_name: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[organization]
name = "ООО «ПОЛАТИ»"
phone = "Тел: 8 (800) 234-22-77"
ogrn = "ОГРН 1145029009982"
address_line1 = "141006, г. Мытищи, Московская"
address_line2 = "область, Олимпийский пр-т., стр. 29а,"
email = "info@polati.ru"
inn = "ИНН 5029188770"
website = "polati.ru"
kpp = "КПП 502901001"
city = "г. Мытищи"
director_title = "Генеральный директор"
director_name = "А. А. Зазыгин"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Process-wide config, initialized once at startup
pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config, using defaults: {e}");
            toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.organization.name, "ООО «ПОЛАТИ»");
        assert_eq!(config.organization.city, "г. Мытищи");
    }

    #[test]
    fn test_director_name_uses_nbsp() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.organization.director_name.contains('\u{a0}'));
    }
}
