use contracts::shared::roster::Employee;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Fixed salesperson roster; report rows follow this order.
    pub roster: Vec<Employee>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 8080

[database]
path = "target/db/commission.db"

[[roster]]
code = "Y130016"
name = "ธนวัฒน์ ภมะราภา"

[[roster]]
code = "Y110003"
name = "ยุพิน ถิ่นวัฒนากูล"

[[roster]]
code = "Y110109"
name = "กัญญา รอดภัย"

[[roster]]
code = "Y110020"
name = "ปิยาภรณ์ แก้วลังกา"

[[roster]]
code = "Y610678"
name = "กฤษดา ถังทอง"

[[roster]]
code = "Y510172"
name = "อำนาจ ตะโส (เกี้ย)"

[[roster]]
code = "Y610426"
name = "ชัยณรงค์ ปานเปีย"

[[roster]]
code = "Y111196"
name = "ศุภัคษิ์ชยา พันธ์แจ่ม"

[[roster]]
code = "Y111199"
name = "อภิญญา มาตทอง"

[[roster]]
code = "Y111217"
name = "ปัญจรัตน์ ศิริกาญจนเศวต"

[[roster]]
code = "Y111221"
name = "ฐิตาภากาญจน์ ภูหิรัญประเสริฐ"

[[roster]]
code = "Y810487"
name = "กิตติศักดิ์ กล่ำเหว่า"

[[roster]]
code = "Y110026"
name = "วุฒิพงศ์ เสริมสุข"

[[roster]]
code = "Y510310"
name = "สรวิชญ์ ศรีสังวรณ์ (นกหวีด)"

[[roster]]
code = "Y710008"
name = "ธีรนิติ์ พานแก้ว"
"#;

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

/// Load once at startup; services read the roster through [`get`].
pub fn initialize() -> anyhow::Result<&'static Config> {
    if CONFIG.get().is_none() {
        let config = load_config()?;
        let _ = CONFIG.set(config);
    }
    Ok(get())
}

pub fn get() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(db_path);
            return Ok(resolved_path);
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(db_path_str))
}
