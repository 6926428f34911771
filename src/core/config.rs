use std::env;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub inventory: InventoryConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Single shared household credential guarding the whole API.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

/// Domain thresholds for expiry warnings and low-quantity checks.
/// Read once at startup and injected into the inventory service.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub warning_days: u32,
    pub low_quantity_threshold: Decimal,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            inventory: InventoryConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Conservative defaults for a small single-household deployment
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

impl AuthConfig {
    const DEFAULT_USERNAME: &'static str = "fridge";
    const DEFAULT_PASSWORD: &'static str = "fridge123";

    pub fn from_env() -> Result<Self, String> {
        let username =
            env::var("AUTH_USERNAME").unwrap_or_else(|_| Self::DEFAULT_USERNAME.to_string());
        let password =
            env::var("AUTH_PASSWORD").unwrap_or_else(|_| Self::DEFAULT_PASSWORD.to_string());

        if username.is_empty() || password.is_empty() {
            return Err("AUTH_USERNAME and AUTH_PASSWORD must not be empty".to_string());
        }

        Ok(Self { username, password })
    }

    /// Credentials in the "username:password" form expected by basic auth.
    pub fn credentials(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

impl InventoryConfig {
    const DEFAULT_WARNING_DAYS: u32 = 3;
    const DEFAULT_LOW_QUANTITY_THRESHOLD: &'static str = "2";

    pub fn from_env() -> Result<Self, String> {
        let warning_days = env::var("EXPIRY_WARNING_DAYS")
            .unwrap_or_else(|_| Self::DEFAULT_WARNING_DAYS.to_string())
            .parse::<u32>()
            .map_err(|_| "EXPIRY_WARNING_DAYS must be a non-negative number".to_string())?;

        let low_quantity_threshold = Decimal::from_str(
            &env::var("LOW_QUANTITY_THRESHOLD")
                .unwrap_or_else(|_| Self::DEFAULT_LOW_QUANTITY_THRESHOLD.to_string()),
        )
        .map_err(|_| "LOW_QUANTITY_THRESHOLD must be a valid decimal".to_string())?;

        if low_quantity_threshold < Decimal::ZERO {
            return Err("LOW_QUANTITY_THRESHOLD must not be negative".to_string());
        }

        Ok(Self {
            warning_days,
            low_quantity_threshold,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Fridge Inventory API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Household fridge inventory tracker".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_timeouts_are_seconds() {
        let config = DatabaseConfig {
            url: "postgres://localhost/fridge".to_string(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        };

        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
        assert_eq!(config.idle_timeout(), Duration::from_secs(600));
        assert_eq!(config.max_lifetime(), Duration::from_secs(1800));
    }
}
