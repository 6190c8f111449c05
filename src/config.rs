use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: String,
    pub max_body_size: usize,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub receiver: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("POSTBOX_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid POSTBOX_HOST: {e}"))?;

        let port: u16 = env_or("POSTBOX_PORT", "3001")
            .parse()
            .map_err(|e| format!("Invalid POSTBOX_PORT: {e}"))?;

        let cors_origin = env_or("POSTBOX_CORS_ORIGIN", "http://localhost:3000");

        // 30 MiB
        let max_body_size: usize = env_or("POSTBOX_MAX_BODY_SIZE", "31457280")
            .parse()
            .map_err(|e| format!("Invalid POSTBOX_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("POSTBOX_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("POSTBOX_SMTP_HOST").ok(),
            std::env::var("POSTBOX_SMTP_USER").ok(),
            std::env::var("POSTBOX_SMTP_PASS").ok(),
        ) {
            (Some(host), Some(user), Some(pass)) => Some(SmtpConfig {
                host,
                port: env_or("POSTBOX_SMTP_PORT", "587")
                    .parse()
                    .map_err(|e| format!("Invalid POSTBOX_SMTP_PORT: {e}"))?,
                user,
                pass,
                receiver: env_or("POSTBOX_MAIL_RECEIVER", "contact@localhost"),
            }),
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            cors_origin,
            max_body_size,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
