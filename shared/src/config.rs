use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub mailer: MailerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        // アクセストークンが未設定でも起動は継続する。
        // その場合、メール送信は実行時に失敗として扱われる。
        let mailer = MailerConfig {
            access_token: env::var("GMAIL_ACCESS_TOKEN").unwrap_or_default(),
        };
        Ok(Self { database, mailer })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Clone)]
pub struct MailerConfig {
    pub access_token: String,
}
