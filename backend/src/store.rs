//! Settings persistence.
//!
//! A single row in the `settings` table holds the company data and the two
//! term templates. The store is opened once in `main.rs` from the configured
//! `DataSourceMode` and shared with the handlers as `web::Data`.

use crate::config::DataSourceMode;
use common::model::settings::Settings;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    app_name TEXT NOT NULL,
    cnpj TEXT,
    logo_url TEXT NOT NULL,
    term_template TEXT,
    return_term_template TEXT
)";

pub struct SettingsStore {
    conn: Mutex<Connection>,
}

impl SettingsStore {
    /// Opens the store and seeds the built-in templates on first use.
    pub fn open(mode: &DataSourceMode) -> Result<Self, rusqlite::Error> {
        let conn = match mode {
            DataSourceMode::Sqlite(path) => Connection::open(path)?,
            DataSourceMode::Mock => Connection::open_in_memory()?,
        };
        conn.execute(SCHEMA, [])?;

        let seeded = conn.execute(
            "INSERT OR IGNORE INTO settings
                (id, app_name, cnpj, logo_url, term_template, return_term_template)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)",
            settings_params(&Settings::with_default_templates()),
        )?;
        if seeded > 0 {
            info!("Settings store ({}) seeded with the default templates", mode);
        }

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn load(&self) -> Result<Settings, String> {
        let conn = self.conn.lock().map_err(|e| e.to_string())?;
        let settings = conn
            .query_row(
                "SELECT app_name, cnpj, logo_url, term_template, return_term_template
                 FROM settings WHERE id = 1",
                [],
                |row| {
                    Ok(Settings {
                        app_name: row.get(0)?,
                        cnpj: row.get(1)?,
                        logo_url: row.get(2)?,
                        term_template: row.get(3)?,
                        return_term_template: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(|e| e.to_string())?;
        Ok(settings.unwrap_or_default())
    }

    pub fn save(&self, settings: &Settings) -> Result<(), String> {
        let conn = self.conn.lock().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT OR REPLACE INTO settings
                (id, app_name, cnpj, logo_url, term_template, return_term_template)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)",
            settings_params(settings),
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }
}

fn settings_params(
    settings: &Settings,
) -> (&str, Option<&str>, &str, Option<&str>, Option<&str>) {
    (
        settings.app_name.as_str(),
        settings.cnpj.as_deref(),
        settings.logo_url.as_str(),
        settings.term_template.as_deref(),
        settings.return_term_template.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_store_starts_with_default_templates() {
        let store = SettingsStore::open(&DataSourceMode::Mock).unwrap();
        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::with_default_templates());
    }

    #[test]
    fn saved_settings_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mode = DataSourceMode::Sqlite(dir.path().join("termos.sqlite"));

        let settings = Settings {
            app_name: "Acme Tecnologia".into(),
            cnpj: Some("12.345.678/0001-90".into()),
            logo_url: "https://acme.example/logo.png".into(),
            term_template: Some("<p>{NOME_COLABORADOR}</p>".into()),
            return_term_template: None,
        };
        SettingsStore::open(&mode).unwrap().save(&settings).unwrap();

        let reopened = SettingsStore::open(&mode).unwrap();
        assert_eq!(reopened.load().unwrap(), settings);
    }

    #[test]
    fn save_replaces_the_single_row() {
        let store = SettingsStore::open(&DataSourceMode::Mock).unwrap();
        let mut settings = store.load().unwrap();
        settings.app_name = "Primeira".into();
        store.save(&settings).unwrap();
        settings.app_name = "Segunda".into();
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap().app_name, "Segunda");
        let conn = store.conn.lock().unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }
}
