//! SQLite catalog database
//!
//! Reads the application's `store`, `setting`, `language` and `customer`
//! tables, each named with the configured table prefix. The prefix is
//! validated once at construction; every other caller-supplied value is bound
//! as a query parameter.

use crate::constants::{
    DATABASE_PROVIDER_SQLITE, TABLE_CUSTOMER, TABLE_LANGUAGE, TABLE_SETTING, TABLE_STORE,
};
use rusqlite::{Connection, OptionalExtension, params};
use shopboot_domain::entities::{Customer, Language, Setting, Store, parse_locales};
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::CatalogDatabase;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Reject table prefixes that are not plain identifiers
pub fn validate_table_prefix(prefix: &str) -> Result<()> {
    if prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Table prefix '{prefix}' may only contain letters, digits and underscores"
        )))
    }
}

fn sqlite_error(context: &str) -> impl FnOnce(rusqlite::Error) -> Error + '_ {
    move |err| Error::database_with_source(context, err)
}

/// SQLite-backed catalog database
pub struct SqliteCatalogDatabase {
    connection: Mutex<Connection>,
    prefix: String,
}

impl SqliteCatalogDatabase {
    /// Open the database file at `path`
    pub fn open(path: &Path, prefix: &str) -> Result<Self> {
        validate_table_prefix(prefix)?;
        let connection = Connection::open(path)
            .map_err(sqlite_error("Failed to open SQLite catalog database"))?;
        debug!(path = %path.display(), prefix, "Opened SQLite catalog database");
        Ok(Self {
            connection: Mutex::new(connection),
            prefix: prefix.to_string(),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory(prefix: &str) -> Result<Self> {
        validate_table_prefix(prefix)?;
        let connection = Connection::open_in_memory()
            .map_err(sqlite_error("Failed to open in-memory SQLite database"))?;
        Ok(Self {
            connection: Mutex::new(connection),
            prefix: prefix.to_string(),
        })
    }

    /// Table prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn table(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| Error::database("SQLite connection lock poisoned"))
    }

    /// Create the catalog tables if they do not exist
    pub fn install_schema(&self) -> Result<()> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {store} (store_id INTEGER PRIMARY KEY, name TEXT NOT \
             NULL DEFAULT '', url TEXT NOT NULL, ssl TEXT NOT NULL DEFAULT '');\
             CREATE TABLE IF NOT EXISTS {setting} (setting_id INTEGER PRIMARY KEY \
             AUTOINCREMENT, store_id INTEGER NOT NULL DEFAULT 0, \"key\" TEXT NOT NULL, value \
             TEXT NOT NULL, serialized INTEGER NOT NULL DEFAULT 0);\
             CREATE TABLE IF NOT EXISTS {language} (language_id INTEGER PRIMARY KEY, name TEXT \
             NOT NULL, code TEXT NOT NULL, locale TEXT NOT NULL DEFAULT '', directory TEXT NOT \
             NULL, filename TEXT NOT NULL, status INTEGER NOT NULL DEFAULT 1);\
             CREATE TABLE IF NOT EXISTS {customer} (customer_id INTEGER PRIMARY KEY, email TEXT \
             NOT NULL, password TEXT NOT NULL, status INTEGER NOT NULL DEFAULT 1);",
            store = self.table(TABLE_STORE),
            setting = self.table(TABLE_SETTING),
            language = self.table(TABLE_LANGUAGE),
            customer = self.table(TABLE_CUSTOMER),
        );
        self.lock()?
            .execute_batch(&sql)
            .map_err(sqlite_error("Failed to install catalog schema"))
    }

    /// Insert a store row
    pub fn insert_store(&self, store: &Store) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} (store_id, url) VALUES (?1, ?2)",
            self.table(TABLE_STORE)
        );
        self.lock()?
            .execute(&sql, params![store.id, store.url])
            .map_err(sqlite_error("Failed to insert store"))?;
        Ok(())
    }

    /// Insert a setting row
    pub fn insert_setting(&self, setting: &Setting) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} (store_id, \"key\", value, serialized) VALUES (?1, ?2, ?3, ?4)",
            self.table(TABLE_SETTING)
        );
        self.lock()?
            .execute(
                &sql,
                params![
                    setting.store_id,
                    setting.key,
                    setting.value,
                    setting.serialized
                ],
            )
            .map_err(sqlite_error("Failed to insert setting"))?;
        Ok(())
    }

    /// Insert a language row
    pub fn insert_language(&self, language: &Language) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} (language_id, name, code, locale, directory, filename, status) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            self.table(TABLE_LANGUAGE)
        );
        self.lock()?
            .execute(
                &sql,
                params![
                    language.language_id,
                    language.name,
                    language.code,
                    language.locale_list(),
                    language.directory,
                    language.filename,
                    language.status
                ],
            )
            .map_err(sqlite_error("Failed to insert language"))?;
        Ok(())
    }

    /// Insert a customer row
    pub fn insert_customer(&self, customer: &Customer) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} (customer_id, email, password, status) VALUES (?1, ?2, ?3, ?4)",
            self.table(TABLE_CUSTOMER)
        );
        self.lock()?
            .execute(
                &sql,
                params![
                    customer.customer_id,
                    customer.email,
                    customer.password_hash,
                    customer.status
                ],
            )
            .map_err(sqlite_error("Failed to insert customer"))?;
        Ok(())
    }
}

impl CatalogDatabase for SqliteCatalogDatabase {
    fn find_store_by_url(&self, normalized_url: &str) -> Result<Option<Store>> {
        let sql = format!(
            "SELECT store_id, url FROM {} WHERE REPLACE(url, 'www.', '') = ?1 \
             ORDER BY store_id ASC LIMIT 1",
            self.table(TABLE_STORE)
        );
        self.lock()?
            .query_row(&sql, params![normalized_url], |row| {
                Ok(Store::new(row.get(0)?, row.get::<_, String>(1)?))
            })
            .optional()
            .map_err(sqlite_error("Failed to query store"))
    }

    fn settings_for_store(&self, store_id: i64) -> Result<Vec<Setting>> {
        let sql = format!(
            "SELECT store_id, \"key\", value, serialized FROM {} \
             WHERE store_id = 0 OR store_id = ?1 ORDER BY store_id ASC, setting_id ASC",
            self.table(TABLE_SETTING)
        );
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(sqlite_error("Failed to prepare settings query"))?;
        let rows = stmt
            .query_map(params![store_id], |row| {
                Ok(Setting {
                    store_id: row.get(0)?,
                    key: row.get(1)?,
                    value: row.get(2)?,
                    serialized: row.get(3)?,
                })
            })
            .map_err(sqlite_error("Failed to query settings"))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sqlite_error("Failed to read setting row"))
    }

    fn active_languages(&self) -> Result<Vec<Language>> {
        let sql = format!(
            "SELECT language_id, name, code, locale, directory, filename, status FROM {} \
             WHERE status = 1 ORDER BY language_id ASC",
            self.table(TABLE_LANGUAGE)
        );
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(sqlite_error("Failed to prepare language query"))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Language {
                    language_id: row.get(0)?,
                    name: row.get(1)?,
                    code: row.get(2)?,
                    locale: parse_locales(&row.get::<_, String>(3)?),
                    directory: row.get(4)?,
                    filename: row.get(5)?,
                    status: row.get(6)?,
                })
            })
            .map_err(sqlite_error("Failed to query languages"))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sqlite_error("Failed to read language row"))
    }

    fn customer_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let sql = format!(
            "SELECT customer_id, email, password, status FROM {} \
             WHERE LOWER(email) = LOWER(?1) ORDER BY customer_id ASC LIMIT 1",
            self.table(TABLE_CUSTOMER)
        );
        self.lock()?
            .query_row(&sql, params![email], |row| {
                Ok(Customer {
                    customer_id: row.get(0)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    status: row.get(3)?,
                })
            })
            .optional()
            .map_err(sqlite_error("Failed to query customer"))
    }

    fn provider_name(&self) -> &str {
        DATABASE_PROVIDER_SQLITE
    }
}
