//! Locale resolution
//!
//! The language code is chosen by a strict precedence chain:
//!
//! 1. session code, if it names an active language
//! 2. cookie code, if it names an active language
//! 3. code negotiated from `Accept-Language`
//! 4. configured default (`config_language`), not validated at this step
//!
//! The decision is written back to the session and the client cookie only
//! when they hold a different value, then resolved to its metadata.

use chrono::{DateTime, Utc};
use serde_json::Value;
use shopboot_domain::constants::{
    LANGUAGE_COOKIE_TTL_SECS, LANGUAGE_KEY, SETTING_LANGUAGE, SETTING_LANGUAGE_ID,
};
use shopboot_domain::entities::Language;
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::{CatalogDatabase, CookieJar, SessionStore};
use shopboot_domain::value_objects::{Cookie, LocaleInfo, LocaleSource, RequestContext, Settings};
use tracing::{debug, info};

/// Enabled languages keyed by code, in stored order
///
/// A code listed twice keeps its first position and its last record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLanguages {
    languages: Vec<Language>,
}

impl ActiveLanguages {
    /// Keep the enabled rows
    pub fn from_rows(rows: impl IntoIterator<Item = Language>) -> Self {
        let mut languages: Vec<Language> = Vec::new();
        for row in rows.into_iter().filter(|row| row.status) {
            match languages.iter_mut().find(|l| l.code == row.code) {
                Some(existing) => *existing = row,
                None => languages.push(row),
            }
        }
        Self { languages }
    }

    /// Language for `code`
    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// Whether `code` names an active language
    pub fn is_active(&self, code: &str) -> bool {
        self.get(code).is_some_and(|l| l.status)
    }

    /// Languages in stored order
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    /// Number of active languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is active
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Negotiate a language code from an `Accept-Language` header
///
/// Every tag is checked against every active language, in header order then
/// stored order, and each hit overwrites the candidate: the **last** match
/// wins. Tags are the raw comma-separated pieces compared exactly, so a
/// piece carrying whitespace or a `;q=` weight matches nothing.
pub fn negotiate_browser_language(header: &str, languages: &ActiveLanguages) -> Option<String> {
    let mut detected: Option<&str> = None;

    for tag in header.split(',') {
        for language in languages.iter() {
            if language.status && language.accepts(tag) {
                detected = Some(language.code.as_str());
            }
        }
    }

    detected.map(str::to_string)
}

/// Resolves the active locale for one bootstrap
pub struct LocaleResolver<'a> {
    db: &'a dyn CatalogDatabase,
    now: DateTime<Utc>,
}

impl<'a> LocaleResolver<'a> {
    /// Create a resolver that stamps cookies relative to the current time
    pub fn new(db: &'a dyn CatalogDatabase) -> Self {
        Self { db, now: Utc::now() }
    }

    /// Stamp cookies relative to `now` instead of the current time
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Load the active languages
    pub fn active_languages(&self) -> Result<ActiveLanguages> {
        Ok(ActiveLanguages::from_rows(self.db.active_languages()?))
    }

    /// Select a code and its source without side effects
    pub fn select(
        &self,
        languages: &ActiveLanguages,
        request: &RequestContext,
        session: &dyn SessionStore,
        settings: &Settings,
    ) -> Result<(String, LocaleSource)> {
        if let Some(code) = session
            .get_str(LANGUAGE_KEY)
            .filter(|code| languages.is_active(code))
        {
            return Ok((code, LocaleSource::Session));
        }

        if let Some(code) = request
            .cookie(LANGUAGE_KEY)
            .filter(|code| languages.is_active(code))
        {
            return Ok((code.to_string(), LocaleSource::Cookie));
        }

        if let Some(code) = request
            .accept_language()
            .and_then(|header| negotiate_browser_language(header, languages))
        {
            return Ok((code, LocaleSource::Browser));
        }

        settings
            .get_str(SETTING_LANGUAGE)
            .filter(|code| !code.is_empty())
            .map(|code| (code, LocaleSource::Default))
            .ok_or_else(|| Error::lookup("No language could be resolved and no default is configured"))
    }

    /// Resolve, persist and apply the locale
    ///
    /// Writes the session value and issues the `language` cookie only when
    /// they differ from the selected code, then records `config_language` and
    /// `config_language_id` in `settings`. Fails with a lookup error when the
    /// selected code is not an active language.
    pub fn resolve(
        &self,
        request: &RequestContext,
        session: &mut dyn SessionStore,
        cookies: &mut dyn CookieJar,
        settings: &mut Settings,
    ) -> Result<LocaleInfo> {
        let languages = self.active_languages()?;
        let (code, source) = self.select(&languages, request, &*session, settings)?;

        if session.get_str(LANGUAGE_KEY).as_deref() != Some(code.as_str()) {
            session.set(LANGUAGE_KEY, Value::String(code.clone()))?;
            debug!(code = %code, "Stored language in session");
        }

        if request.cookie(LANGUAGE_KEY) != Some(code.as_str()) {
            let mut cookie = Cookie::new(LANGUAGE_KEY, &code, self.now, LANGUAGE_COOKIE_TTL_SECS);
            if !request.host().is_empty() {
                cookie = cookie.with_domain(request.host());
            }
            cookies.set_cookie(cookie)?;
            debug!(code = %code, "Issued language cookie");
        }

        let language = languages.get(&code).ok_or_else(|| {
            Error::lookup(format!("Language '{code}' is not an active language"))
        })?;

        settings.set(SETTING_LANGUAGE_ID, language.language_id);
        settings.set(SETTING_LANGUAGE, language.code.clone());

        info!(code = %language.code, %source, "Resolved locale");

        Ok(LocaleInfo {
            code: language.code.clone(),
            language_id: language.language_id,
            directory: language.directory.clone(),
            filename: language.filename.clone(),
            source,
        })
    }
}
