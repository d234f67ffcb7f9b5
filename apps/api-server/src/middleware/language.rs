//! Request language detection.
//!
//! Detection order matches the original API: `lang` query parameter, then
//! the `lang` cookie, then the `Accept-Language` header, falling back to the
//! configured default. The detected language travels explicitly through the
//! validator -> handler -> formatter chain rather than living in ambient
//! request state.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use keel_core::i18n::{Language, resolve_message};
use keel_infra::JsonCatalog;

use crate::config::AppConfig;

pub const LANG_QUERY_PARAM: &str = "lang";
pub const LANG_COOKIE: &str = "lang";

/// The language negotiated for one request.
#[derive(Debug, Clone, Copy)]
pub struct RequestLanguage(Language);

impl RequestLanguage {
    pub fn language(self) -> Language {
        self.0
    }

    /// Resolve a translation key for this request's language.
    pub fn translate(&self, key: &str) -> String {
        resolve_message(key, self.0, JsonCatalog::global())
    }
}

/// Detect the language for a request.
pub fn detect(req: &HttpRequest) -> Language {
    from_query(req.query_string())
        .or_else(|| from_cookie(req))
        .or_else(|| from_header(req))
        .unwrap_or(AppConfig::global().default_language)
}

fn from_query(query: &str) -> Option<Language> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == LANG_QUERY_PARAM {
            Language::parse(value)
        } else {
            None
        }
    })
}

fn from_cookie(req: &HttpRequest) -> Option<Language> {
    req.cookie(LANG_COOKIE)
        .and_then(|cookie| Language::parse(cookie.value()))
}

fn from_header(req: &HttpRequest) -> Option<Language> {
    let header = req
        .headers()
        .get(actix_web::http::header::ACCEPT_LANGUAGE)?
        .to_str()
        .ok()?;

    // "tr-TR,tr;q=0.9,en;q=0.8" - first supported tag wins.
    header
        .split(',')
        .find_map(|part| Language::parse(part.split(';').next().unwrap_or(part)))
}

impl FromRequest for RequestLanguage {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(RequestLanguage(detect(req))))
    }
}
