// Store selection from the query string (`store`, `lang`) or the store header

use crate::error::{Result, TenantError};
use axum::extract::Query;
use axum::http::{HeaderMap, Uri};
use shipping_models::{is_valid_code, Language, MerchantStore};

/// Header naming the store when the query string does not
pub const STORE_HEADER: &str = "x-merchant-store";

/// What the request asked for, before the store is looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSelector {
    pub store_code: String,
    pub language: Option<Language>,
}

impl StoreSelector {
    pub fn from_request(uri: &Uri, headers: &HeaderMap, default_store: &str) -> Result<Self> {
        // Read as pairs so a repeated key cannot hide `store`
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map_err(|_| TenantError::InvalidStoreCode(uri.query().unwrap_or_default().to_string()))?;

        let mut requested: Vec<&str> = Vec::new();
        for (key, value) in &pairs {
            if key == "store" && !value.trim().is_empty() && !requested.contains(&value.as_str()) {
                requested.push(value);
            }
        }
        if requested.len() > 1 {
            return Err(TenantError::InvalidStoreCode(requested.join(",")));
        }

        let store_code = match requested.first() {
            Some(code) => code.to_string(),
            None => headers
                .get(STORE_HEADER)
                .and_then(|h| h.to_str().ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default_store.to_string()),
        };

        if !is_valid_code(&store_code) {
            return Err(TenantError::InvalidStoreCode(store_code));
        }

        // First `lang` wins
        let language = pairs
            .iter()
            .find(|(key, _)| key == "lang")
            .and_then(|(_, value)| Language::parse(value));

        Ok(Self {
            store_code,
            language,
        })
    }

    /// Requested language, or the store default when none (or an invalid one) was given
    pub fn language_for(&self, store: &MerchantStore) -> Language {
        self.language
            .clone()
            .unwrap_or_else(|| Language::store_default(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn select(uri: &str, header: Option<&str>) -> Result<StoreSelector> {
        let uri: Uri = uri.parse().unwrap();
        let mut headers = HeaderMap::new();
        if let Some(value) = header {
            headers.insert(STORE_HEADER, HeaderValue::from_str(value).unwrap());
        }
        StoreSelector::from_request(&uri, &headers, "DEFAULT")
    }

    #[test]
    fn test_query_parameter_wins() {
        let selector = select("/api/v1/private/shipping/origin?store=T1&lang=FR", Some("T2")).unwrap();
        assert_eq!(selector.store_code, "T1");
        assert_eq!(selector.language, Language::parse("fr"));
    }

    #[test]
    fn test_header_then_default() {
        assert_eq!(select("/x", Some("T2")).unwrap().store_code, "T2");
        assert_eq!(select("/x", None).unwrap().store_code, "DEFAULT");
        assert_eq!(select("/x?store=", None).unwrap().store_code, "DEFAULT");
    }

    #[test]
    fn test_invalid_store_code() {
        let err = select("/x?store=bad%20code", None).unwrap_err();
        assert!(matches!(err, TenantError::InvalidStoreCode(code) if code == "bad code"));
    }

    #[test]
    fn test_repeated_parameters_keep_the_query_store() {
        let selector = select("/x?store=T1&lang=fr&lang=en", Some("T2")).unwrap();
        assert_eq!(selector.store_code, "T1");
        assert_eq!(selector.language, Language::parse("fr"));

        assert_eq!(select("/x?store=T1&store=T1", None).unwrap().store_code, "T1");
        assert_eq!(select("/x?store=&store=T1", None).unwrap().store_code, "T1");
    }

    #[test]
    fn test_conflicting_store_parameters_are_rejected() {
        let err = select("/x?store=T1&store=T2", None).unwrap_err();
        assert!(matches!(err, TenantError::InvalidStoreCode(codes) if codes == "T1,T2"));
    }

    #[test]
    fn test_invalid_language_falls_back_to_store_default() {
        let selector = select("/x?lang=english", None).unwrap();
        assert!(selector.language.is_none());

        let store = MerchantStore::new("DEFAULT", "Default", "es");
        assert_eq!(selector.language_for(&store).code, "es");
    }
}
