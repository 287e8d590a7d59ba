use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Address as submitted by a client. Saving it replaces the stored origin wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersistableAddress {
    #[validate(length(max = 256))]
    pub address: Option<String>,

    #[validate(length(max = 256))]
    pub city: Option<String>,

    #[validate(length(max = 256))]
    pub postal_code: Option<String>,

    #[validate(length(max = 100))]
    pub state_province: Option<String>,

    /// Zone (state/province) code
    #[validate(length(max = 100))]
    pub zone: Option<String>,

    /// ISO 3166-1 alpha-2 country code
    #[validate(custom(function = "validate_country_code"))]
    pub country: String,
}

/// Address as returned to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadableAddress {
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state_province: Option<String>,
    pub zone: Option<String>,
    pub country: Option<String>,
    pub active: bool,
}

impl From<&PersistableAddress> for ReadableAddress {
    fn from(address: &PersistableAddress) -> Self {
        Self {
            address: address.address.clone(),
            city: address.city.clone(),
            postal_code: address.postal_code.clone(),
            state_province: address.state_province.clone(),
            zone: address.zone.clone(),
            country: Some(address.country.to_ascii_uppercase()),
            active: true,
        }
    }
}

/// Stored shipping origin of a merchant store
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShippingOrigin {
    pub store_id: Uuid,
    pub active: bool,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state_province: Option<String>,
    pub zone: Option<String>,
    pub country: String,
    pub updated_at: DateTime<Utc>,
}

impl From<ShippingOrigin> for ReadableAddress {
    fn from(origin: ShippingOrigin) -> Self {
        Self {
            address: origin.address,
            city: origin.city,
            postal_code: origin.postal_code,
            state_province: origin.state_province,
            zone: origin.zone,
            country: Some(origin.country),
            active: origin.active,
        }
    }
}

fn validate_country_code(country: &str) -> Result<(), ValidationError> {
    if country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("country_code");
        err.message = Some("country must be an ISO 3166-1 alpha-2 code".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(country: &str) -> PersistableAddress {
        PersistableAddress {
            address: Some("1 Harbour Road".to_string()),
            city: Some("Montreal".to_string()),
            postal_code: Some("H2X 1Y4".to_string()),
            state_province: None,
            zone: Some("QC".to_string()),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_country_code_validation() {
        assert!(address("CA").validate().is_ok());
        assert!(address("ca").validate().is_ok());
        assert!(address("CAN").validate().is_err());
        assert!(address("").validate().is_err());
    }

    #[test]
    fn test_address_length_validation() {
        let mut long = address("CA");
        long.city = Some("x".repeat(257));
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_camel_case_payload() {
        let json = r#"{"address":"1 Harbour Road","city":"Montreal","postalCode":"H2X 1Y4","zone":"QC","country":"CA"}"#;
        let parsed: PersistableAddress = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.postal_code.as_deref(), Some("H2X 1Y4"));
        assert_eq!(parsed.state_province, None);
    }

    #[test]
    fn test_readable_from_persistable_is_active() {
        let readable = ReadableAddress::from(&address("ca"));
        assert!(readable.active);
        assert_eq!(readable.country.as_deref(), Some("CA"));
    }

    #[test]
    fn test_default_readable_address_is_empty() {
        let empty = ReadableAddress::default();
        assert!(!empty.active);
        assert!(empty.country.is_none());
        assert!(empty.address.is_none());
    }
}
