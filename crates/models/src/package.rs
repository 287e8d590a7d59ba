use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Kind of shipping container a package describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShippingPackageType {
    /// Items ship in their own packaging
    Item,
    /// Items are packed into a box
    #[default]
    Box,
}

impl std::fmt::Display for ShippingPackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShippingPackageType::Item => write!(f, "ITEM"),
            ShippingPackageType::Box => write!(f, "BOX"),
        }
    }
}

// SQLx implementation for ShippingPackageType
impl sqlx::Type<sqlx::Postgres> for ShippingPackageType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ShippingPackageType {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        match s.as_str() {
            "ITEM" => Ok(ShippingPackageType::Item),
            "BOX" => Ok(ShippingPackageType::Box),
            _ => Err(format!("Invalid package type: {}", s).into()),
        }
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ShippingPackageType {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        let s = self.to_string();
        <&str as sqlx::Encode<sqlx::Postgres>>::encode(s.as_str(), buf)
    }
}

/// Package (box) template configured by a merchant. `code` is unique within a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    #[validate(custom(function = "validate_package_code"))]
    pub code: String,

    #[serde(rename = "type", default)]
    pub package_type: ShippingPackageType,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub shipping_weight: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub shipping_max_weight: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub shipping_length: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub shipping_height: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub shipping_width: f64,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub shipping_quantity: i32,

    /// Item count from which this package is selected
    #[serde(default, alias = "treshold")]
    #[validate(range(min = 0))]
    pub threshold: i32,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub item_name: String,

    #[serde(default)]
    pub default_packaging: bool,
}

/// Stored package row
#[derive(Debug, Clone, FromRow)]
pub struct PackageRecord {
    pub id: Uuid,
    pub store_id: Uuid,
    pub code: String,
    pub package_type: ShippingPackageType,
    pub shipping_weight: f64,
    pub shipping_max_weight: f64,
    pub shipping_length: f64,
    pub shipping_height: f64,
    pub shipping_width: f64,
    pub shipping_quantity: i32,
    pub threshold: i32,
    pub item_name: String,
    pub default_packaging: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PackageRecord> for PackageDetails {
    fn from(record: PackageRecord) -> Self {
        Self {
            code: record.code,
            package_type: record.package_type,
            shipping_weight: record.shipping_weight,
            shipping_max_weight: record.shipping_max_weight,
            shipping_length: record.shipping_length,
            shipping_height: record.shipping_height,
            shipping_width: record.shipping_width,
            shipping_quantity: record.shipping_quantity,
            threshold: record.threshold,
            item_name: record.item_name,
            default_packaging: record.default_packaging,
        }
    }
}

fn validate_package_code(code: &str) -> Result<(), ValidationError> {
    if crate::is_valid_code(code) {
        Ok(())
    } else {
        let mut err = ValidationError::new("package_code");
        err.message = Some("code must be 1-100 characters of letters, digits, '-' or '_'".into());
        Err(err)
    }
}
