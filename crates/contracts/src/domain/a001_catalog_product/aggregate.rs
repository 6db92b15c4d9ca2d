use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Aggregate
// ============================================================================

/// Rating summary attached to a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score
    pub rate: f64,
    /// Number of rating samples
    pub count: u32,
}

/// Catalog product as shown in the listing.
///
/// Built once from the data source payload and never mutated afterwards.
/// `id` doubles as the "newest" ordering key and as the render key of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub rating: Rating,

    /// Not populated by the current data source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

// ============================================================================
// Raw payload
// ============================================================================

/// Rating object exactly as the data source sends it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingDto {
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Product record exactly as the data source sends it
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogProductDto {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub rating: Option<RatingDto>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The response body is not a JSON array
    NotAnArray,
    /// A record is missing a field or has a field of the wrong type
    Shape(String),
    InvalidPrice { id: i64, price: f64 },
    InvalidRating { id: i64, rate: f64 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotAnArray => write!(f, "catalog payload is not a JSON array"),
            DecodeError::Shape(msg) => write!(f, "malformed product record: {}", msg),
            DecodeError::InvalidPrice { id, price } => {
                write!(f, "product {} has invalid price {}", id, price)
            }
            DecodeError::InvalidRating { id, rate } => {
                write!(f, "product {} has invalid rating {}", id, rate)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl TryFrom<CatalogProductDto> for Product {
    type Error = DecodeError;

    fn try_from(dto: CatalogProductDto) -> Result<Self, Self::Error> {
        if !dto.price.is_finite() || dto.price < 0.0 {
            return Err(DecodeError::InvalidPrice {
                id: dto.id,
                price: dto.price,
            });
        }

        // Adding +0.0 turns -0.0 into 0.0
        let price = dto.price + 0.0;

        // Missing rating reads as zero, same as the popularity comparator expects
        let raw_rating = dto.rating.unwrap_or_default();
        let rate = raw_rating.rate.unwrap_or(0.0);
        if !rate.is_finite() {
            return Err(DecodeError::InvalidRating { id: dto.id, rate });
        }

        Ok(Self {
            id: dto.id,
            title: dto.title,
            image: dto.image,
            description: dto.description,
            price,
            category: dto.category,
            rating: Rating {
                rate,
                count: raw_rating.count.unwrap_or(0),
            },
            label: dto.label,
        })
    }
}

/// Result of decoding a whole catalog payload
#[derive(Debug, Clone, Default)]
pub struct DecodedCatalog {
    /// Valid products in source order
    pub products: Vec<Product>,
    /// Position in the payload and reason for every record that was dropped
    pub skipped: Vec<(usize, DecodeError)>,
}

/// Decode a data source payload record by record.
///
/// A body that is not an array fails as a whole. Inside the array every
/// record is decoded on its own: bad records are skipped and reported in
/// [`DecodedCatalog::skipped`], good ones keep their source order.
pub fn decode_catalog(payload: serde_json::Value) -> Result<DecodedCatalog, DecodeError> {
    let serde_json::Value::Array(records) = payload else {
        return Err(DecodeError::NotAnArray);
    };

    let mut decoded = DecodedCatalog::default();
    for (index, record) in records.into_iter().enumerate() {
        let product = serde_json::from_value::<CatalogProductDto>(record)
            .map_err(|e| DecodeError::Shape(e.to_string()))
            .and_then(Product::try_from);
        match product {
            Ok(p) => decoded.products.push(p),
            Err(e) => decoded.skipped.push((index, e)),
        }
    }
    Ok(decoded)
}
