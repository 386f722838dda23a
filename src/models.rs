use serde::{Deserialize, Serialize};
use std::fmt;

/// A trimmed, non-empty barcode as typed or scanned into the scan field.
///
/// The format is not validated: anything the scanner emits is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCode(String);

impl ScanCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One (product, expiry, batch) stock line matching a scanned code, as
/// returned by the backend search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockCandidate {
    pub id: i64,
    #[serde(rename = "produto_nome")]
    pub product_name: String,
    #[serde(rename = "validade_text")]
    pub expiry_label: String,
    #[serde(rename = "quantidade", default)]
    pub quantity: Option<i64>,
    #[serde(rename = "lote", default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    /// Expiry as Unix seconds (`validade_int`), when the backend sends it.
    #[serde(rename = "validade_int", default)]
    pub expiry_timestamp: Option<i64>,
}

impl StockCandidate {
    pub fn quantity_or_zero(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }
}
