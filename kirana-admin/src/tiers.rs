//! Quantity-tier list editor
//!
//! A product sells in labelled quantities ("2", "1kg"), each with its
//! own total price. Labels stay opaque strings; the storefront uses
//! them as selection keys.

use rust_decimal::Decimal;
use shared::models::QuantityTier;

use crate::error::{EditError, EditResult};
use crate::validation::{MAX_SHORT_TEXT_LEN, parse_price, validate_required_text};

/// Ordered quantity-price rows for one product draft
#[derive(Debug, Clone, Default)]
pub struct TierList {
    tiers: Vec<QuantityTier>,
}

impl TierList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from stored entity data (edit sessions).
    pub fn from_tiers(tiers: Vec<QuantityTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[QuantityTier] {
        &self.tiers
    }

    pub fn into_tiers(self) -> Vec<QuantityTier> {
        self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Append a tier from the raw form fields.
    ///
    /// Both fields are required and the price must parse to a
    /// non-negative amount; on any failure the list is unchanged.
    /// Duplicate labels are allowed.
    pub fn add(&mut self, quantity: &str, price: &str) -> EditResult<()> {
        validate_required_text(quantity, "Quantity", MAX_SHORT_TEXT_LEN)?;
        let price = parse_price(price, "Tier price")?;
        if price < Decimal::ZERO {
            return Err(EditError::validation("Tier price must not be negative"));
        }
        self.tiers.push(QuantityTier {
            quantity: quantity.trim().to_string(),
            price,
        });
        Ok(())
    }

    /// Remove the tier at `index`, shifting the rest left.
    pub fn remove(&mut self, index: usize) -> EditResult<QuantityTier> {
        if index >= self.tiers.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.tiers.len(),
            });
        }
        Ok(self.tiers.remove(index))
    }
}
