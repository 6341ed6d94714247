//! Product and variant option types.

use std::collections::BTreeMap;

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Units left at or below which a listing shows "last units".
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Listing price as supplied by the product service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Base amount before any variant modifier.
    pub amount: i64,
    /// Listing currency.
    pub currency: Currency,
    /// Amount before the current promotion, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_amount: Option<i64>,
    /// Advertised discount, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
}

impl Price {
    /// Create a price with no promotion.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            original_amount: None,
            discount_percentage: None,
        }
    }

    /// Attach the pre-promotion amount and advertised discount.
    pub fn with_original(mut self, original_amount: i64, discount_percentage: Option<u8>) -> Self {
        self.original_amount = Some(original_amount);
        self.discount_percentage = discount_percentage;
        self
    }

    /// The base amount as money.
    pub fn base(&self) -> Money {
        Money::new(self.amount, self.currency)
    }

    /// The pre-promotion amount as money.
    pub fn original(&self) -> Option<Money> {
        self.original_amount.map(|a| Money::new(a, self.currency))
    }

    /// Check if the listing is on sale (original price above current).
    pub fn is_on_sale(&self) -> bool {
        self.original_amount
            .map(|original| original > self.amount)
            .unwrap_or(false)
    }

    /// How much the promotion saves, if on sale.
    pub fn savings(&self) -> Option<Money> {
        if !self.is_on_sale() {
            return None;
        }
        self.original()?.try_subtract(&self.base())
    }
}

/// One concrete choice within a variant axis (e.g. color "Negro").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VariantOption {
    /// Display name.
    pub name: String,
    /// Key of the option within its axis.
    pub value: String,
    /// Whether the option can currently be bought.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Image shown when selected (color-like axes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Signed amount added to the base price (storage-like axes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_modifier: Option<i64>,
}

fn default_available() -> bool {
    true
}

impl VariantOption {
    /// Create an available option.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            available: true,
            image: None,
            price_modifier: None,
        }
    }

    /// Mark the option as not purchasable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Set the option image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the price modifier.
    pub fn with_price_modifier(mut self, modifier: i64) -> Self {
        self.price_modifier = Some(modifier);
        self
    }
}

/// Stock level as shown on the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LastUnits,
    Available,
}

impl StockStatus {
    /// Get stock status message.
    pub fn message(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Sin stock",
            StockStatus::LastUnits => "¡Últimas unidades!",
            StockStatus::Available => "Stock disponible",
        }
    }
}

/// A product as delivered by the product service.
///
/// Read-only to the personalization engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Base price.
    pub price: Price,
    /// Ordered gallery images.
    #[serde(default)]
    pub images: Vec<String>,
    /// Variant axes ("color", "storage", ...) with their ordered options.
    #[serde(default)]
    pub variants: BTreeMap<String, Vec<VariantOption>>,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Technical attributes shown in the comparison table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub free_shipping: bool,
    /// Average review score (0-5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Product {
    /// Create a product with no variants, images or classification.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            images: Vec::new(),
            variants: BTreeMap::new(),
            brand: String::new(),
            category: String::new(),
            subcategory: String::new(),
            stock: 0,
            description: None,
            specifications: BTreeMap::new(),
            free_shipping: false,
            rating: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_category(
        mut self,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        self.category = category.into();
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Add (or replace) a variant axis.
    pub fn with_axis(mut self, axis: impl Into<String>, options: Vec<VariantOption>) -> Self {
        self.variants.insert(axis.into(), options);
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_specification(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(name.into(), value.into());
        self
    }

    /// Options of one axis, in source order.
    pub fn axis(&self, axis: &str) -> Option<&[VariantOption]> {
        self.variants.get(axis).map(Vec::as_slice)
    }

    /// First gallery image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check if this product has any variant axis with options.
    pub fn has_variants(&self) -> bool {
        self.variants.values().any(|options| !options.is_empty())
    }

    /// Check if at least one unit is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock level bucket for display.
    pub fn stock_status(&self) -> StockStatus {
        match self.stock {
            0 => StockStatus::OutOfStock,
            n if n <= LOW_STOCK_THRESHOLD => StockStatus::LastUnits,
            _ => StockStatus::Available,
        }
    }
}
