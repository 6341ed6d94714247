//! Variant selection and price/image derivation for one product view.

use std::collections::BTreeMap;

use crate::catalog::{Product, VariantOption};
use crate::config::AxisRoles;
use crate::money::Money;

/// Chosen option value per axis.
pub type SelectedVariants = BTreeMap<String, String>;

/// Tracks the shopper's choice on each variant axis of a product.
///
/// Lives as long as the product view that owns it. Lookups never fail: an
/// unknown selection falls back to the base price, the first gallery image,
/// or `None`.
#[derive(Debug, Clone)]
pub struct VariantSelector<'a> {
    product: &'a Product,
    roles: AxisRoles,
    selected: SelectedVariants,
}

impl<'a> VariantSelector<'a> {
    /// Create a selector with the default axis roles.
    pub fn new(product: &'a Product) -> Self {
        Self::with_roles(product, AxisRoles::default())
    }

    /// Create a selector with custom axis roles.
    ///
    /// Each non-empty axis starts on its first option in source order, even
    /// when that option is unavailable.
    pub fn with_roles(product: &'a Product, roles: AxisRoles) -> Self {
        let selected = product
            .variants
            .iter()
            .filter_map(|(axis, options)| {
                options
                    .first()
                    .map(|first| (axis.clone(), first.value.clone()))
            })
            .collect();

        Self {
            product,
            roles,
            selected,
        }
    }

    /// The product this selector describes.
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Set the selection for `axis`.
    ///
    /// The value is not checked against the axis options; a value that matches
    /// nothing simply makes derivation fall back.
    pub fn select_option(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        let axis = axis.into();
        let value = value.into();
        tracing::debug!(product_id = %self.product.id, %axis, %value, "variant selected");
        self.selected.insert(axis, value);
    }

    /// Current selection per axis.
    pub fn selected(&self) -> &SelectedVariants {
        &self.selected
    }

    /// Selected value on one axis.
    pub fn selected_value(&self, axis: &str) -> Option<&str> {
        self.selected.get(axis).map(String::as_str)
    }

    /// The option matching the current selection on `axis`.
    pub fn selected_option(&self, axis: &str) -> Option<&'a VariantOption> {
        let value = self.selected.get(axis)?;
        self.product
            .axis(axis)?
            .iter()
            .find(|option| &option.value == value)
    }

    /// Options of one axis, in source order.
    pub fn options(&self, axis: &str) -> &'a [VariantOption] {
        self.product.axis(axis).unwrap_or(&[])
    }

    /// Base price plus the modifier of the selected price-axis option.
    pub fn current_price(&self) -> Money {
        let modifier = self
            .selected_option(&self.roles.price_axis)
            .and_then(|option| option.price_modifier)
            .unwrap_or(0);
        self.product.price.base().with_modifier(modifier)
    }

    /// Image of the selected image-axis option, else the first gallery image,
    /// else an empty string.
    pub fn current_image(&self) -> String {
        self.selected_option(&self.roles.image_axis)
            .and_then(|option| option.image.as_deref())
            .or_else(|| self.product.primary_image())
            .unwrap_or_default()
            .to_string()
    }

    /// Whether every selection names an existing, available option.
    ///
    /// Defaults ignore availability, so this can be false right after
    /// construction.
    pub fn is_selection_available(&self) -> bool {
        self.selected
            .keys()
            .all(|axis| self.selected_option(axis).is_some_and(|o| o.available))
    }
}
