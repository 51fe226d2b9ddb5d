use serde::{Deserialize, Serialize};

use crate::validate::{
    NAME_MAX_CHARS, NAME_MIN_CHARS, PRICE_FLOOR, ValidationError, Violation,
};

/// Raw field values for a prospective product, as decoded from a request body.
///
/// The draft is a typed structure with named fields rather than an open-ended
/// string-keyed mapping: a body whose field names don't match is rejected at
/// deserialization, before the validator runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub in_stock: Option<bool>,
    pub discount: Option<f64>,
}

/// A validated product.
///
/// Fields are private and [`Product::validate`] is the only constructor, so
/// every instance satisfies the name-length and price constraints. A product
/// carries no identity; the store assigns one on create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: f64,
    in_stock: Option<bool>,
    discount: Option<f64>,
}

impl Product {
    /// Validate a draft, producing a `Product` or every violated constraint.
    ///
    /// - `name` character length must be within [`NAME_MIN_CHARS`],
    ///   [`NAME_MAX_CHARS`] inclusive.
    /// - `price` must be strictly greater than [`PRICE_FLOOR`].
    /// - `in_stock` may be absent; absence means "unknown".
    /// - `discount` may be absent and carries no range constraint.
    ///
    /// No coercion is applied: field values pass through unchanged.
    pub fn validate(draft: ProductDraft) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let name_chars = draft.name.chars().count();
        if name_chars < NAME_MIN_CHARS || name_chars > NAME_MAX_CHARS {
            violations.push(Violation {
                field: "name",
                reason: "name length out of bounds",
            });
        }

        if !(draft.price > PRICE_FLOOR) {
            violations.push(Violation {
                field: "price",
                reason: "price must exceed 1",
            });
        }

        if !violations.is_empty() {
            return Err(ValidationError::new(violations));
        }

        Ok(Self {
            name: draft.name,
            price: draft.price,
            in_stock: draft.in_stock,
            discount: draft.discount,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn in_stock(&self) -> Option<bool> {
        self.in_stock
    }

    pub fn discount(&self) -> Option<f64> {
        self.discount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            in_stock: None,
            discount: None,
        }
    }

    #[test]
    fn validate_accepts_fields_unchanged() {
        let product = Product::validate(ProductDraft {
            name: "AB".to_string(),
            price: 2.0,
            in_stock: None,
            discount: None,
        })
        .unwrap();

        assert_eq!(product.name(), "AB");
        assert_eq!(product.price(), 2.0);
        assert_eq!(product.in_stock(), None);
        assert_eq!(product.discount(), None);
    }

    #[test]
    fn validate_accepts_twelve_char_name_boundary() {
        let product = Product::validate(draft("TooLongName1", 5.0)).unwrap();
        assert_eq!(product.name(), "TooLongName1");
    }

    #[test]
    fn validate_rejects_one_char_name() {
        let err = Product::validate(draft("A", 2.0)).unwrap_err();
        assert!(err.violates("name"));
        assert!(!err.violates("price"));
    }

    #[test]
    fn validate_rejects_thirteen_char_name() {
        let err = Product::validate(draft("ThirteenChars", 2.0)).unwrap_err();
        assert!(err.violates("name"));
        assert_eq!("ThirteenChars".len(), 13);
    }

    #[test]
    fn validate_rejects_price_at_floor() {
        let err = Product::validate(draft("Widget", 1.0)).unwrap_err();
        assert!(err.violates("price"));
    }

    #[test]
    fn validate_rejects_low_zero_and_negative_prices() {
        for price in [0.5, 0.0, -3.25] {
            let err = Product::validate(draft("Widget", price)).unwrap_err();
            assert!(err.violates("price"), "price {price} should be rejected");
        }
    }

    #[test]
    fn validate_rejects_nan_price() {
        let err = Product::validate(draft("Widget", f64::NAN)).unwrap_err();
        assert!(err.violates("price"));
    }

    #[test]
    fn validate_reports_every_violation_not_just_the_first() {
        let err = Product::validate(draft("A", 0.5)).unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert!(err.violates("name"));
        assert!(err.violates("price"));
    }

    #[test]
    fn violation_reasons_are_stable() {
        let err = Product::validate(draft("A", 0.5)).unwrap_err();
        let reasons: Vec<&str> = err.violations().iter().map(|v| v.reason).collect();
        assert!(reasons.contains(&"name length out of bounds"));
        assert!(reasons.contains(&"price must exceed 1"));
    }

    #[test]
    fn discount_is_unbounded() {
        let product = Product::validate(ProductDraft {
            name: "Widget".to_string(),
            price: 9.99,
            in_stock: Some(true),
            discount: Some(-400.0),
        })
        .unwrap();
        assert_eq!(product.discount(), Some(-400.0));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 12 two-byte characters: 24 bytes, but within the 12-char bound.
        let name = "é".repeat(12);
        let product = Product::validate(draft(&name, 2.0)).unwrap();
        assert_eq!(product.name().chars().count(), 12);
    }

    #[test]
    fn draft_deserializes_from_minimal_body() {
        let draft: ProductDraft = serde_json::from_str(r#"{"name":"AB","price":2.0}"#).unwrap();
        assert_eq!(draft.in_stock, None);
        assert_eq!(draft.discount, None);
        assert!(Product::validate(draft).is_ok());
    }

    #[test]
    fn draft_rejects_missing_required_field() {
        let res = serde_json::from_str::<ProductDraft>(r#"{"name":"AB"}"#);
        assert!(res.is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every in-bounds draft validates and round-trips its
            /// field values unchanged.
            #[test]
            fn in_bounds_drafts_validate(
                name in "[A-Za-z0-9]{2,12}",
                price in 1.001f64..1_000_000.0,
                in_stock in proptest::option::of(any::<bool>()),
                discount in proptest::option::of(-1_000.0f64..1_000.0),
            ) {
                let product = Product::validate(ProductDraft {
                    name: name.clone(),
                    price,
                    in_stock,
                    discount,
                }).unwrap();

                prop_assert_eq!(product.name(), name.as_str());
                prop_assert_eq!(product.price(), price);
                prop_assert_eq!(product.in_stock(), in_stock);
                prop_assert_eq!(product.discount(), discount);
            }

            /// Property: out-of-bounds names always carry a name violation.
            #[test]
            fn out_of_bounds_names_are_rejected(
                name in prop_oneof!["[A-Za-z0-9]{0,1}", "[A-Za-z0-9]{13,40}"],
                price in 1.001f64..1_000.0,
            ) {
                let err = Product::validate(ProductDraft {
                    name,
                    price,
                    in_stock: None,
                    discount: None,
                }).unwrap_err();
                prop_assert!(err.violates("name"));
            }

            /// Property: prices at or below the floor always carry a price
            /// violation.
            #[test]
            fn floor_prices_are_rejected(
                name in "[A-Za-z0-9]{2,12}",
                price in -1_000.0f64..=1.0,
            ) {
                let err = Product::validate(ProductDraft {
                    name,
                    price,
                    in_stock: None,
                    discount: None,
                }).unwrap_err();
                prop_assert!(err.violates("price"));
            }

            /// Property: validation is idempotent (same draft, same outcome).
            #[test]
            fn validation_is_idempotent(
                name in "[A-Za-z0-9]{0,20}",
                price in -10.0f64..10.0,
            ) {
                let draft = ProductDraft {
                    name,
                    price,
                    in_stock: None,
                    discount: None,
                };
                let first = Product::validate(draft.clone());
                let second = Product::validate(draft);
                prop_assert_eq!(first, second);
            }
        }
    }
}
