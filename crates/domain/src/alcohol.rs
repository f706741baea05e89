//! Alcohol — the single inventory record kept by the store.

use serde::{Deserialize, Serialize};

use crate::error::{AlcsError, ValidationError};
use crate::id::AlcoholId;

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alcohol {
    pub id: AlcoholId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Alcohol {
    /// Create a builder for the creation input of an [`Alcohol`].
    #[must_use]
    pub fn builder() -> NewAlcoholBuilder {
        NewAlcoholBuilder::default()
    }

    /// Attach a store-assigned id to a validated creation input.
    #[must_use]
    pub fn from_new(id: AlcoholId, new: NewAlcohol) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
        }
    }
}

/// Creation input for an [`Alcohol`]; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlcohol {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl NewAlcohol {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AlcsError::Validation`] when `name` is empty or `price`
    /// is NaN or infinite.
    pub fn validate(&self) -> Result<(), AlcsError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinitePrice(self.price).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewAlcohol`].
#[derive(Debug, Default)]
pub struct NewAlcoholBuilder {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl NewAlcoholBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn maybe_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Consume the builder, validate, and return a [`NewAlcohol`].
    ///
    /// # Errors
    ///
    /// Returns [`AlcsError::Validation`] if `name` is missing or empty, or
    /// if `price` is missing or not finite.
    pub fn build(self) -> Result<NewAlcohol, AlcsError> {
        let new = NewAlcohol {
            name: self.name.unwrap_or_default(),
            description: self.description,
            price: self.price.unwrap_or(f64::NAN),
        };
        new.validate()?;
        Ok(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_input_when_name_and_price_provided() {
        let new = Alcohol::builder()
            .name("Gin")
            .description("London dry")
            .price(24.99)
            .build()
            .unwrap();
        assert_eq!(new.name, "Gin");
        assert_eq!(new.description.as_deref(), Some("London dry"));
        assert!((new.price - 24.99).abs() < f64::EPSILON);
    }

    #[test]
    fn should_allow_missing_description() {
        let new = Alcohol::builder().name("Rum").price(0.0).build().unwrap();
        assert!(new.description.is_none());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Alcohol::builder().price(10.0).build();
        assert!(matches!(
            result,
            Err(AlcsError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_is_missing() {
        let result = Alcohol::builder().name("Vodka").build();
        assert!(matches!(
            result,
            Err(AlcsError::Validation(ValidationError::NonFinitePrice(_)))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_is_infinite() {
        let result = Alcohol::builder()
            .name("Vodka")
            .price(f64::INFINITY)
            .build();
        assert!(matches!(
            result,
            Err(AlcsError::Validation(ValidationError::NonFinitePrice(_)))
        ));
    }

    #[test]
    fn should_accept_negative_price() {
        assert!(Alcohol::builder().name("Refund").price(-3.5).build().is_ok());
    }

    #[test]
    fn should_serialize_null_description() {
        let alcohol = Alcohol::from_new(
            AlcoholId::new(1),
            Alcohol::builder().name("Gin").price(24.99).build().unwrap(),
        );
        let json = serde_json::to_value(&alcohol).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Gin",
                "description": null,
                "price": 24.99
            })
        );
    }
}
