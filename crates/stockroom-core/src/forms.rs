// ── Product and supplier form state ──
//
// Raw text fields as typed by the user, shared by the create screen and
// the edit dialog. `to_request` enforces the only client-side rules:
// required fields are non-empty and numeric fields parse.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::command::{ProductRequest, SupplierRequest};
use crate::error::CoreError;
use crate::model::{Product, Supplier};

fn required<'a>(value: &'a str, label: &str) -> Result<&'a str, CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::validation(format!("{label} is required")))
    } else {
        Ok(value)
    }
}

fn parse_field<T: FromStr>(value: &str, label: &str, expected: &str) -> Result<T, CoreError> {
    required(value, label)?
        .trim()
        .parse()
        .map_err(|_| CoreError::validation(format!("{label} must be {expected}")))
}

// ── Product ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    pub const LABELS: [&'static str; 4] = ["SKU", "Name", "Price", "Stock"];

    /// Pre-fill from a loaded product.
    pub fn from_product(p: &Product) -> Self {
        Self {
            sku: p.sku.clone().unwrap_or_default(),
            name: p.name.clone().unwrap_or_default(),
            price: p
                .price
                .map_or_else(String::new, |d| d.normalize().to_string()),
            stock: p.stock.map_or_else(String::new, |s| s.to_string()),
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.sku),
            1 => Some(&self.name),
            2 => Some(&self.price),
            3 => Some(&self.stock),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.sku),
            1 => Some(&mut self.name),
            2 => Some(&mut self.price),
            3 => Some(&mut self.stock),
            _ => None,
        }
    }

    pub fn to_request(&self) -> Result<ProductRequest, CoreError> {
        Ok(ProductRequest {
            sku: required(&self.sku, "SKU")?.to_owned(),
            name: required(&self.name, "Name")?.to_owned(),
            price: parse_field::<Decimal>(&self.price, "Price", "a number")?,
            stock: parse_field::<i64>(&self.stock, "Stock", "a whole number")?,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ── Supplier ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub name: String,
    pub contact: String,
}

impl SupplierForm {
    pub const LABELS: [&'static str; 2] = ["Name", "Contact"];

    pub fn from_supplier(s: &Supplier) -> Self {
        Self {
            name: s.name.clone().unwrap_or_default(),
            contact: s.contact.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.contact),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.contact),
            _ => None,
        }
    }

    pub fn to_request(&self) -> Result<SupplierRequest, CoreError> {
        Ok(SupplierRequest {
            name: required(&self.name, "Name")?.to_owned(),
            contact: required(&self.contact, "Contact")?.to_owned(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn widget_form() -> ProductForm {
        ProductForm {
            sku: "A1".into(),
            name: "Widget".into(),
            price: "9.99".into(),
            stock: "10".into(),
        }
    }

    #[test]
    fn product_form_parses_numbers() {
        let req = widget_form().to_request().unwrap();
        assert_eq!(
            req,
            ProductRequest {
                sku: "A1".into(),
                name: "Widget".into(),
                price: dec!(9.99),
                stock: 10,
            }
        );
    }

    #[test]
    fn product_form_requires_every_field() {
        for index in 0..4 {
            let mut form = widget_form();
            form.field_mut(index).unwrap().clear();
            let err = form.to_request().unwrap_err();
            assert!(
                err.to_string().contains(ProductForm::LABELS[index]),
                "missing {} gave: {err}",
                ProductForm::LABELS[index]
            );
        }
    }

    #[test]
    fn product_form_rejects_non_numeric() {
        let mut form = widget_form();
        form.price = "cheap".into();
        assert!(matches!(
            form.to_request(),
            Err(CoreError::Validation { .. })
        ));

        let mut form = widget_form();
        form.stock = "2.5".into();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn product_form_prefills_from_entity() {
        let form = ProductForm::from_product(&Product {
            id: "p1".into(),
            sku: Some("A1".into()),
            name: None,
            price: Some(dec!(20.00)),
            stock: Some(0),
        });
        assert_eq!(form.sku, "A1");
        assert_eq!(form.name, "");
        assert_eq!(form.price, "20");
        assert_eq!(form.stock, "0");
    }

    #[test]
    fn supplier_form_round_trip() {
        let mut form = SupplierForm::from_supplier(&Supplier {
            id: "s1".into(),
            name: Some("Acme".into()),
            contact: Some("ops@acme.test".into()),
        });
        assert_eq!(form.to_request().unwrap().contact, "ops@acme.test");

        form.clear();
        assert_eq!(form, SupplierForm::default());
        assert!(form.to_request().is_err());
    }
}
