use serde::{Deserialize, Serialize};

use stockroom_core::{EntityName, ProductId, ValidationError, ValidationResult};

/// A registered product. Identity is the normalized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: EntityName,
}

impl Product {
    /// Validate a create-or-update against the registry's current contents.
    ///
    /// `existing` is the full set of registered products. When `id` names one
    /// of them, this is an update and that record is excluded from the
    /// case-insensitive uniqueness check; otherwise a fresh id is assigned.
    pub fn create_or_update(
        id: Option<ProductId>,
        raw_name: &str,
        existing: &[Product],
    ) -> ValidationResult<Product> {
        let name = EntityName::parse(raw_name, "name")?;

        for other in existing {
            if Some(other.id) == id {
                continue;
            }
            if name.collides_with(&other.name) {
                return Err(ValidationError::duplicate_name("name", name.as_str()));
            }
        }

        Ok(Product {
            id: id.unwrap_or_else(ProductId::new),
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(raw: &str) -> Product {
        Product::create_or_update(None, raw, &[]).unwrap()
    }

    #[test]
    fn create_normalizes_name() {
        let product = registered("shayba");
        assert_eq!(product.name.as_str(), "Shayba");
    }

    #[test]
    fn create_rejects_digits() {
        let err = Product::create_or_update(None, "widget1", &[]).unwrap_err();
        assert_eq!(err, ValidationError::invalid_format("name"));
    }

    #[test]
    fn duplicate_is_case_insensitive() {
        let existing = vec![registered("bolt")];
        let err = Product::create_or_update(None, "BOLT", &existing).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateName { .. }));
    }

    #[test]
    fn update_excludes_own_record_from_uniqueness() {
        let existing = vec![registered("bolt"), registered("nut")];
        let own = existing[0].id;

        // Re-submitting its own name (different case) is allowed.
        let updated = Product::create_or_update(Some(own), "BOLT", &existing).unwrap();
        assert_eq!(updated.id, own);
        assert_eq!(updated.name.as_str(), "Bolt");

        // Renaming onto another record's name is not.
        let err = Product::create_or_update(Some(own), "nut", &existing).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateName { .. }));
    }
}
