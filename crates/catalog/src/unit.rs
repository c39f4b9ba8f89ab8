use serde::{Deserialize, Serialize};

use stockroom_core::{EntityName, UnitId, ValidationError, ValidationResult};

/// A registered unit of measure (e.g. "Kg", "Dona"). Identity is the
/// normalized name; lifecycle matches [`crate::Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub id: UnitId,
    pub name: EntityName,
}

impl UnitOfMeasure {
    /// Validate a create-or-update against the registry's current contents.
    pub fn create_or_update(
        id: Option<UnitId>,
        raw_name: &str,
        existing: &[UnitOfMeasure],
    ) -> ValidationResult<UnitOfMeasure> {
        let name = EntityName::parse(raw_name, "name")?;

        for other in existing {
            if Some(other.id) == id {
                continue;
            }
            if name.collides_with(&other.name) {
                return Err(ValidationError::duplicate_name("name", name.as_str()));
            }
        }

        Ok(UnitOfMeasure {
            id: id.unwrap_or_else(UnitId::new),
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kg_and_uppercase_kg_collide() {
        let existing = vec![UnitOfMeasure::create_or_update(None, "kg", &[]).unwrap()];
        assert_eq!(existing[0].name.as_str(), "Kg");

        let err = UnitOfMeasure::create_or_update(None, "KG", &existing).unwrap_err();
        assert_eq!(err, ValidationError::duplicate_name("name", "Kg"));
    }

    #[test]
    fn kilogram_reads_back_capitalized() {
        let unit = UnitOfMeasure::create_or_update(None, "kilogram", &[]).unwrap();
        assert_eq!(unit.name.as_str(), "Kilogram");
    }

    #[test]
    fn cyrillic_units_are_accepted() {
        let unit = UnitOfMeasure::create_or_update(None, "литр", &[]).unwrap();
        assert_eq!(unit.name.as_str(), "Литр");
    }
}
