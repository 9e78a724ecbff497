//! Formula schemas: the ordered list of inputs each formula requires.

use serde::Serialize;

use super::field::FieldDescriptor;

/// Family a formula belongs to. Used to group options in the selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormulaCategory {
    Evapotranspiration,
    GrowingDegreeDays,
    ChillUnits,
    VegetationIndex,
}

impl FormulaCategory {
    pub const ALL: [FormulaCategory; 4] = [
        FormulaCategory::Evapotranspiration,
        FormulaCategory::GrowingDegreeDays,
        FormulaCategory::ChillUnits,
        FormulaCategory::VegetationIndex,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FormulaCategory::Evapotranspiration => "Evapotranspiration (ET)",
            FormulaCategory::GrowingDegreeDays => "Growing Degree Days (GDD)",
            FormulaCategory::ChillUnits => "Chill Units",
            FormulaCategory::VegetationIndex => "Vegetation Indices",
        }
    }
}

/// Input schema of a single formula.
///
/// `fields` is in display order; the form renders and submits in exactly this
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaSchema {
    pub id: &'static str,
    pub name: &'static str,
    pub category: FormulaCategory,
    pub fields: &'static [FieldDescriptor],
}

impl FormulaSchema {
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: FormulaSchema = FormulaSchema {
        id: "rvi",
        name: "RVI",
        category: FormulaCategory::VegetationIndex,
        fields: &[
            FieldDescriptor::new("NIR", "Near-Infrared (NIR)", "Reflectance"),
            FieldDescriptor::new("Red", "Red Band", "Reflectance"),
        ],
    };

    #[test]
    fn field_ids_keep_display_order() {
        assert_eq!(SCHEMA.field_ids().collect::<Vec<_>>(), vec!["NIR", "Red"]);
    }

    #[test]
    fn field_lookup_by_id() {
        assert_eq!(SCHEMA.field("Red").map(|f| f.label), Some("Red Band"));
        assert!(SCHEMA.field("Blue").is_none());
    }

    #[test]
    fn every_category_has_a_title() {
        for category in FormulaCategory::ALL {
            assert!(!category.title().is_empty());
        }
    }
}
