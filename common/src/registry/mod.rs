//! Read-only registry mapping a formula id to its input schema.
//!
//! The built-in registry is a `static`: it is fixed at compile time and shared
//! by every controller in the process. Lookups are pure; an empty or unknown id
//! yields `None`, which callers treat as "nothing to render" rather than a
//! fault.

mod formulas;

use crate::model::formula::{FormulaCategory, FormulaSchema};

static BUILTIN: FormulaRegistry = FormulaRegistry::new(formulas::ALL);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaRegistry {
    schemas: &'static [FormulaSchema],
}

impl FormulaRegistry {
    pub const fn new(schemas: &'static [FormulaSchema]) -> Self {
        Self { schemas }
    }

    /// Every formula the calculation service knows about.
    pub fn builtin() -> &'static FormulaRegistry {
        &BUILTIN
    }

    pub fn lookup(&self, formula_id: &str) -> Option<&'static FormulaSchema> {
        self.schemas.iter().find(|schema| schema.id == formula_id)
    }

    pub fn contains(&self, formula_id: &str) -> bool {
        self.lookup(formula_id).is_some()
    }

    /// All schemas in declaration order.
    pub fn schemas(&self) -> impl Iterator<Item = &'static FormulaSchema> {
        self.schemas.iter()
    }

    pub fn by_category(
        &self,
        category: FormulaCategory,
    ) -> impl Iterator<Item = &'static FormulaSchema> {
        self.schemas.iter().filter(move |schema| schema.category == category)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
