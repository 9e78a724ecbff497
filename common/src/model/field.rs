use serde::Serialize;

/// One numeric input a formula needs.
///
/// Descriptors are compile-time constants owned by the registry. The `id` is
/// the key sent to the calculation service, so it must match what the service
/// reads; it is unique inside one schema but may repeat across schemas
/// (`NIR` is shared by most vegetation indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub id: &'static str,
    /// Human-readable label, may carry the unit (`[°C]`).
    pub label: &'static str,
    /// Hint text shown inside the empty input. Never used as a default value.
    pub placeholder: &'static str,
}

impl FieldDescriptor {
    pub const fn new(id: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            label,
            placeholder,
        }
    }
}
