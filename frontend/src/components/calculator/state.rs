//! Component state for the calculator.

use common::FormController;

/// Main state container for the `CalculatorComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct CalculatorComponent {
    /// Selected formula, rendered fields with their live values, and the
    /// result panel.
    pub form: FormController,

    /// Set once the first render confirmed every required page element.
    /// While `false`, messages are dropped.
    pub wired: bool,
}

impl CalculatorComponent {
    pub fn new() -> Self {
        Self {
            form: FormController::default(),
            wired: false,
        }
    }
}
