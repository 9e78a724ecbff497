/// State of the result area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultPanel {
    #[default]
    Hidden,
    Visible { value: String, unit: String },
}

impl ResultPanel {
    pub fn is_hidden(&self) -> bool {
        matches!(self, ResultPanel::Hidden)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            ResultPanel::Visible { value, .. } => Some(value.as_str()),
            ResultPanel::Hidden => None,
        }
    }

    pub fn unit(&self) -> Option<&str> {
        match self {
            ResultPanel::Visible { unit, .. } => Some(unit.as_str()),
            ResultPanel::Hidden => None,
        }
    }
}
