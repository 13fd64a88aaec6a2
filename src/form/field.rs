//! Snapshot of one form control, detached from the DOM.

/// Control kind, from the element's `type` property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Checkbox,
    Radio,
    Hidden,
    Submit,
    SelectOne,
    TextArea,
    Other(String),
}

impl FieldKind {
    pub fn from_type(ty: &str) -> Self {
        match ty {
            "text" => Self::Text,
            "number" => Self::Number,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "hidden" => Self::Hidden,
            "submit" => Self::Submit,
            "select-one" => Self::SelectOne,
            "textarea" => Self::TextArea,
            other => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub checked: bool,
}

impl FieldSnapshot {
    /// Convenience constructor for unchecked controls.
    pub fn new(name: &str, kind: FieldKind, value: &str) -> Self {
        Self {
            id: format!("id_{name}"),
            name: name.to_owned(),
            kind,
            value: value.to_owned(),
            checked: false,
        }
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}
