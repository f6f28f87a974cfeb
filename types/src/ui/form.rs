//! Contact form fields and submit button.

/// Floating-label state of a single input or textarea.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    value: String,
    focused: bool,
}

impl FieldState {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            focused: false,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn input(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the field carries the `has-value` class.
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Named form fields in document order.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: Vec<(String, FieldState)>,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field's value, adding the field if it does not exist yet.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.field_mut(&name) {
            Some(field) => field.input(value),
            None => self.fields.push((name, FieldState::with_value(value))),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, state)| state)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|(field, _)| field == name)
            .map(|(_, state)| state)
    }

    /// Field name/value pairs as they would be posted.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, state)| (name.as_str(), state.value()))
    }

    /// Clear every value (and with it every `has-value` marker).
    pub fn reset(&mut self) {
        for (_, state) in &mut self.fields {
            state.input(String::new());
        }
    }
}

/// Submit button while a request is in flight.
#[derive(Debug, Clone)]
pub struct SubmitButton {
    label: String,
    original_label: String,
    disabled: bool,
}

impl SubmitButton {
    pub const SENDING_LABEL: &'static str = "Sending...";

    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original_label: label.clone(),
            label,
            disabled: false,
        }
    }

    pub fn begin_sending(&mut self) {
        self.disabled = true;
        self.label = Self::SENDING_LABEL.to_string();
    }

    pub fn restore(&mut self) {
        self.disabled = false;
        self.label.clone_from(&self.original_label);
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Button opacity: dimmed while sending.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        if self.disabled { 0.7 } else { 1.0 }
    }
}
