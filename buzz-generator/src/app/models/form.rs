//! Form focus model

/// Focusable element of the form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ApiKey,
    Announcement,
    Language,
    Generate,
    Results,
    History,
}

impl FormField {
    pub const ORDER: [FormField; 6] = [
        FormField::ApiKey,
        FormField::Announcement,
        FormField::Language,
        FormField::Generate,
        FormField::Results,
        FormField::History,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether typed characters go into this field
    pub fn accepts_text(self) -> bool {
        matches!(self, FormField::ApiKey | FormField::Announcement)
    }
}
