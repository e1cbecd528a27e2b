// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

/// A user-correctable validation failure. The rendered message is what
/// the form page shows inline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    /// A required scalar field was absent or empty.
    MissingField(&'static str),
    /// No taxonomy checkbox was selected and the custom field was blank.
    NoMaterials,
    /// One or both time fields failed to parse; intentionally does not
    /// say which.
    InvalidTime,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "O campo {name} é obrigatório."),
            Self::NoMaterials => f.write_str("Selecione ao menos um tipo de material aceito."),
            Self::InvalidTime => f.write_str("Horários devem estar no formato HH:MM."),
        }
    }
}

impl std::error::Error for FormError {}
