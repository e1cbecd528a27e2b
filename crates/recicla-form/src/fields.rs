// SPDX-License-Identifier: Apache-2.0

/// An ordered multi-value view of a submitted form.
///
/// Checkbox groups repeat the same field name, so a name maps to every
/// value it carried, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedForm {
    entries: Vec<(String, Vec<String>)>,
}

impl SubmittedForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::new();
        for (name, value) in form_urlencoded::parse(body) {
            form.append(name.into_owned(), value.into_owned());
        }
        form
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some((_, values)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            values.push(value);
        } else {
            self.entries.push((name, vec![value]));
        }
    }

    /// First value submitted under `name`, if any.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// Every value submitted under `name`, in submission order.
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map_or(&[], |(_, values)| values.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urlencoded_decode_groups_repeated_names_in_order() {
        let form = SubmittedForm::from_urlencoded(
            b"name=Ponto+A&materiais_Vidro=Garrafa&materiais_Vidro=Potes&city=S%C3%A3o+Paulo",
        );
        assert_eq!(form.value("name"), Some("Ponto A"));
        assert_eq!(form.values("materiais_Vidro"), ["Garrafa", "Potes"]);
        assert_eq!(form.value("city"), Some("São Paulo"));
        assert_eq!(form.value("missing"), None);
        assert!(form.values("missing").is_empty());
    }

    #[test]
    fn percent_escapes_round_trip_utf8() {
        let form = SubmittedForm::from_urlencoded(
            "materiais_custom=%C3%93leo+de+cozinha%2C+Pilhas".as_bytes(),
        );
        assert_eq!(form.value("materiais_custom"), Some("Óleo de cozinha, Pilhas"));
    }
}
