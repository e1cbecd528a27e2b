// SPDX-License-Identifier: Apache-2.0

use crate::fields::SubmittedForm;
use recicla_model::{MaterialTaxonomy, Materials, CUSTOM_CATEGORY};

/// Prefix shared by every material checkbox group.
pub const MATERIAL_FIELD_PREFIX: &str = "materiais_";

/// Free-text field for materials outside the taxonomy, comma-separated.
pub const CUSTOM_FIELD: &str = "materiais_custom";

#[must_use]
pub fn material_field_name(category: &str) -> String {
    format!("{MATERIAL_FIELD_PREFIX}{category}")
}

/// Folds the submitted material fields into the structured mapping:
/// taxonomy categories in taxonomy order with selections in submission
/// order, then `Custom` from the comma-split free-text field. Categories
/// without selections are absent, never empty.
#[must_use]
pub fn extract_materials(form: &SubmittedForm, taxonomy: &MaterialTaxonomy) -> Materials {
    let mut materials = Materials::new();
    for category in taxonomy.categories() {
        let selected = form.values(&material_field_name(&category.name));
        materials.push(category.name.clone(), selected.to_vec());
    }
    let custom: Vec<String> = form
        .value(CUSTOM_FIELD)
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();
    materials.push(CUSTOM_CATEGORY, custom);
    materials
}
