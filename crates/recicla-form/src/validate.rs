// SPDX-License-Identifier: Apache-2.0

use crate::errors::FormError;
use crate::extract::{extract_materials, material_field_name, CUSTOM_FIELD};
use crate::fields::SubmittedForm;
use recicla_model::{MaterialTaxonomy, PointDraft, TimeOfDay};

/// Scalar fields every submission must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "name",
    "street",
    "number",
    "neighborhood",
    "city",
    "state",
    "postal_code",
    "hours_start",
    "hours_end",
];

/// Validates a submitted point form.
///
/// Check order is fixed: required scalars first (the first absent or
/// empty one wins), then material presence, then the time grammar. The
/// time check reports one combined message no matter which of the two
/// fields failed.
pub fn validate_point_form(
    form: &SubmittedForm,
    taxonomy: &MaterialTaxonomy,
) -> Result<(), FormError> {
    for field in REQUIRED_FIELDS {
        if form.value(field).map_or(true, str::is_empty) {
            return Err(FormError::MissingField(field));
        }
    }

    let any_selected = taxonomy
        .category_names()
        .any(|name| !form.values(&material_field_name(name)).is_empty());
    let custom_present = form
        .value(CUSTOM_FIELD)
        .is_some_and(|text| !text.trim().is_empty());
    if !any_selected && !custom_present {
        return Err(FormError::NoMaterials);
    }

    let start_ok = form
        .value("hours_start")
        .is_some_and(|raw| TimeOfDay::parse(raw).is_ok());
    let end_ok = form
        .value("hours_end")
        .is_some_and(|raw| TimeOfDay::parse(raw).is_ok());
    if !start_ok || !end_ok {
        return Err(FormError::InvalidTime);
    }

    Ok(())
}

/// Validates a submission and folds it into a persistable draft.
pub fn point_draft_from_form(
    form: &SubmittedForm,
    taxonomy: &MaterialTaxonomy,
) -> Result<PointDraft, FormError> {
    validate_point_form(form, taxonomy)?;

    let time = |field: &str| {
        form.value(field)
            .and_then(|raw| TimeOfDay::parse(raw).ok())
            .ok_or(FormError::InvalidTime)
    };
    let hours_start = time("hours_start")?;
    let hours_end = time("hours_end")?;

    let scalar = |field: &str| form.value(field).unwrap_or("").to_string();
    Ok(PointDraft {
        name: scalar("name"),
        street: scalar("street"),
        number: scalar("number"),
        complement: scalar("complement"),
        neighborhood: scalar("neighborhood"),
        city: scalar("city"),
        state: scalar("state"),
        postal_code: scalar("postal_code"),
        materials: extract_materials(form, taxonomy),
        hours_start,
        hours_end,
    })
}
