// SPDX-License-Identifier: Apache-2.0

use recicla_form::{validate_point_form, FormError, SubmittedForm, REQUIRED_FIELDS};
use recicla_model::MaterialTaxonomy;

const SCALARS: [(&str, &str); 9] = [
    ("name", "Ponto A"),
    ("street", "Rua das Flores"),
    ("number", "100"),
    ("neighborhood", "Centro"),
    ("city", "Curitiba"),
    ("state", "PR"),
    ("postal_code", "80000-000"),
    ("hours_start", "08:00"),
    ("hours_end", "18:00"),
];

fn form_where(keep: impl Fn(&str) -> bool) -> SubmittedForm {
    let mut form = SubmittedForm::new();
    for (name, value) in SCALARS {
        if keep(name) {
            form.append(name, value);
        }
    }
    if keep("materiais_Papel") {
        form.append("materiais_Papel", "Jornais, revistas e panfletos");
    }
    form
}

fn filled_form() -> SubmittedForm {
    form_where(|_| true)
}

#[test]
fn complete_form_validates() {
    let taxonomy = MaterialTaxonomy::default();
    validate_point_form(&filled_form(), &taxonomy).expect("valid form");
}

#[test]
fn each_missing_required_field_is_reported_by_name() {
    let taxonomy = MaterialTaxonomy::default();
    for field in REQUIRED_FIELDS {
        let err = validate_point_form(&form_where(|name| name != field), &taxonomy)
            .expect_err("missing field must fail");
        assert_eq!(err, FormError::MissingField(field));
    }
}

#[test]
fn empty_value_counts_as_missing() {
    let taxonomy = MaterialTaxonomy::default();
    let mut form = form_where(|name| name != "city");
    form.append("city", "");
    let err = validate_point_form(&form, &taxonomy).expect_err("empty field must fail");
    assert_eq!(err, FormError::MissingField("city"));
}

#[test]
fn missing_fields_win_in_declared_order() {
    let taxonomy = MaterialTaxonomy::default();
    // street and number both absent: street is declared first.
    let form = form_where(|name| name != "street" && name != "number");
    let err = validate_point_form(&form, &taxonomy).expect_err("must fail");
    assert_eq!(err, FormError::MissingField("street"));
}

#[test]
fn no_materials_and_blank_custom_text_fails_with_materials_message() {
    let taxonomy = MaterialTaxonomy::default();

    let no_materials = form_where(|name| !name.starts_with("materiais_"));
    assert_eq!(
        validate_point_form(&no_materials, &taxonomy).expect_err("no materials"),
        FormError::NoMaterials
    );

    let mut blank_custom = form_where(|name| !name.starts_with("materiais_"));
    blank_custom.append("materiais_custom", "   ");
    assert_eq!(
        validate_point_form(&blank_custom, &taxonomy).expect_err("blank custom"),
        FormError::NoMaterials
    );
}

#[test]
fn custom_text_alone_satisfies_the_materials_rule() {
    let taxonomy = MaterialTaxonomy::default();
    let mut form = form_where(|name| !name.starts_with("materiais_"));
    form.append("materiais_custom", "Óleo de cozinha");
    validate_point_form(&form, &taxonomy).expect("custom-only form is valid");
}

#[test]
fn malformed_times_fail_with_the_combined_message() {
    let taxonomy = MaterialTaxonomy::default();
    for (start, end) in [("8:00", "18:00"), ("08:00", "24:00"), ("ab:cd", "xy:zw")] {
        let mut form = form_where(|name| name != "hours_start" && name != "hours_end");
        form.append("hours_start", start);
        form.append("hours_end", end);
        assert_eq!(
            validate_point_form(&form, &taxonomy).expect_err("bad time must fail"),
            FormError::InvalidTime
        );
    }
}

#[test]
fn required_fields_beat_the_materials_check() {
    let taxonomy = MaterialTaxonomy::default();
    // Neither postal_code nor any material present: the scalar wins.
    let form = form_where(|name| name != "postal_code" && !name.starts_with("materiais_"));
    assert_eq!(
        validate_point_form(&form, &taxonomy).expect_err("must fail"),
        FormError::MissingField("postal_code")
    );
}
