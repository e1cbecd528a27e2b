// SPDX-License-Identifier: Apache-2.0

//! Server-rendered pages, built as HTML strings. Dynamic content is
//! escaped; layout is shared through [`page`].

use crate::flash::{Flash, FlashKind};
use recicla_form::{material_field_name, SubmittedForm, CUSTOM_FIELD};
use recicla_model::{CollectionPoint, MaterialTaxonomy, CUSTOM_CATEGORY};

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, messages: &str, body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
<title>{title} - Recicla</title></head><body>\
<nav><a href=\"/\">Início</a> | <a href=\"/pontos\">Pontos de coleta</a> | \
<a href=\"/cadastro\">Cadastrar ponto</a> | <a href=\"/educacao\">Educação ambiental</a> | \
<a href=\"/sobre\">Sobre</a></nav>\
{messages}\
<main><h1>{heading}</h1>{body}</main>\
</body></html>",
        title = escape_html(title),
        heading = escape_html(title),
    )
}

fn flash_banner(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => {
            let class = match flash.kind {
                FlashKind::Success => "flash flash-success",
                FlashKind::Error => "flash flash-error",
            };
            format!(
                "<p class=\"{class}\">{}</p>",
                escape_html(&flash.message)
            )
        }
        None => String::new(),
    }
}

fn success_banner(success: Option<&str>) -> String {
    match success {
        Some(message) => format!(
            "<p class=\"flash flash-success\">{}</p>",
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            "<p class=\"flash flash-error\">{}</p>",
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn point_item(point: &CollectionPoint, with_actions: bool) -> String {
    let draft = &point.draft;
    let mut materials = String::new();
    for (category, items) in draft.materials.iter() {
        materials.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>",
            escape_html(category),
            escape_html(&items.join(", "))
        ));
    }
    if materials.is_empty() {
        materials.push_str("<li>Nenhum material informado.</li>");
    }
    let complement = if draft.complement.is_empty() {
        String::new()
    } else {
        format!(" - {}", escape_html(&draft.complement))
    };
    let actions = if with_actions {
        format!(
            "<p><a href=\"/editar/{id}\">Editar</a> \
<form method=\"post\" action=\"/delete/{id}\" style=\"display:inline\">\
<button type=\"submit\">Excluir</button></form></p>",
            id = point.id
        )
    } else {
        String::new()
    };
    format!(
        "<li class=\"ponto\"><h2>{name}</h2>\
<p>{street}, {number}{complement} - {neighborhood}, {city}/{state} - CEP {postal_code}</p>\
<p>Horário: {start} às {end}</p>\
<ul>{materials}</ul>{actions}</li>",
        name = escape_html(&draft.name),
        street = escape_html(&draft.street),
        number = escape_html(&draft.number),
        neighborhood = escape_html(&draft.neighborhood),
        city = escape_html(&draft.city),
        state = escape_html(&draft.state),
        postal_code = escape_html(&draft.postal_code),
        start = draft.hours_start,
        end = draft.hours_end,
    )
}

fn point_list(points: &[CollectionPoint], with_actions: bool) -> String {
    if points.is_empty() {
        return "<p>Nenhum ponto de coleta cadastrado ainda.</p>".to_string();
    }
    let mut items = String::new();
    for point in points {
        items.push_str(&point_item(point, with_actions));
    }
    format!("<ul class=\"pontos\">{items}</ul>")
}

pub(crate) fn home_page(points: &[CollectionPoint]) -> String {
    page(
        "Pontos de coleta",
        "",
        &point_list(points, false),
    )
}

pub(crate) fn pontos_page(
    points: &[CollectionPoint],
    taxonomy: &MaterialTaxonomy,
    success: Option<&str>,
    flash: Option<&Flash>,
) -> String {
    let messages = format!("{}{}", success_banner(success), flash_banner(flash));
    let body = format!(
        "{list}<section><h2>Cadastrar novo ponto</h2>{form}</section>",
        list = point_list(points, true),
        form = point_form(&SubmittedForm::new(), taxonomy, "/cadastro"),
    );
    page("Pontos de coleta", &messages, &body)
}

fn text_input(label: &str, name: &str, value: &str, required: bool) -> String {
    format!(
        "<p><label for=\"{name}\">{label}</label><br>\
<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{required}></p>",
        value = escape_html(value),
        required = if required { " required" } else { "" },
    )
}

fn point_form(form: &SubmittedForm, taxonomy: &MaterialTaxonomy, action: &str) -> String {
    let value = |name: &str| form.value(name).unwrap_or("");

    let mut checkboxes = String::new();
    for category in taxonomy.categories() {
        let field = material_field_name(&category.name);
        let selected = form.values(&field);
        let mut options = String::new();
        for subtype in &category.subtypes {
            let checked = if selected.iter().any(|s| s == subtype) {
                " checked"
            } else {
                ""
            };
            options.push_str(&format!(
                "<label><input type=\"checkbox\" name=\"{field}\" value=\"{subtype}\"{checked}> {label}</label><br>",
                field = escape_html(&field),
                subtype = escape_html(subtype),
                label = escape_html(subtype),
            ));
        }
        checkboxes.push_str(&format!(
            "<fieldset><legend>{}</legend>{options}</fieldset>",
            escape_html(&category.name)
        ));
    }

    format!(
        "<form method=\"post\" action=\"{action}\">\
{name}{street}{number}{complement}{neighborhood}{city}{state}{postal_code}\
<h3>Materiais aceitos</h3>{checkboxes}\
<p><label for=\"{custom}\">Outros materiais (separe por vírgula)</label><br>\
<input type=\"text\" id=\"{custom}\" name=\"{custom}\" value=\"{custom_value}\"></p>\
{hours_start}{hours_end}\
<p><button type=\"submit\">Salvar</button></p>\
</form>",
        name = text_input("Nome", "name", value("name"), true),
        street = text_input("Rua", "street", value("street"), true),
        number = text_input("Número", "number", value("number"), true),
        complement = text_input("Complemento", "complement", value("complement"), false),
        neighborhood = text_input("Bairro", "neighborhood", value("neighborhood"), true),
        city = text_input("Cidade", "city", value("city"), true),
        state = text_input("Estado", "state", value("state"), true),
        postal_code = text_input("CEP", "postal_code", value("postal_code"), true),
        custom = CUSTOM_FIELD,
        custom_value = escape_html(value(CUSTOM_FIELD)),
        hours_start = text_input(
            "Horário de abertura (HH:MM)",
            "hours_start",
            value("hours_start"),
            true
        ),
        hours_end = text_input(
            "Horário de fechamento (HH:MM)",
            "hours_end",
            value("hours_end"),
            true
        ),
    )
}

pub(crate) fn point_form_page(
    title: &str,
    action: &str,
    form: &SubmittedForm,
    taxonomy: &MaterialTaxonomy,
    error: Option<&str>,
) -> String {
    page(title, &error_banner(error), &point_form(form, taxonomy, action))
}

/// Rebuilds the submitted-form view of a stored point so the edit form
/// renders through the same path as a failed submission.
pub(crate) fn form_from_point(point: &CollectionPoint) -> SubmittedForm {
    let draft = &point.draft;
    let mut form = SubmittedForm::new();
    form.append("name", draft.name.clone());
    form.append("street", draft.street.clone());
    form.append("number", draft.number.clone());
    form.append("complement", draft.complement.clone());
    form.append("neighborhood", draft.neighborhood.clone());
    form.append("city", draft.city.clone());
    form.append("state", draft.state.clone());
    form.append("postal_code", draft.postal_code.clone());
    form.append("hours_start", draft.hours_start.canonical_string());
    form.append("hours_end", draft.hours_end.canonical_string());
    for (category, items) in draft.materials.iter() {
        if category == CUSTOM_CATEGORY {
            form.append(CUSTOM_FIELD, items.join(", "));
        } else {
            let field = material_field_name(category);
            for item in items {
                form.append(field.clone(), item.clone());
            }
        }
    }
    form
}

pub(crate) fn educacao_page() -> String {
    page(
        "Educação ambiental",
        "",
        "<p>Separar o lixo corretamente é o primeiro passo para a reciclagem \
funcionar. Lave as embalagens antes de descartar, mantenha papéis secos e \
nunca misture resíduos orgânicos com recicláveis.</p>\
<p>Vidro, papel, plástico e metal podem ser reaproveitados quase que \
indefinidamente. Eletrônicos e pilhas exigem descarte especial: procure um \
ponto de coleta que aceite esses materiais.</p>\
<p>Na dúvida, consulte a lista de pontos de coleta da sua região e confira \
quais materiais cada um aceita.</p>",
    )
}

pub(crate) fn sobre_page() -> String {
    page(
        "Sobre",
        "",
        "<p>O Recicla reúne, em um só lugar, os pontos de coleta de materiais \
recicláveis da cidade: endereço, horários de funcionamento e os materiais \
que cada ponto aceita.</p>\
<p>O cadastro é aberto: qualquer pessoa pode registrar um novo ponto ou \
atualizar as informações de um ponto existente.</p>",
    )
}

pub(crate) fn error_page() -> String {
    page(
        "Erro interno",
        "",
        "<p>Algo deu errado ao processar sua solicitação. Tente novamente em \
instantes.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use recicla_model::{Materials, PointDraft, PointId, TimeOfDay};

    fn sample_point() -> CollectionPoint {
        let mut materials = Materials::new();
        materials.push("Vidro", vec!["Garrafa".to_string(), "Potes".to_string()]);
        materials.push(CUSTOM_CATEGORY, vec!["Óleo de cozinha".to_string()]);
        CollectionPoint::new(
            PointId::new(7),
            PointDraft {
                name: "Ponto <Центр>".to_string(),
                street: "Rua das Flores".to_string(),
                number: "100".to_string(),
                complement: String::new(),
                neighborhood: "Centro".to_string(),
                city: "Curitiba".to_string(),
                state: "PR".to_string(),
                postal_code: "80000-000".to_string(),
                materials,
                hours_start: TimeOfDay::parse("08:00").expect("start"),
                hours_end: TimeOfDay::parse("18:00").expect("end"),
            },
        )
    }

    #[test]
    fn listing_escapes_user_content() {
        let html = home_page(&[sample_point()]);
        assert!(html.contains("Ponto &lt;Центр&gt;"));
        assert!(!html.contains("<Центр>"));
    }

    #[test]
    fn form_from_point_round_trips_materials_into_fields() {
        let form = form_from_point(&sample_point());
        assert_eq!(form.values("materiais_Vidro"), ["Garrafa", "Potes"]);
        assert_eq!(form.value(CUSTOM_FIELD), Some("Óleo de cozinha"));
        assert_eq!(form.value("hours_start"), Some("08:00"));
    }

    #[test]
    fn edit_form_preselects_stored_subtypes() {
        let taxonomy = MaterialTaxonomy::default();
        let form = form_from_point(&sample_point());
        let html = point_form_page("Editar ponto", "/editar/7", &form, &taxonomy, None);
        assert!(html.contains("value=\"Garrafa\" checked"));
        assert!(html.contains("value=\"Latas\"> Latas"));
    }

    #[test]
    fn validation_error_is_rendered_inline() {
        let taxonomy = MaterialTaxonomy::default();
        let html = point_form_page(
            "Cadastrar ponto",
            "/cadastro",
            &SubmittedForm::new(),
            &taxonomy,
            Some("O campo name é obrigatório."),
        );
        assert!(html.contains("flash-error"));
        assert!(html.contains("O campo name é obrigatório."));
    }
}
