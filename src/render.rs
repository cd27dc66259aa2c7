use std::fmt::Write as _;

use htmlescape::{encode_attribute, encode_minimal};

use crate::form::{ContactForm, Field};

/// Pure function of the component state; callers invoke it after every
/// handled event to obtain the current markup.
pub fn render(form: &ContactForm) -> String {
    let mut fields_html = String::new();
    for field in Field::ALL {
        let id = field.input_id();
        let label = encode_minimal(field.label());
        writeln!(fields_html, r#"<label for="{id}">{label}</label>"#).unwrap();
        match field {
            Field::Message => writeln!(
                fields_html,
                r#"<textarea id="{id}" name="{name}">{value}</textarea>"#,
                name = field.name(),
                value = encode_minimal(form.state().value(field)),
            )
            .unwrap(),
            _ => writeln!(
                fields_html,
                r#"<input type="text" id="{id}" name="{name}" value="{value}">"#,
                name = field.name(),
                value = encode_attribute(form.state().value(field)),
            )
            .unwrap(),
        }
        if let Some(error) = form.errors().get(field) {
            writeln!(fields_html, "<p>{}</p>", encode_minimal(&error.to_string())).unwrap();
        }
    }

    let mut summary_html = String::new();
    if let Some(submission) = form.submitted() {
        writeln!(summary_html, "<div>").unwrap();
        writeln!(summary_html, "<p>You submitted:</p>").unwrap();
        writeln!(
            summary_html,
            "<p>First Name: {}</p>",
            encode_minimal(submission.first_name.as_ref())
        )
        .unwrap();
        writeln!(
            summary_html,
            "<p>Last Name: {}</p>",
            encode_minimal(submission.last_name.as_ref())
        )
        .unwrap();
        writeln!(
            summary_html,
            "<p>Email: {}</p>",
            encode_minimal(submission.email.as_ref())
        )
        .unwrap();
        if let Some(message) = &submission.message {
            writeln!(summary_html, "<p>Message: {}</p>", encode_minimal(message)).unwrap();
        }
        writeln!(summary_html, "</div>").unwrap();
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8">
        <title>Contact Form</title>
    </head>
    <body>
        <h2>Contact Form</h2>
        <form>
{fields_html}
<button type="submit">Submit</button>
        </form>
{summary_html}
    </body>
</html>"#
    )
}
