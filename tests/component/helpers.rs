use contact_form::form::{ContactForm, Field, FormEvent};
use contact_form::render::render;
use contact_form::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;

// Initialized at most once; output only shows up when TEST_LOG is set.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Drives the component the way the original behavioral suite does:
/// inputs are found through their accessible label in the rendered
/// markup, typing goes one keystroke at a time, and assertions run
/// against the markup by case-insensitive substring.
pub struct TestForm {
    form: ContactForm,
}

impl TestForm {
    pub fn spawn() -> Self {
        Lazy::force(&TRACING);
        Self {
            form: ContactForm::new(),
        }
    }

    pub fn html(&self) -> String {
        render(&self.form)
    }

    /// Appends `text` to the field one keystroke at a time, each one a
    /// separate change event, like typing into a controlled input.
    pub fn type_into(&mut self, label: &str, text: &str) {
        let field = self.field_by_label(label);
        let mut value = self.form.state().value(field).to_string();
        for ch in text.chars() {
            value.push(ch);
            self.form.handle(FormEvent::InputChanged {
                field,
                value: value.clone(),
            });
        }
    }

    pub fn click_submit(&mut self) {
        assert!(
            contains_ci(&self.html(), r#"<button type="submit""#),
            "no submit button in the rendered markup"
        );
        self.form.handle(FormEvent::SubmitRequested);
    }

    /// Resolves an input through its `<label for=…>` association.
    fn field_by_label(&self, label: &str) -> Field {
        let wanted = label.to_lowercase();
        let html = self.html();
        let mut rest = html.as_str();
        while let Some(start) = rest.find(r#"<label for=""#) {
            let tail = &rest[start + r#"<label for=""#.len()..];
            let id_end = tail.find('"').expect("unterminated `for` attribute");
            let id = &tail[..id_end];
            let text_start = tail.find('>').expect("malformed label tag") + 1;
            let text_end = tail.find("</label>").expect("unterminated label");
            if tail[text_start..text_end].to_lowercase().contains(&wanted) {
                return Field::from_input_id(id)
                    .unwrap_or_else(|| panic!("label `{label}` points at unknown input `{id}`"));
            }
            rest = &tail[text_end..];
        }
        panic!("no input labelled `{label}`");
    }
}

pub fn contains_ci(html: &str, needle: &str) -> bool {
    html.to_lowercase().contains(&needle.to_lowercase())
}

pub fn count_ci(html: &str, needle: &str) -> usize {
    html.to_lowercase().matches(&needle.to_lowercase()).count()
}
