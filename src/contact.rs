//! WhatsApp link pre-filled from the contact form.

use crate::sink::Element;

pub const DEFAULT_PHONE: &str = "27761363153";

const GREETING: [&str; 2] = ["Hello Discover Bela-Bela!", "I would like to know more."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Greeting followed by one `Label: value` line per filled-in field.
    pub fn lines(&self) -> Vec<String> {
        let fields = [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .filter(|field| !self.value(*field).is_empty())
            .map(|field| format!("{}: {}", field.label(), self.value(field)));

        GREETING
            .iter()
            .map(|line| line.to_string())
            .chain(fields)
            .collect()
    }

    pub fn whatsapp_href(&self, phone: &str) -> String {
        format!(
            "https://wa.me/{phone}?text={}",
            urlencoding::encode(&self.lines().join("\n"))
        )
    }
}

/// Keeps the link's `href` in sync with the form.
pub struct ContactLink<'a> {
    link: &'a mut Element,
    form: ContactForm,
    phone: String,
}

impl<'a> ContactLink<'a> {
    pub fn bind(link: &'a mut Element, form: ContactForm, phone: &str) -> Self {
        let mut bound = Self {
            link,
            form,
            phone: phone.to_string(),
        };
        bound.update_href();
        bound
    }

    /// Handles an `input` or `change` event from one of the form fields.
    pub fn on_input(&mut self, field: Field, value: &str) {
        *self.form.value_mut(field) = value.to_string();
        self.update_href();
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    fn update_href(&mut self) {
        self.link
            .set_attribute("href", self.form.whatsapp_href(&self.phone));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_only_greeting() {
        let href = ContactForm::default().whatsapp_href(DEFAULT_PHONE);
        assert_eq!(
            href,
            "https://wa.me/27761363153?text=Hello%20Discover%20Bela-Bela%21%0AI%20would%20like%20to%20know%20more."
        );
    }

    #[test]
    fn filled_fields_are_appended_in_order() {
        let form = ContactForm {
            name: "Thabo".into(),
            email: String::new(),
            message: "Rooms for 2 & a braai?".into(),
        };
        assert_eq!(
            form.lines(),
            [
                "Hello Discover Bela-Bela!",
                "I would like to know more.",
                "Name: Thabo",
                "Message: Rooms for 2 & a braai?",
            ]
        );
        assert!(form
            .whatsapp_href("1")
            .ends_with("%0AName%3A%20Thabo%0AMessage%3A%20Rooms%20for%202%20%26%20a%20braai%3F"));
    }

    #[test]
    fn link_follows_input_events() {
        let mut link = Element::new("a").with_id("whatsapp-link");
        {
            let mut bound = ContactLink::bind(&mut link, ContactForm::default(), DEFAULT_PHONE);
            bound.on_input(Field::Email, "guest@example.org");
            bound.on_input(Field::Name, "Lerato");
            bound.on_input(Field::Name, "");
            assert_eq!(bound.form().email, "guest@example.org");
        }

        let href = link.attribute("href").unwrap();
        assert!(href.ends_with("%0AEmail%3A%20guest%40example.org"));
        assert!(!href.contains("Name"));
    }
}
