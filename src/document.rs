//! Reads a page template and pulls out the elements the site script writes to.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::contact::ContactForm;
use crate::sink::Element;

macro_rules! selector {
    ($name:ident, $query:expr) => {
        static $name: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
    };
}

selector!(BODY, "body");
selector!(YEAR, "#year");
selector!(CLOCK, "#clock");
selector!(HAMBURGER, ".hamburger");
selector!(PRIMARY_NAV, "#primary-nav");
selector!(NAV_LINKS, "#primary-nav a");
selector!(VIDEO_GRID, "#video-grid");
selector!(ATTRACTIONS_GRID, "#attractions-grid");
selector!(EVENTS_LIST, "#events-list");
selector!(UPCOMING_HIGHLIGHT, "#upcoming-highlight");
selector!(CULTURE_GRID, "#culture-grid");
selector!(CULTURE_VIDEOS, "#culture-videos");
selector!(WHATSAPP_LINK, "#whatsapp-link");
selector!(NAME_INPUT, "#name");
selector!(EMAIL_INPUT, "#email");
selector!(MESSAGE_INPUT, "#message");

/// Every element a page can be enhanced through. Absent ones are `None`.
#[derive(Debug, Clone, Default)]
pub struct Targets {
    pub year: Option<Element>,
    pub clock: Option<Element>,
    pub hamburger: Option<Element>,
    pub primary_nav: Option<Element>,
    pub video_grid: Option<Element>,
    pub attractions_grid: Option<Element>,
    pub events_list: Option<Element>,
    pub upcoming_highlight: Option<Element>,
    pub culture_grid: Option<Element>,
    pub culture_videos: Option<Element>,
    pub whatsapp_link: Option<Element>,
}

impl Targets {
    /// Elements in page order, skipping the missing ones.
    pub fn present(&self) -> impl Iterator<Item = &Element> {
        [
            &self.hamburger,
            &self.primary_nav,
            &self.video_grid,
            &self.attractions_grid,
            &self.upcoming_highlight,
            &self.events_list,
            &self.culture_grid,
            &self.culture_videos,
            &self.whatsapp_link,
            &self.year,
            &self.clock,
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Value of `<body data-page="…">`.
    pub page: Option<String>,
    pub targets: Targets,
    pub nav_links: usize,
    /// Contact form as it was filled in the template.
    pub form: ContactForm,
}

impl Document {
    pub fn parse<S: AsRef<str>>(html: S) -> Self {
        let html = Html::parse_document(html.as_ref());

        let page = html
            .select(&BODY)
            .next()
            .and_then(|body| body.value().attr("data-page"))
            .map(str::to_string);

        let targets = Targets {
            year: find(&html, &YEAR),
            clock: find(&html, &CLOCK),
            hamburger: find(&html, &HAMBURGER),
            primary_nav: find(&html, &PRIMARY_NAV),
            video_grid: find(&html, &VIDEO_GRID),
            attractions_grid: find(&html, &ATTRACTIONS_GRID),
            events_list: find(&html, &EVENTS_LIST),
            upcoming_highlight: find(&html, &UPCOMING_HIGHLIGHT),
            culture_grid: find(&html, &CULTURE_GRID),
            culture_videos: find(&html, &CULTURE_VIDEOS),
            whatsapp_link: find(&html, &WHATSAPP_LINK),
        };

        let form = ContactForm {
            name: field_value(&html, &NAME_INPUT),
            email: field_value(&html, &EMAIL_INPUT),
            message: field_value(&html, &MESSAGE_INPUT),
        };

        Self {
            page,
            targets,
            nav_links: html.select(&NAV_LINKS).count(),
            form,
        }
    }
}

fn find(html: &Html, selector: &Selector) -> Option<Element> {
    html.select(selector).next().map(to_element)
}

fn to_element(node: ElementRef) -> Element {
    let value = node.value();
    let mut element = Element::new(value.name());

    if let Some(id) = value.id() {
        element = element.with_id(id);
    }

    for class in value.classes() {
        element.add_class(class);
    }

    for (name, attr) in value.attrs() {
        if name != "id" && name != "class" {
            element.set_attribute(name, attr);
        }
    }

    element.set_inner_html(node.inner_html());
    element
}

/// `value` of an input, or the text of a textarea.
fn field_value(html: &Html, selector: &Selector) -> String {
    let Some(node) = html.select(selector).next() else {
        return String::new();
    };

    match node.value().attr("value") {
        Some(value) => value.to_string(),
        None if node.value().name() == "textarea" => node.text().collect(),
        None => String::new(),
    }
}
