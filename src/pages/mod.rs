//! Page routing by `<body data-page>` and the renderers behind it.

pub mod attractions;
pub mod culture;
pub mod events;
pub mod home;

use chrono::{DateTime, FixedOffset};
use log::{error, info};

use crate::contact::{ContactLink, Field, DEFAULT_PHONE};
use crate::date::DateLocale;
use crate::document::Document;
use crate::error::Result;
use crate::nav::MobileNav;
use crate::source::Source;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Attractions,
    Events,
    Culture,
    Contact,
}

impl Page {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "home" => Some(Page::Home),
            "attractions" => Some(Page::Attractions),
            "events" => Some(Page::Events),
            "culture" => Some(Page::Culture),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }
}

/// User interaction replayed after the page has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    NavButton,
    NavLink,
    Input(Field, String),
}

pub struct Site {
    pub source: Source,
    pub locale: DateLocale,
    pub phone: String,
}

impl Site {
    pub fn new(source: Source, locale: DateLocale) -> Self {
        Self {
            source,
            locale,
            phone: DEFAULT_PHONE.to_string(),
        }
    }

    /// Runs the page-load sequence, then replays `interactions`.
    /// Render failures are logged and leave the page's containers as they were.
    pub async fn load(
        &self,
        doc: &mut Document,
        now: &DateTime<FixedOffset>,
        interactions: &[UserEvent],
    ) {
        let targets = &mut doc.targets;

        if let Some(mut menu) =
            MobileNav::new(targets.hamburger.as_mut(), targets.primary_nav.as_mut())
        {
            for event in interactions {
                match event {
                    UserEvent::NavButton => menu.click_button(),
                    UserEvent::NavLink if doc.nav_links > 0 => menu.click_link(),
                    _ => {}
                }
            }
        }

        let Some(page) = doc.page.as_deref().and_then(Page::from_marker) else {
            return;
        };
        info!("Rendering {page:?} page");

        if let Err(err) = self.render(page, doc, now, interactions).await {
            error!("{err}");
        }
    }

    async fn render(
        &self,
        page: Page,
        doc: &mut Document,
        now: &DateTime<FixedOffset>,
        interactions: &[UserEvent],
    ) -> Result<()> {
        let targets = &mut doc.targets;

        match page {
            Page::Home => home::render(&self.source, targets.video_grid.as_mut()).await,
            Page::Attractions => {
                attractions::render(&self.source, targets.attractions_grid.as_mut()).await
            }
            Page::Events => {
                events::render(
                    &self.source,
                    targets.events_list.as_mut(),
                    targets.upcoming_highlight.as_mut(),
                    now,
                    &self.locale,
                )
                .await
            }
            Page::Culture => {
                culture::render(
                    &self.source,
                    targets.culture_grid.as_mut(),
                    targets.culture_videos.as_mut(),
                )
                .await
            }
            Page::Contact => {
                let Some(link) = targets.whatsapp_link.as_mut() else {
                    return Ok(());
                };

                let mut bound = ContactLink::bind(link, doc.form.clone(), &self.phone);
                for event in interactions {
                    if let UserEvent::Input(field, value) = event {
                        bound.on_input(*field, value);
                    }
                }
                doc.form = bound.form().clone();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use once_cell::sync::Lazy;
    use scraper::{Html, Selector};
    use tempfile::TempDir;

    use super::*;
    use crate::sink::Element;

    macro_rules! selector {
        ($name:ident, $query:expr) => {
            static $name: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        };
    }

    selector!(IFRAME, "div.card > div.video > iframe");
    selector!(CARD_HEADING, "article.card > h3");
    selector!(LIST_ITEM, "div.list-item");

    const VIDEOS_JSON: &str = r#"[
        {"url":"https://www.youtube.com/embed/a","title":"Hot Springs"},
        {"url":"https://www.youtube.com/embed/b","title":"Bushveld"},
        {"url":"https://www.youtube.com/embed/c","title":"Dam Sunset"}
    ]"#;

    const CULTURE_JSON: &str = r#"[
        {"image":"img/beads.jpg","name":"Beadwork","craft":"Ndebele patterns"},
        {"image":"img/pots.jpg","name":"Pottery","craft":"Clay cooking pots"}
    ]"#;

    const ATTRACTIONS_JSON: &str = r#"[
        {"image":"img/forever.jpg","title":"Forever Resorts","description":"Warm mineral pools"}
    ]"#;

    const EVENTS_JSON: &str = r#"[
        {"title":"Spring Fair","description":"Stalls","date":"2030-09-01"},
        {"title":"Winter Market","description":"Crafts","date":"2020-07-01"}
    ]"#;

    fn data_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    fn site(dir: &Path) -> Site {
        Site::new(Source::Dir(dir.to_path_buf()), DateLocale::default())
    }

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-06-01T12:00:00+02:00").unwrap()
    }

    fn page(marker: &str, body: &str) -> Document {
        Document::parse(format!(
            r#"<html><body data-page="{marker}">
                <button class="hamburger" aria-expanded="false"></button>
                <nav id="primary-nav"><a href="/">Home</a></nav>
                {body}
            </body></html>"#
        ))
    }

    fn fragment(el: &Option<Element>) -> Html {
        Html::parse_fragment(el.as_ref().unwrap().inner_html())
    }

    #[test]
    fn page_markers() {
        assert_eq!(Page::from_marker("events"), Some(Page::Events));
        assert_eq!(Page::from_marker("Events"), None);
        assert_eq!(Page::from_marker("about"), None);
    }

    #[tokio::test]
    async fn home_renders_every_video() {
        let dir = data_dir(&[("videos.json", VIDEOS_JSON)]);
        let mut doc = page("home", r#"<div id="video-grid"></div>"#);

        site(dir.path()).load(&mut doc, &now(), &[]).await;

        let grid = fragment(&doc.targets.video_grid);
        assert_eq!(grid.select(&IFRAME).count(), 3);
        assert!(doc.targets.video_grid.as_ref().unwrap().has_class("fade-in"));
    }

    #[tokio::test]
    async fn attractions_render_cards() {
        let dir = data_dir(&[("attractions.json", ATTRACTIONS_JSON)]);
        let mut doc = page("attractions", r#"<div id="attractions-grid"></div>"#);

        site(dir.path()).load(&mut doc, &now(), &[]).await;

        let grid = fragment(&doc.targets.attractions_grid);
        let headings = grid
            .select(&CARD_HEADING)
            .map(|h| h.inner_html())
            .collect::<Vec<_>>();
        assert_eq!(headings, ["Forever Resorts"]);
    }

    #[tokio::test]
    async fn events_page_highlights_next_event() {
        let dir = data_dir(&[("events.json", EVENTS_JSON)]);
        let mut doc = page(
            "events",
            r#"<div id="upcoming-highlight"></div><div id="events-list"></div>"#,
        );

        site(dir.path()).load(&mut doc, &now(), &[]).await;

        let highlight = doc.targets.upcoming_highlight.as_ref().unwrap();
        assert!(highlight.inner_html().contains("Next Up: Spring Fair"));
        assert!(highlight.inner_html().contains("September 1, 2030"));
        assert_eq!(fragment(&doc.targets.events_list).select(&LIST_ITEM).count(), 2);
    }

    #[tokio::test]
    async fn events_without_date_still_render() {
        let dir = data_dir(&[(
            "events.json",
            r#"[
                {"title":"Fair","description":"Stalls","date":"2030-09-01"},
                {"title":"TBC","description":"Later"}
            ]"#,
        )]);
        let mut doc = page(
            "events",
            r#"<div id="upcoming-highlight"></div><div id="events-list"></div>"#,
        );

        site(dir.path()).load(&mut doc, &now(), &[]).await;

        let highlight = doc.targets.upcoming_highlight.as_ref().unwrap();
        assert!(highlight.inner_html().contains("Next Up: Fair"));

        let list = doc.targets.events_list.as_ref().unwrap();
        assert_eq!(fragment(&doc.targets.events_list).select(&LIST_ITEM).count(), 2);
        assert!(list.inner_html().contains("Invalid Date"));
    }

    #[tokio::test]
    async fn culture_shows_two_videos() {
        let dir = data_dir(&[("culture.json", CULTURE_JSON), ("videos.json", VIDEOS_JSON)]);
        let mut doc = page(
            "culture",
            r#"<div id="culture-grid"></div><div id="culture-videos"></div>"#,
        );

        site(dir.path()).load(&mut doc, &now(), &[]).await;

        assert_eq!(fragment(&doc.targets.culture_grid).select(&CARD_HEADING).count(), 2);
        let videos = fragment(&doc.targets.culture_videos);
        let titles = videos
            .select(&IFRAME)
            .filter_map(|f| f.value().attr("title").map(str::to_string))
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Hot Springs", "Bushveld"]);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_page_untouched() {
        let dir = data_dir(&[("culture.json", CULTURE_JSON)]);
        let mut doc = page(
            "culture",
            r#"<div id="culture-grid">Loading</div><div id="culture-videos"></div>"#,
        );
        let before = doc.targets.clone();

        site(dir.path()).load(&mut doc, &now(), &[]).await;

        assert_eq!(doc.targets.culture_grid, before.culture_grid);
        assert_eq!(doc.targets.culture_videos, before.culture_videos);
    }

    #[tokio::test]
    async fn missing_container_skips_fetch() {
        // no events.json on disk, so a fetch would log an error; the page just has no list
        let dir = data_dir(&[]);
        let mut doc = page("events", r#"<div id="upcoming-highlight"></div>"#);

        site(dir.path()).load(&mut doc, &now(), &[]).await;
        assert_eq!(doc.targets.upcoming_highlight.as_ref().unwrap().inner_html(), "");
    }

    #[tokio::test]
    async fn contact_link_tracks_inputs() {
        let dir = data_dir(&[]);
        let mut doc = page(
            "contact",
            r##"<input id="name" value="Sipho"><a id="whatsapp-link" href="#">Chat</a>"##,
        );

        let inputs = [UserEvent::Input(Field::Message, "Hi".into())];
        site(dir.path()).load(&mut doc, &now(), &inputs).await;

        let href = doc.targets.whatsapp_link.as_ref().unwrap().attribute("href").unwrap();
        assert!(href.starts_with("https://wa.me/27761363153?text=Hello"));
        assert!(href.ends_with("%0AName%3A%20Sipho%0AMessage%3A%20Hi"));
        assert_eq!(doc.form.message, "Hi");
    }

    #[tokio::test]
    async fn nav_toggles_on_any_page() {
        let dir = data_dir(&[]);
        let mut doc = page("about", "");

        site(dir.path())
            .load(&mut doc, &now(), &[UserEvent::NavButton])
            .await;

        let nav = doc.targets.primary_nav.as_ref().unwrap();
        assert!(nav.has_class("show"));

        site(dir.path())
            .load(&mut doc, &now(), &[UserEvent::NavLink])
            .await;
        assert!(!doc.targets.primary_nav.as_ref().unwrap().has_class("show"));
    }
}
