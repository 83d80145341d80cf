//! Markup fragments for the cards and list items the pages are built from.
//! All interpolated values are escaped.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

pub fn video_card(url: &str, title: &str) -> String {
    format!(
        concat!(
            r#"<div class="card">"#,
            r#"<div class="video">"#,
            r#"<iframe src="{url}" title="{title_attr}" allow="{allow}" allowfullscreen loading="lazy"></iframe>"#,
            "</div>",
            r#"<h3 style="margin-top:10px">{title}</h3>"#,
            "</div>"
        ),
        url = attr(url),
        title_attr = attr(title),
        allow = VIDEO_ALLOW,
        title = text(title),
    )
}

/// Image card shared by the attractions and culture grids.
pub fn image_card(image: &str, heading: &str, body: &str) -> String {
    format!(
        concat!(
            r#"<article class="card">"#,
            r#"<img src="{image}" alt="{alt}">"#,
            r#"<h3 style="margin:10px 0 6px">{heading}</h3>"#,
            "<p>{body}</p>",
            "</article>"
        ),
        image = attr(image),
        alt = attr(heading),
        heading = text(heading),
        body = text(body),
    )
}

pub fn event_highlight(title: &str, date: &str, description: &str) -> String {
    format!(
        concat!(
            "<h3>Next Up: {title}</h3>",
            r#"<p class="date">{date}</p>"#,
            "<p>{description}</p>"
        ),
        title = text(title),
        date = text(date),
        description = text(description),
    )
}

pub fn event_item(title: &str, date: &str, description: &str) -> String {
    format!(
        concat!(
            r#"<div class="list-item">"#,
            r#"<div class="date">{date}</div>"#,
            r#"<div style="font-weight:600; margin: 2px 0">{title}</div>"#,
            "<div>{description}</div>",
            "</div>"
        ),
        title = text(title),
        date = text(date),
        description = text(description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_card_escapes_title() {
        let card = video_card("https://www.youtube.com/embed/x", "Hot \"Springs\" & <more>");
        assert!(card.contains(r#"title="Hot &quot;Springs&quot; &amp; "#));
        assert!(card.contains("Hot \"Springs\" &amp; &lt;more&gt;</h3>"));
    }

    #[test]
    fn image_card_layout() {
        let card = image_card("img/dam.jpg", "Warmbaths", "Mineral springs");
        assert_eq!(
            card,
            r#"<article class="card"><img src="img/dam.jpg" alt="Warmbaths"><h3 style="margin:10px 0 6px">Warmbaths</h3><p>Mineral springs</p></article>"#
        );
    }

    #[test]
    fn highlight_has_next_up_heading() {
        let html = event_highlight("Market Day", "January 5, 2025", "Crafts");
        assert!(html.starts_with("<h3>Next Up: Market Day</h3>"));
        assert!(html.contains(r#"<p class="date">January 5, 2025</p>"#));
    }
}
