//! Event list ordering and the "Next Up" highlight.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

use crate::date::{parse_instant, DateLocale, Instant};
use crate::markup;
use crate::sink::{fade_in, Element};

/// One entry of `events.json`. Missing or `null` fields are tolerated: text
/// fields read as empty and an absent date is the invalid instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub raw: RawEvent,
    pub when: Instant,
}

impl Event {
    fn parse(raw: RawEvent, offset: &FixedOffset) -> Self {
        let when = raw
            .date
            .as_deref()
            .and_then(|date| parse_instant(date, offset));
        Self { raw, when }
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    pub fn description(&self) -> &str {
        &self.raw.description
    }

    fn is_upcoming(&self, now: &DateTime<FixedOffset>) -> bool {
        self.when.is_some_and(|when| when >= *now)
    }
}

/// Valid instants ascending, invalid ones after them and equal to each other.
fn by_instant(a: &Instant, b: &Instant) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    ordered: Vec<Event>,
    highlighted: Option<usize>,
}

impl Schedule {
    /// Sorts `events` by date and picks the first one at or after `now`, falling back
    /// to the earliest. Date strings without an offset are read in `now`'s offset.
    pub fn new(events: Vec<RawEvent>, now: &DateTime<FixedOffset>) -> Self {
        let mut ordered = events
            .into_iter()
            .map(|raw| Event::parse(raw, now.offset()))
            .collect::<Vec<_>>();

        // stable
        ordered.sort_by(|a, b| by_instant(&a.when, &b.when));

        let highlighted = if ordered.is_empty() {
            None
        } else {
            Some(
                ordered
                    .iter()
                    .position(|event| event.is_upcoming(now))
                    .unwrap_or(0),
            )
        };

        Self {
            ordered,
            highlighted,
        }
    }

    /// Events ascending by instant, invalid ones last.
    pub fn ordered(&self) -> &[Event] {
        &self.ordered
    }

    pub fn highlighted(&self) -> Option<&Event> {
        self.highlighted.map(|idx| &self.ordered[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Writes the highlight (when there is a target for it) and appends one list item
    /// per event. An empty schedule leaves both targets untouched.
    pub fn render(
        &self,
        list: &mut Element,
        highlight: Option<&mut Element>,
        locale: &DateLocale,
    ) {
        if self.is_empty() {
            return;
        }

        if let (Some(highlight), Some(event)) = (highlight, self.highlighted()) {
            highlight.set_inner_html(markup::event_highlight(
                event.title(),
                &locale.long_date(&event.when),
                event.description(),
            ));
            fade_in(highlight);
        }

        for event in &self.ordered {
            list.append_html(markup::event_item(
                event.title(),
                &locale.long_date(&event.when),
                event.description(),
            ));
        }
        fade_in(list);
    }
}
