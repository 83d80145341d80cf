use chrono::{DateTime, FixedOffset};
use log::debug;

use crate::date::DateLocale;
use crate::error::Result;
use crate::events::{RawEvent, Schedule};
use crate::sink::Element;
use crate::source::Source;

pub const EVENTS: &str = "events.json";

pub async fn render(
    source: &Source,
    list: Option<&mut Element>,
    highlight: Option<&mut Element>,
    now: &DateTime<FixedOffset>,
    locale: &DateLocale,
) -> Result<()> {
    let Some(list) = list else {
        return Ok(());
    };

    let events: Vec<RawEvent> = source.fetch_json(EVENTS).await?;
    let schedule = Schedule::new(events, now);

    if let Some(next) = schedule.highlighted() {
        debug!("Next up: {}", next.title());
    }

    schedule.render(list, highlight, locale);
    Ok(())
}
