use serde::Deserialize;

use super::home::{append_videos, Video, VIDEOS};
use crate::error::Result;
use crate::markup;
use crate::sink::{fade_in, Element};
use crate::source::Source;

pub const CULTURE: &str = "culture.json";

/// Number of videos shown under the culture cards.
pub const CULTURE_VIDEO_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CultureItem {
    pub image: String,
    pub name: String,
    pub craft: String,
}

/// Both files are fetched before either container is touched.
pub async fn render(
    source: &Source,
    grid: Option<&mut Element>,
    videos: Option<&mut Element>,
) -> Result<()> {
    if grid.is_none() && videos.is_none() {
        return Ok(());
    }

    let items: Vec<CultureItem> = source.fetch_json(CULTURE).await?;
    let clips: Option<Vec<Video>> = match videos {
        Some(_) => Some(source.fetch_json(VIDEOS).await?),
        None => None,
    };

    if let Some(grid) = grid {
        for item in &items {
            grid.append_html(markup::image_card(&item.image, &item.name, &item.craft));
        }
        fade_in(grid);
    }

    if let (Some(target), Some(clips)) = (videos, clips) {
        append_videos(target, clips.iter().take(CULTURE_VIDEO_COUNT));
    }

    Ok(())
}
