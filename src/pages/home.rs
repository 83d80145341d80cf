use serde::Deserialize;

use crate::error::Result;
use crate::markup;
use crate::sink::{fade_in, Element};
use crate::source::Source;

pub const VIDEOS: &str = "videos.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Video {
    pub url: String,
    pub title: String,
}

pub fn append_videos<'a, I>(target: &mut Element, videos: I)
where
    I: IntoIterator<Item = &'a Video>,
{
    for video in videos {
        target.append_html(markup::video_card(&video.url, &video.title));
    }
    fade_in(target);
}

pub async fn render(source: &Source, grid: Option<&mut Element>) -> Result<()> {
    let Some(grid) = grid else {
        return Ok(());
    };

    let videos: Vec<Video> = source.fetch_json(VIDEOS).await?;
    append_videos(grid, &videos);
    Ok(())
}
