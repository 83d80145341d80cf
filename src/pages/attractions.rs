use serde::Deserialize;

use crate::error::Result;
use crate::markup;
use crate::sink::{fade_in, Element};
use crate::source::Source;

pub const ATTRACTIONS: &str = "attractions.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attraction {
    pub image: String,
    pub title: String,
    pub description: String,
}

pub async fn render(source: &Source, grid: Option<&mut Element>) -> Result<()> {
    let Some(grid) = grid else {
        return Ok(());
    };

    let items: Vec<Attraction> = source.fetch_json(ATTRACTIONS).await?;
    for item in &items {
        grid.append_html(markup::image_card(&item.image, &item.title, &item.description));
    }
    fade_in(grid);
    Ok(())
}
