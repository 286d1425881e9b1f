//! Carousel Controller
//!
//! Loads the title list once and renders it into `titleCarousel`.

use crate::constants::{CAROUSEL_COLUMN_SIZE, class, id};
use crate::error::Result;
use crate::services::TitleSource;
use crate::surface::{ElementId, NewElement, Surface};

use super::layout::{layout_columns, parse_titles};

/// Title carousel loader
#[derive(Debug, Clone)]
pub struct CarouselLoader {
    container: ElementId,
    per_column: usize,
}

impl Default for CarouselLoader {
    fn default() -> Self {
        Self {
            container: ElementId::from(id::TITLE_CAROUSEL),
            per_column: CAROUSEL_COLUMN_SIZE,
        }
    }
}

impl CarouselLoader {
    /// Fetch and parse the title list
    pub async fn fetch(&self, source: &dyn TitleSource) -> Result<Vec<String>> {
        let text = source.fetch().await?;
        Ok(parse_titles(&text))
    }

    /// Replace the container's content with columns of titles
    ///
    /// Returns the number of columns rendered.
    pub fn render(&self, surface: &mut dyn Surface, titles: &[String]) -> usize {
        surface.clear_children(&self.container);

        let columns = layout_columns(titles, self.per_column);
        for column in &columns {
            let column_el = surface.append_child(
                &self.container,
                NewElement::new("div").class(class::CAROUSEL_COLUMN),
            );
            for title in column.iter() {
                surface.append_child(
                    &column_el,
                    NewElement::new("div").class(class::CAROUSEL_TITLE).text(title),
                );
            }
        }
        columns.len()
    }

    /// Fetch then render; a failed fetch is logged and leaves the container
    /// untouched
    pub async fn load_titles(&self, source: &dyn TitleSource, surface: &mut dyn Surface) -> bool {
        match self.fetch(source).await {
            Ok(titles) => {
                let columns = self.render(surface, &titles);
                tracing::info!("Loaded {} titles in {columns} columns", titles.len());
                true
            }
            Err(e) => {
                tracing::error!("Failed to load title list from {}: {e}", source.describe());
                false
            }
        }
    }
}
