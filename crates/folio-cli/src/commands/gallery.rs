//! List gallery images for a tab

use anyhow::Result;
use folio_core::gallery::{FEATURED_FOLDER, image_url, portrait_url};
use folio_core::{Config, GalleryMap, GalleryTab, SubTab};
use serde::Serialize;

use super::{Source, load_json_or};
use crate::output::{OutputFormat, print_item, text};

/// Images selected for one tab, as site URLs.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GalleryView {
    tab: GalleryTab,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtab: Option<SubTab>,
    images: Vec<String>,
}

/// Select the images shown on `tab`.
///
/// The gallery tab defaults to its first sub-tab; `subtab` is ignored elsewhere.
pub fn select(
    map: &GalleryMap,
    tab: GalleryTab,
    subtab: Option<SubTab>,
    base: &str,
) -> GalleryView {
    match tab {
        GalleryTab::Featured => GalleryView {
            tab,
            subtab: None,
            images: urls(base, FEATURED_FOLDER, map.featured()),
        },
        GalleryTab::Gallery => {
            let subtab = subtab.unwrap_or_default();
            GalleryView {
                tab,
                subtab: Some(subtab),
                images: urls(base, subtab.folder(), map.list(subtab)),
            }
        },
        GalleryTab::About => GalleryView {
            tab,
            subtab: None,
            images: vec![portrait_url(base)],
        },
    }
}

fn urls(base: &str, folder: &str, files: &[String]) -> Vec<String> {
    files.iter().map(|file| image_url(base, folder, file)).collect()
}

/// Execute the gallery command
pub async fn execute(
    source: &Source,
    tab: GalleryTab,
    subtab: Option<SubTab>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let state = load_json_or(source, config, GalleryMap::default()).await?;
    let map = state.into_value().unwrap_or_default();

    let view = select(&map, tab, subtab, &config.site.base_url);
    match format {
        OutputFormat::Text => {
            let heading = match view.subtab {
                Some(subtab) => format!("{} / {}", tab.label(), subtab.label()),
                None => tab.label().to_string(),
            };
            print!("{}", text::render_images(&heading, &view.images));
        },
        OutputFormat::Json | OutputFormat::Jsonl => print_item(&view, format)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn map() -> GalleryMap {
        serde_json::from_str(r#"{"featured":["f.jpg"],"model":["m1.jpg","m2.jpg"]}"#).unwrap()
    }

    #[test]
    fn test_featured_tab() {
        let view = select(&map(), GalleryTab::Featured, Some(SubTab::Girls), "/portfolio/");
        assert_eq!(view.subtab, None);
        assert_eq!(view.images, vec!["/portfolio/photo/featured/f.jpg"]);
    }

    #[test]
    fn test_gallery_defaults_to_first_subtab() {
        let view = select(&map(), GalleryTab::Gallery, None, "/portfolio/");
        assert_eq!(view.subtab, Some(SubTab::Models));
        assert_eq!(view.images.len(), 2);

        let empty = select(&map(), GalleryTab::Gallery, Some(SubTab::Sapphic), "/portfolio/");
        assert!(empty.images.is_empty());
    }

    #[test]
    fn test_about_tab_shows_portrait() {
        let view = select(&GalleryMap::default(), GalleryTab::About, None, "/p");
        assert_eq!(view.images, vec!["/p/head_photographer.jpg"]);
    }
}
