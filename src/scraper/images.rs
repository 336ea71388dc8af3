use ::scraper::Selector;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::ImageGallery;
use crate::scraper;

const GALLERY_IMAGE_SELECTOR: &str = "img.image-event-main.border-box-main";

#[instrument(skip(client))]
pub(crate) async fn get_images(client: &reqwest::Client, url: &str) -> Result<ImageGallery> {
    let document = scraper::get_document(client, url).await?;
    let gallery = parse_images(&document)?;
    debug!(count = gallery.len(), "parsed gallery page");
    Ok(gallery)
}

fn parse_images(document: &scraper::Html) -> Result<ImageGallery> {
    let selector = Selector::parse(GALLERY_IMAGE_SELECTOR)?;
    let mut gallery = ImageGallery::new();
    for (index, image) in document.select(&selector).enumerate() {
        let Some(src) = image.value().attr("src") else {
            continue;
        };
        gallery.insert(format!("image_{}", index + 1), src.to_owned());
    }
    Ok(gallery)
}
