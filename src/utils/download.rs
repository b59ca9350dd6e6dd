// Static file downloads
// Programmatic anchor click for assets served from /downloads

use crate::error::{SiteError, SiteResult};

/// Trigger a browser download of a static asset
///
/// Creates a temporary `a` element with a `download` attribute, clicks it and
/// removes it again. No request is made by the site itself.
pub fn download_file(href: &str, file_name: &str) -> SiteResult<()> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(SiteError::WindowUnavailable)?;
    let document = window.document().ok_or(SiteError::DocumentUnavailable)?;
    let body = document.body().ok_or(SiteError::DocumentUnavailable)?;

    let anchor = document
        .create_element("a")
        .map_err(SiteError::dom)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(SiteError::dom)?;
    anchor.set_href(href);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(SiteError::dom)?;
    anchor.click();
    anchor.remove();

    log::info!("Started download of {}", href);
    Ok(())
}

/// Download the file eraser datasheet PDF
pub fn download_datasheet() -> SiteResult<()> {
    download_file(crate::config::DATASHEET_PATH, crate::config::DATASHEET_FILE_NAME)
}
