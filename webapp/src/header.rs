use anyhow;
use gloo_net::http::Request;
use tracing::{debug, error, instrument};
use web_sys::Document;

use common::config::HeaderConfig;

// shared header
//
// every page carries an empty placeholder that is swapped for the fragment served at
// config.header.url.  the page stays usable without it, so failures are logged and the
// placeholder is simply left where it is
pub async fn fetch_fragment(url: &str) -> anyhow::Result<String> {
    let resp = Request::get(url).send().await?;

    // a 404 page spliced into the header slot is worse than no header at all
    if !resp.ok() {
        return Err(anyhow::Error::msg(format!(
            "header request returned {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    Ok(resp.text().await?)
}

#[instrument(skip_all)]
pub async fn load_header(document: &Document, config: &HeaderConfig) {
    let Some(placeholder) = document.get_element_by_id(&config.placeholder_id) else {
        debug!("no header placeholder on this page");
        return;
    };

    match fetch_fragment(&config.url).await {
        Ok(html) => {
            placeholder.set_outer_html(&html);
            debug!({ url = %config.url }, "injected header");
        }
        Err(err) => error!("Failed to load header: {err}"),
    }
}
