// in-page navigation
//
// nav links are either plain fragments ("#apps") or point at the index page
// ("index.html#apps"); only the fragment matters for highlighting, and only links to the index
// page are scrolled in place

#[derive(Clone, Debug, PartialEq)]
pub struct SectionPosition {
    pub id: String,
    pub offset_top: f64,
}

/// The fragment of a link including its leading '#', if it has one.
pub fn link_hash(href: &str) -> Option<&str> {
    href.find('#').map(|pos| &href[pos..])
}

// scroll spy
//
// sections are in document order, so the last one whose top has passed `scroll_y + threshold`
// is the one being read
pub fn active_section(
    sections: &[SectionPosition],
    scroll_y: f64,
    threshold: f64,
) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.offset_top - threshold)
        .map(|section| section.id.as_str())
}

pub fn link_targets_section(href: &str, section: Option<&str>) -> bool {
    match (link_hash(href), section) {
        (Some(hash), Some(id)) => hash.strip_prefix('#') == Some(id),
        _ => false,
    }
}

pub fn is_index_page(pathname: &str) -> bool {
    pathname.ends_with("index.html") || pathname.ends_with('/')
}

/// The fragment to scroll to when a nav link is clicked on `pathname`, or None when the click
/// should be left to the browser.
pub fn same_page_target<'a>(href: &'a str, pathname: &str) -> Option<&'a str> {
    let hash = link_hash(href)?;
    if hash == "#" {
        return None;
    }

    let links_to_index = href.starts_with('#') || href.starts_with("index.html#");
    (is_index_page(pathname) && links_to_index).then_some(hash)
}
