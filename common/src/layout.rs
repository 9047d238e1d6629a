// viewport geometry
//
// all values are css pixels as reported by getBoundingClientRect() and window.scrollY

/// True when a box with the given viewport-relative top/bottom edges overlaps the visible area.
pub fn intersects_viewport(rect_top: f64, rect_bottom: f64, window_height: f64) -> bool {
    rect_top < window_height && rect_bottom > 0.0
}

/// Document scroll position that puts an element just below a fixed header.
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    rect_top + scroll_y - header_offset
}

/// True while `document.readyState` says the markup is still being parsed.
pub fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_intersection() {
        assert!(intersects_viewport(100.0, 400.0, 800.0));
        assert!(intersects_viewport(-300.0, 10.0, 800.0));
        assert!(intersects_viewport(799.0, 1200.0, 800.0));

        assert!(!intersects_viewport(800.0, 1200.0, 800.0));
        assert!(!intersects_viewport(-400.0, 0.0, 800.0));
    }

    #[test]
    fn test_still_loading_only_while_parsing() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(250.0, 1000.0, 100.0), 1150.0);
        assert_eq!(scroll_target(-50.0, 0.0, 80.0), -130.0);
    }
}
