//! Client-side Routes
//!
//! Three pages share one History-API router: the working list, the saved
//! list index, and a saved list opened by id.

const SAVED_PREFIX: &str = "/saved";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// Fresh list at `/`
    NewList,
    /// `/saved`
    SavedLists,
    /// `/saved/{id}`
    SavedList(String),
}

impl Page {
    /// Resolve a location pathname; unknown paths open a new list
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path.strip_prefix(SAVED_PREFIX) {
            Some("") => Page::SavedLists,
            Some(rest) => match rest.strip_prefix('/') {
                Some(id) if !id.is_empty() && !id.contains('/') => Page::SavedList(id.to_string()),
                _ => Page::NewList,
            },
            None => Page::NewList,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::NewList => "/".to_string(),
            Page::SavedLists => SAVED_PREFIX.to_string(),
            Page::SavedList(id) => format!("{}/{}", SAVED_PREFIX, id),
        }
    }
}

/// Page for the browser's current location
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| Page::from_path(&p))
        .unwrap_or(Page::NewList)
}

/// Push `page` onto the browser history
pub fn push_history(page: &Page) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&page.path()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::NewList);
        assert_eq!(Page::from_path(""), Page::NewList);
        assert_eq!(Page::from_path("/saved"), Page::SavedLists);
        assert_eq!(Page::from_path("/saved/"), Page::SavedLists);
        assert_eq!(Page::from_path("/saved/rec123"), Page::SavedList("rec123".to_string()));
        assert_eq!(Page::from_path("/saved/a/b"), Page::NewList);
        assert_eq!(Page::from_path("/savedx"), Page::NewList);
        assert_eq!(Page::from_path("/elsewhere"), Page::NewList);
    }

    #[test]
    fn test_path_round_trip() {
        for page in [Page::NewList, Page::SavedLists, Page::SavedList("rec1".to_string())] {
            assert_eq!(Page::from_path(&page.path()), page);
        }
    }
}
