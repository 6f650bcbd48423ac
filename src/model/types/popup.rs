use crate::model::types::*;

/// How long the copied confirmation stays up before the popup closes itself.
pub const AUTO_CLOSE_DELAY_MS: u32 = 2000;

/// The download link popup of one result card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open {
        source: Source,
        copied: Option<String>,
        /// set once a link was copied, until the popup closes or is replaced
        closing: bool,
    },
}

impl PopupState {
    /// Shows the links of `source`, dropping any pending auto-close of a previous popup.
    pub fn open(&mut self, source: Source) {
        *self = PopupState::Open {
            source,
            copied: None,
            closing: false,
        };
    }

    /// Marks `url` as copied and returns it unchanged for the clipboard.
    /// Returns none while closed, in which case no auto-close should be started.
    pub fn select(&mut self, url: &str) -> Option<String> {
        match self {
            PopupState::Open { copied, closing, .. } => {
                *copied = Some(url.to_string());
                *closing = true;
                Some(url.to_string())
            }
            PopupState::Closed => None,
        }
    }

    /// The auto-close timer fired. Only closes a popup that is waiting for it.
    pub fn on_timeout(&mut self) {
        if self.is_closing() {
            *self = PopupState::Closed;
        }
    }

    pub fn close(&mut self) {
        *self = PopupState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PopupState::Open { .. })
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, PopupState::Open { closing: true, .. })
    }

    pub fn options(&self) -> &[DownloadLink] {
        match self {
            PopupState::Open { source, .. } => source.download_links(),
            PopupState::Closed => &[],
        }
    }

    pub fn copied(&self) -> Option<&str> {
        match self {
            PopupState::Open { copied, .. } => copied.as_deref(),
            PopupState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, urls: &[&str]) -> Source {
        Source {
            source_name: name.to_string(),
            upload_date: "2024-01-01".to_string(),
            download_urls: Some(
                urls.iter()
                    .map(|url| DownloadLink {
                        name: format!("{name} link"),
                        url: url.to_string(),
                        upload_date: "2024-01-01".to_string(),
                        file_size: "1 GB".to_string(),
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn auto_close_waits_two_seconds() {
        assert_eq!(AUTO_CLOSE_DELAY_MS, 2000);
    }

    #[test]
    fn selecting_copies_the_url_verbatim_then_closes_on_timeout() {
        let url = "magnet:?xt=urn:btih:ABC&dn=Game%20A+v1";
        let mut popup = PopupState::default();
        popup.open(source("FitGirl", &[url, "https://x/b"]));
        assert!(popup.is_open());
        assert_eq!(popup.options().len(), 2);
        assert!(!popup.is_closing());

        assert_eq!(popup.select(url).as_deref(), Some(url));
        assert_eq!(popup.copied(), Some(url));
        assert!(popup.is_closing());

        popup.on_timeout();
        assert_eq!(popup, PopupState::Closed);
        assert!(popup.options().is_empty());
    }

    #[test]
    fn nothing_is_copied_while_closed() {
        let mut popup = PopupState::Closed;
        assert_eq!(popup.select("https://x/a"), None);
        assert!(!popup.is_closing());
    }

    #[test]
    fn timeout_without_a_selection_keeps_the_popup_open() {
        let mut popup = PopupState::default();
        popup.open(source("DODI", &["https://x/a"]));
        popup.on_timeout();
        assert!(popup.is_open());
    }

    #[test]
    fn manual_close_drops_the_pending_auto_close() {
        let mut popup = PopupState::default();
        popup.open(source("DODI", &["https://x/a"]));
        popup.select("https://x/a");
        popup.close();
        assert!(!popup.is_closing());
        popup.on_timeout();
        assert_eq!(popup, PopupState::Closed);
    }

    #[test]
    fn opening_another_source_survives_the_old_timer() {
        let mut popup = PopupState::default();
        popup.open(source("FitGirl", &["https://x/a"]));
        popup.select("https://x/a");

        popup.open(source("DODI", &["https://y/b"]));
        assert_eq!(popup.copied(), None);
        popup.on_timeout();
        assert!(popup.is_open());
        assert_eq!(popup.options()[0].url, "https://y/b");
    }

    #[test]
    fn a_source_without_links_opens_empty() {
        let mut popup = PopupState::default();
        popup.open(Source {
            source_name: "Xatab".to_string(),
            upload_date: String::new(),
            download_urls: None,
        });
        assert!(popup.is_open());
        assert!(popup.options().is_empty());
    }
}
