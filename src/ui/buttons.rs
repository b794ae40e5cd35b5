// Repository buttons.
// Each button owns its label and target URL, fixed when it is built.

use std::io;

/// Horizontal padding around every button.
pub const HORIZONTAL_PADDING: f32 = 15.0;
/// Vertical padding between buttons.
pub const VERTICAL_PADDING: f32 = 5.0;
/// Extra vertical padding before the first and after the last button.
pub const EDGE_PADDING: f32 = 15.0;

/// One activation control for a repository's Pages site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoButton {
    pub label: String,
    pub url: String,
}

impl RepoButton {
    pub fn new(username: &str, repo: &str) -> Self {
        Self {
            label: button_label(repo),
            url: pages_url(username, repo),
        }
    }

    /// Open the Pages site in the default browser.
    pub fn open(&self) -> io::Result<()> {
        webbrowser::open(&self.url)
    }
}

/// Build buttons in repository order.
pub fn build_buttons<S: AsRef<str>>(username: &str, repos: &[S]) -> Vec<RepoButton> {
    repos
        .iter()
        .map(|repo| RepoButton::new(username, repo.as_ref()))
        .collect()
}

/// First character upper-cased, underscores after it shown as spaces.
pub fn button_label(repo: &str) -> String {
    let mut chars = repo.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '_' { ' ' } else { c }))
            .collect(),
        None => String::new(),
    }
}

/// GitHub Pages URL for a user's project site.
pub fn pages_url(username: &str, repo: &str) -> String {
    format!("https://{}.github.io/{}/", username.to_lowercase(), repo)
}

/// (top, bottom) padding for the button at `index` of `count`.
pub fn vertical_padding(index: usize, count: usize) -> (f32, f32) {
    let top = if index == 0 {
        EDGE_PADDING
    } else {
        VERTICAL_PADDING
    };
    let bottom = if index + 1 == count {
        EDGE_PADDING
    } else {
        VERTICAL_PADDING
    };
    (top, bottom)
}
