// Launcher window state and eframe entry.
// Built from an explicit context; the window itself makes no cache decisions.

use std::path::Path;

use eframe::egui;

use crate::cache::Snapshot;
use crate::error::{LauncherError, Result};
use crate::ui::{self, buttons::RepoButton, buttons::build_buttons};

/// Everything the window needs from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherContext {
    pub username: String,
    pub avatar_url: String,
    /// Repository names in the order the API returned them.
    pub repos: Vec<String>,
}

impl LauncherContext {
    /// Extract the view's inputs; a snapshot without profile data cannot be shown.
    pub fn from_snapshot(username: &str, snapshot: &Snapshot, path: &Path) -> Result<Self> {
        let (user, repos) = snapshot
            .contents()
            .ok_or_else(|| LauncherError::CorruptSnapshot {
                path: path.to_path_buf(),
                reason: "no profile or repository data".to_string(),
            })?;

        Ok(Self {
            username: username.to_string(),
            avatar_url: user.avatar_url.clone(),
            repos: repos.iter().map(|repo| repo.name.clone()).collect(),
        })
    }
}

/// Main application state.
pub struct LauncherApp {
    avatar: egui::TextureHandle,
    buttons: Vec<RepoButton>,
}

impl LauncherApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        context: &LauncherContext,
        avatar: egui::ColorImage,
    ) -> Self {
        let avatar = cc
            .egui_ctx
            .load_texture("avatar", avatar, egui::TextureOptions::LINEAR);

        Self {
            avatar,
            buttons: build_buttons(&context.username, &context.repos),
        }
    }

    pub fn avatar(&self) -> &egui::TextureHandle {
        &self.avatar
    }

    pub fn buttons(&self) -> &[RepoButton] {
        &self.buttons
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::draw(ctx, self);
    }
}

/// Decode downloaded avatar bytes into an egui image.
pub fn decode_avatar(bytes: &[u8]) -> Result<egui::ColorImage> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}

/// Open the launcher window and block until it is closed.
pub fn run(context: LauncherContext, avatar: egui::ColorImage) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(context.username.as_str())
            .with_inner_size([300.0, 520.0]),
        ..Default::default()
    };

    let title = context.username.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(LauncherApp::new(cc, &context, avatar)))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> Snapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_context_from_populated_snapshot() {
        let snapshot = snapshot(json!({
            "last_update": 1,
            "data": {
                "user": {"avatar_url": "https://a/1", "repos_url": "https://r"},
                "repos": [{"name": "b_repo"}, {"name": "a_repo"}]
            }
        }));

        let context =
            LauncherContext::from_snapshot("Vianpyro", &snapshot, Path::new("save.json")).unwrap();

        assert_eq!(context.username, "Vianpyro");
        assert_eq!(context.avatar_url, "https://a/1");
        assert_eq!(context.repos, ["b_repo", "a_repo"]);
    }

    #[test]
    fn test_context_requires_profile_data() {
        let snapshot = snapshot(json!({"last_update": 1_700_000_000, "data": {}}));

        let err = LauncherContext::from_snapshot("Vianpyro", &snapshot, Path::new("save.json"))
            .unwrap_err();
        assert!(matches!(err, LauncherError::CorruptSnapshot { .. }));
    }

    #[test]
    fn test_decode_avatar_png() {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(2, 3, image::Rgba([255, 0, 0, 255]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_avatar(&png).unwrap();
        assert_eq!(decoded.size, [2, 3]);
    }

    #[test]
    fn test_decode_avatar_rejects_garbage() {
        let err = decode_avatar(b"not an image").unwrap_err();
        assert!(matches!(err, LauncherError::Avatar(_)));
    }
}
