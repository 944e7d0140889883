// Static Export
// Writes every page as a standalone HTML file

use crate::contact::ContactFormState;
use crate::html::{self, LinkStyle};
use crate::navigation::Page;
use crate::site::Site;
use crate::views::ViewState;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Export all pages into `dir` (created if missing). Returns the written paths.
///
/// The contact page is rendered with its acknowledgement in place; the
/// exported form reveals it on submit without sending anything.
pub fn export_site(site: &Site, dir: &Path, last_updated: NaiveDate) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let chrome = site.chrome(last_updated, LinkStyle::Static);
    let mut written = Vec::with_capacity(Page::ALL.len());

    for page in Page::ALL {
        let state = match page {
            Page::Contact => ViewState::new(page).with_contact(ContactFormState::Submitted),
            _ => ViewState::new(page),
        };
        let view = site.render(&state);
        let path = dir.join(LinkStyle::Static.href(page));

        fs::write(&path, html::render_page(&view, &chrome))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(page = %page, path = %path.display(), "exported page");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_one_file_per_page() {
        let dir = std::env::temp_dir().join(format!("portfolio-export-{}", std::process::id()));
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let written = export_site(&Site::default(), &dir, date).unwrap();

        assert_eq!(written.len(), 5);
        assert!(dir.join("index.html").exists());
        assert!(dir.join("skills.html").exists());

        let skills = fs::read_to_string(dir.join("skills.html")).unwrap();
        assert!(skills.contains("href=\"index.html\""));
        assert!(skills.contains("Last updated: January 2026"));

        fs::remove_dir_all(&dir).ok();
    }
}
