//! Requirements file reading.

use std::path::Path;

use crate::ui::UserInterface;

/// Read the requirement entries from `path`.
///
/// Entries keep file order. Blank lines and `#` comments are dropped since
/// pip would reject them as package arguments. A path that is not a
/// readable regular file is reported as an error and yields no entries;
/// this never fails.
pub fn load(path: &Path, platform_id: &str, ui: &mut dyn UserInterface) -> Vec<String> {
    if !path.is_file() {
        ui.error(&format!(
            "Cannot find requirements file at: {}",
            path.display()
        ));
        return Vec::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => {
            ui.message(&format!(
                "using {} requirements file: {}",
                platform_id,
                path.display()
            ));
            parse_entries(&content)
        }
        Err(e) => {
            tracing::debug!("Reading {} failed: {}", path.display(), e);
            ui.error(&format!(
                "Cannot read requirements file at: {} ({})",
                path.display(),
                e
            ));
            Vec::new()
        }
    }
}

/// Split requirements text into entries.
///
/// A leading UTF-8 byte order mark is ignored.
pub fn parse_entries(content: &str) -> Vec<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
