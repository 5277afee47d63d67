//! Fragment expansion for flat-mode path groups.

use super::types::{DIR_OUTPUT_KEY, FILENAME_MARKER, HOME_KEY, PathGroup};

/// Keys that expansion never rewrites.
fn is_exempt(key: &str) -> bool {
    key == HOME_KEY || key == DIR_OUTPUT_KEY || key.contains(FILENAME_MARKER)
}

impl PathGroup {
    /// Resolve the base directory used for fragment expansion.
    ///
    /// A non-empty override wins over the group's own `home` entry. With
    /// neither set the base is the empty string and expansion leaves every
    /// fragment unchanged.
    pub fn base_dir(&self, base_override: Option<&str>) -> String {
        match base_override {
            Some(dir) if !dir.is_empty() => dir.to_string(),
            _ => self.get(HOME_KEY).unwrap_or("").to_string(),
        }
    }

    /// Prefix every non-exempt entry with `base_dir`.
    ///
    /// `home`, `dir_output`, and filename entries are left untouched.
    /// Values are concatenated verbatim: a trailing separator on the base
    /// and a leading one on the fragment both survive in the result.
    pub fn expand(&mut self, base_dir: &str) {
        for (key, value) in self.iter_mut() {
            if is_exempt(key) {
                continue;
            }

            value.insert_str(0, base_dir);
        }
    }
}
