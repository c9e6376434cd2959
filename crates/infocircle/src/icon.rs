use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Icon theme name, or an absolute path to an image file.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

orbit::impl_string_newtype!(IconName);

pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    let path = Path::new(icon_name.as_str());
    if path.is_absolute() {
        return path.exists().then(|| path.to_path_buf());
    }

    lookup(icon_name.as_str())
        .with_size(256)
        .with_scale(1)
        .find()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_has_no_icon() {
        assert_eq!(find_icon_path(&IconName::new("")), None);
    }

    #[test]
    fn test_missing_absolute_path_is_not_looked_up() {
        assert_eq!(
            find_icon_path(&IconName::new("/nonexistent/infocircle/icon.png")),
            None
        );
    }
}
