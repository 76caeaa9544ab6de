use std::path::Path;

use ab_glyph::{FontArc, FontVec};
use fontdb::{Database, Family, Query};

use crate::error::{MemeError, Result};

/// Resolve a caption font.
///
/// `name` is either a path to a `.ttf`/`.otf` file or a family name looked up
/// in the system font database. Unknown families fall back to the system
/// sans-serif face.
pub fn load_font(name: &str) -> Result<FontArc> {
    let path = Path::new(name);
    if is_font_file(path) {
        let bytes = std::fs::read(path)?;
        return FontArc::try_from_vec(bytes)
            .map_err(|e| MemeError::FontUnavailable(format!("{}: {e}", path.display())));
    }
    load_system_font(name)
}

fn is_font_file(path: &Path) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "ttf" | "otf"))
        .unwrap_or(false);
    ext_ok && path.is_file()
}

fn load_system_font(name: &str) -> Result<FontArc> {
    let mut db = Database::new();
    db.load_system_fonts();

    let families = [Family::Name(name), Family::SansSerif];
    let query = Query {
        families: &families,
        ..Query::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| MemeError::FontUnavailable(format!("no system font matches {name:?}")))?;

    let font = db
        .with_face_data(id, |data, index| {
            FontVec::try_from_vec_and_index(data.to_vec(), index)
                .ok()
                .map(FontArc::new)
        })
        .flatten()
        .ok_or_else(|| MemeError::FontUnavailable(format!("failed to parse font for {name:?}")))?;

    tracing::debug!(font = name, "Loaded caption font");
    Ok(font)
}
