use std::path::PathBuf;

use genpdf::fonts::{self, FontData, FontFamily};

use super::RenderError;

/// Where the TrueType files for the two font families come from.
///
/// The faces are embedded in the PDF, so any character the font covers can
/// be printed; the built-in PDF fonts only cover Windows-1252. Each family
/// needs `<Name>-Regular.ttf`, `-Bold`, `-Italic` and `-BoldItalic` files
/// in `dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSettings {
    pub dir: PathBuf,
    pub family: String,
    pub code_family: String,
}

impl FontSettings {
    pub const DEFAULT_DIR: &'static str = "/usr/share/fonts/truetype/liberation";
    pub const DEFAULT_FAMILY: &'static str = "LiberationSans";
    pub const DEFAULT_CODE_FAMILY: &'static str = "LiberationMono";
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(Self::DEFAULT_DIR),
            family: Self::DEFAULT_FAMILY.to_string(),
            code_family: Self::DEFAULT_CODE_FAMILY.to_string(),
        }
    }
}

/// Font data for body text and code.
pub struct LoadedFonts {
    pub body: FontFamily<FontData>,
    pub code: FontFamily<FontData>,
}

pub fn load(settings: &FontSettings) -> Result<LoadedFonts, RenderError> {
    if !settings.dir.is_dir() {
        return Err(RenderError::FontDirMissing(settings.dir.clone()));
    }
    log::debug!(
        "loading fonts {} and {} from {}",
        settings.family,
        settings.code_family,
        settings.dir.display()
    );

    Ok(LoadedFonts {
        body: load_family(settings, &settings.family)?,
        code: load_family(settings, &settings.code_family)?,
    })
}

fn load_family(settings: &FontSettings, name: &str) -> Result<FontFamily<FontData>, RenderError> {
    fonts::from_files(&settings.dir, name, None).map_err(|source| RenderError::Fonts {
        dir: settings.dir.clone(),
        family: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_liberation_fonts() {
        let settings = FontSettings::default();
        assert_eq!(
            settings.dir,
            PathBuf::from("/usr/share/fonts/truetype/liberation")
        );
        assert_eq!(settings.family, "LiberationSans");
        assert_eq!(settings.code_family, "LiberationMono");
    }

    #[test]
    fn missing_directory_is_reported() {
        let settings = FontSettings {
            dir: PathBuf::from("/this/path/does/not/exist"),
            ..FontSettings::default()
        };
        let err = load(&settings).err().unwrap();
        assert!(matches!(err, RenderError::FontDirMissing(_)));
        assert!(err.to_string().contains("/this/path/does/not/exist"));
    }

    #[test]
    fn missing_font_files_are_reported() {
        let dir = TempDir::new().unwrap();
        let settings = FontSettings {
            dir: dir.path().to_path_buf(),
            ..FontSettings::default()
        };
        let err = load(&settings).err().unwrap();
        assert!(matches!(err, RenderError::Fonts { ref family, .. } if family == "LiberationSans"));
    }
}
