//! Loader for the RON stage file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::StageLayout;

/// Error type for stage loading failures.
#[derive(Debug)]
pub struct StageLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for StageLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_stage(path: &Path) -> Result<StageLayout, StageLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| StageLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| StageLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::CollectibleKind;

    #[test]
    fn parses_a_full_stage_file() {
        let source = r#"
            (
                tuning: (gravity: 0.25, jump_force: 3.5),
                character_start_x: 20.0,
                blocks: [(x: 40.0, bottom: 12.0, reveals: "coin")],
                collectibles: [(id: "coin", x: 40.0, bottom: 17.0, kind: PowerUp)],
                pipe: (x: 60.0),
                portal: (x: 95.0),
            )
        "#;
        let layout: StageLayout = ron_options().from_str(source).unwrap();

        assert_eq!(layout.tuning.gravity, 0.25);
        assert_eq!(layout.tuning.jump_force, 3.5);
        // Unspecified tuning fields keep their defaults.
        assert_eq!(layout.tuning.speed, 1.2);
        assert_eq!(layout.character_start_x, 20.0);
        assert_eq!(layout.blocks.len(), 1);
        assert_eq!(layout.blocks[0].reveals.as_deref(), Some("coin"));
        assert_eq!(layout.collectibles[0].kind, CollectibleKind::PowerUp);
        assert!(!layout.collectibles[0].revealed);
        assert_eq!(layout.pipe.unwrap().x, 60.0);
        assert_eq!(layout.portal.unwrap().x, 95.0);
    }

    #[test]
    fn empty_stage_parses_to_defaults() {
        let layout: StageLayout = ron_options().from_str("()").unwrap();
        assert_eq!(layout.blocks.len(), 2);
        assert!(layout.pipe.is_some());
        assert!(layout.portal.is_some());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_stage(Path::new("no/such/stage.ron")).unwrap_err();
        assert!(err.to_string().contains("no/such/stage.ron"));
    }

    #[test]
    fn objects_can_be_omitted() {
        let source = r#"(pipe: None, portal: None, blocks: [], collectibles: [])"#;
        let layout: StageLayout = ron_options().from_str(source).unwrap();
        assert!(layout.pipe.is_none());
        assert!(layout.portal.is_none());
        assert!(layout.blocks.is_empty());
    }
}
