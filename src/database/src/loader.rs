use crate::{LoaderError, SnapshotEntity, SnapshotLoader};
use league_core::league::{LeagueMatch, Season, SeasonMatches};
use flate2::read::GzDecoder;
use include_dir::{Dir, include_dir};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

static BUNDLED_DATA: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/data");

/// Seasons and matches read from a snapshot, in engine types.
#[derive(Debug, Clone, Default)]
pub struct LeagueSnapshot {
    pub seasons: Vec<Season>,
    pub matches: Vec<LeagueMatch>,
}

impl LeagueSnapshot {
    pub fn by_season(&self) -> Vec<SeasonMatches> {
        SeasonMatches::split(&self.seasons, &self.matches)
    }

    fn merge(&mut self, entity: SnapshotEntity) {
        let mut known_seasons: HashSet<u32> = self.seasons.iter().map(|s| s.id).collect();
        let mut known_matches: HashSet<u32> = self.matches.iter().map(|m| m.id).collect();

        for season in entity.seasons {
            if !known_seasons.insert(season.id) {
                warn!("duplicate season id {} ignored", season.id);
                continue;
            }
            self.seasons.push(season.into());
        }

        for item in entity.matches {
            if !known_matches.insert(item.id) {
                warn!("duplicate match id {} ignored", item.id);
                continue;
            }
            self.matches.push(item.into());
        }

        self.seasons.sort_by_key(|s| s.id);
    }

    fn from_entity(entity: SnapshotEntity) -> Self {
        let mut snapshot = LeagueSnapshot::default();
        snapshot.merge(entity);
        snapshot
    }
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Demo seasons compiled into the binary.
    pub fn load_bundled() -> Result<LeagueSnapshot, LoaderError> {
        let mut files: Vec<_> = BUNDLED_DATA
            .files()
            .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
            .collect();

        files.sort_by(|a, b| a.path().cmp(b.path()));

        let mut snapshot = LeagueSnapshot::default();

        for file in files {
            debug!("loading bundled snapshot {}", file.path().display());
            snapshot.merge(SnapshotLoader::parse_slice(file.contents())?);
        }

        info!(
            "bundled data: {} seasons, {} matches",
            snapshot.seasons.len(),
            snapshot.matches.len()
        );

        Ok(snapshot)
    }

    /// Reads a `.json` or `.json.gz` snapshot from disk.
    pub fn load_path(path: &Path) -> Result<LeagueSnapshot, LoaderError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let entity = if name.ends_with(".json.gz") {
            let compressed = fs::read(path)?;
            let json = Self::decompress(&compressed).map_err(|source| LoaderError::Gzip {
                path: path.to_path_buf(),
                source,
            })?;
            SnapshotLoader::parse(&json)?
        } else if name.ends_with(".json") {
            SnapshotLoader::parse(&fs::read_to_string(path)?)?
        } else {
            return Err(LoaderError::UnsupportedFormat(path.to_path_buf()));
        };

        let snapshot = LeagueSnapshot::from_entity(entity);

        info!(
            "{}: {} seasons, {} matches",
            path.display(),
            snapshot.seasons.len(),
            snapshot.matches.len()
        );

        Ok(snapshot)
    }

    fn decompress(bytes: &[u8]) -> std::io::Result<String> {
        let mut decoder = GzDecoder::new(bytes);
        let mut json = String::new();
        decoder.read_to_string(&mut json)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "seasons": [{ "id": 2, "label": "2025" }, { "id": 1, "label": "2024" }],
        "matches": [
            { "id": 1, "season_id": 1, "round": 1, "home_team": "FIN", "away_team": "SLO",
              "home_goals": 3, "away_goals": 1 },
            { "id": 2, "season_id": 2, "round": 1, "home_team": "SWE", "away_team": "KAZ",
              "home_goals": 2, "away_goals": 3, "overtime": true },
            { "id": 2, "season_id": 2, "round": 2, "home_team": "USA", "away_team": "NOR",
              "home_goals": 1, "away_goals": 0 }
        ]
    }"#;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("league_stats_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_from_entity_sorts_seasons_and_drops_duplicates() {
        let snapshot = LeagueSnapshot::from_entity(SnapshotLoader::parse(SNAPSHOT).unwrap());

        assert_eq!(snapshot.seasons[0].label, "2024");
        assert_eq!(snapshot.seasons[1].label, "2025");
        assert_eq!(snapshot.matches.len(), 2);
        assert_eq!(snapshot.matches[1].home_team, "SWE");
    }

    #[test]
    fn test_by_season() {
        let snapshot = LeagueSnapshot::from_entity(SnapshotLoader::parse(SNAPSHOT).unwrap());
        let seasons = snapshot.by_season();

        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].matches.len(), 1);
        assert_eq!(seasons[1].matches[0].away_team, "KAZ");
    }

    #[test]
    fn test_load_json_file() {
        let path = temp_file("plain.json");
        fs::write(&path, SNAPSHOT).unwrap();

        let snapshot = DatabaseLoader::load_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(snapshot.seasons.len(), 2);
        assert_eq!(snapshot.matches.len(), 2);
    }

    #[test]
    fn test_load_gzip_file() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SNAPSHOT.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let path = temp_file("packed.json.gz");
        fs::write(&path, compressed).unwrap();

        let snapshot = DatabaseLoader::load_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(snapshot.matches.len(), 2);
        assert!(snapshot.matches[1].overtime);
    }

    #[test]
    fn test_load_corrupt_gzip_file() {
        let path = temp_file("broken.json.gz");
        fs::write(&path, b"not gzip").unwrap();

        let result = DatabaseLoader::load_path(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoaderError::Gzip { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = DatabaseLoader::load_path(&temp_file("missing.json"));

        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = DatabaseLoader::load_path(Path::new("snapshot.csv"));

        assert!(matches!(result, Err(LoaderError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_bundled() {
        let snapshot = DatabaseLoader::load_bundled().unwrap();

        assert!(!snapshot.seasons.is_empty());
        assert!(!snapshot.matches.is_empty());
        assert!(snapshot.matches.iter().all(|m| m.home_goals != m.away_goals || m.is_placeholder()));
    }
}
