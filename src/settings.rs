use crate::point::{MAX_SIZE, MIN_SIZE};
use crate::Arrive;
use std::collections::HashMap;
use std::path::PathBuf;

/// User settings, read from `Hoshi.toml`:
///
/// ```toml
/// board_size = 19
/// game = "data/game.csv"
/// imps = 1
///
/// [keys]
/// exit = "Escape"
/// new_window = "n"
/// load_game = "l"
/// ```
///
/// Anything left out takes its default.  A `[keys]` table replaces the default bindings as a
/// whole, so list every act you want to use.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct Settings {
    board_size: u8,
    game: PathBuf,
    imps: usize,
    keys: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        let keys = [
            ("exit", "Escape"),
            ("new_window", "n"),
            ("close_window", "w"),
            ("load_game", "l"),
            ("clear_board", "x"),
            ("summon", "i"),
            ("coordinates", "c"),
            ("scoring", "s"),
        ]
        .into_iter()
        .map(|(act, key)| (act.to_string(), key.to_string()))
        .collect();
        Self {
            board_size: 19,
            game: PathBuf::from("data/game.csv"),
            imps: 1,
            keys,
        }
    }
}

impl Settings {
    /// Reads settings from a parsed [`config::Config`].  Board sizes outside what we can label
    /// are clamped.
    ///
    /// Will [`crate::Blame::Config`] if the values do not fit the expected types.
    pub fn from_config(config: config::Config) -> Arrive<Self> {
        let mut settings: Self = config.try_deserialize()?;
        let size = settings.board_size.clamp(MIN_SIZE, MAX_SIZE);
        if size != settings.board_size {
            tracing::warn!("Board size {} clamped to {size}.", settings.board_size);
            settings.board_size = size;
        }
        Ok(settings)
    }

    /// Reads settings from the file `name` (extension optional), falling back on the defaults if
    /// the file is missing or broken.
    #[tracing::instrument]
    pub fn load(name: &str) -> Self {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name))
            .build()
            .map_err(crate::Blame::from)
            .and_then(Self::from_config);
        match settings {
            Ok(settings) => {
                tracing::trace!("Settings read from file.");
                settings
            }
            Err(e) => {
                tracing::warn!("Could not read settings: {}", e.to_string());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Arrive<Settings> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Settings::from_config(config)
    }

    #[test]
    fn missing_values_take_defaults() {
        let settings = parse("imps = 3").unwrap();
        assert_eq!(*settings.imps(), 3);
        assert_eq!(*settings.board_size(), 19);
        assert_eq!(settings.keys().get("exit").unwrap(), "Escape");
    }

    #[test]
    fn board_size_is_clamped() {
        let settings = parse("board_size = 40").unwrap();
        assert_eq!(*settings.board_size(), MAX_SIZE);
    }

    #[test]
    fn key_table_replaces_defaults() {
        let settings = parse("[keys]\nexit = \"q\"\n").unwrap();
        assert_eq!(settings.keys().len(), 1);
        assert_eq!(settings.keys().get("exit").unwrap(), "q");
    }

    #[test]
    fn wrong_types_are_blamed() {
        assert!(parse("board_size = \"big\"").is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let settings = Settings::load("no/such/settings");
        assert_eq!(settings, Settings::default());
    }
}
