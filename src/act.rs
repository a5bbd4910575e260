/// The `Act` enum lists the things a user can ask of `hoshi` from the keyboard.
///
/// In `Hoshi.toml`, the `[keys]` table maps the snake case name of an act to a key, so
/// `load_game = "l"` binds [`Act::LoadGame`] to the `l` key.  Named keys use their `winit` names,
/// like `Escape` or `F1`.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Act {
    /// Close all windows and quit.
    Exit,
    /// Open another board.
    NewWindow,
    /// Close the current board.
    CloseWindow,
    /// Replace the current board with the game record from the settings.
    LoadGame,
    /// Remove every stone.
    ClearBoard,
    /// Summon background players onto the current board.
    Summon,
    /// Show or hide coordinate labels.
    Coordinates,
    /// Enter or leave scoring mode.
    Scoring,
    /// Do nothing at all.
    #[default]
    Be,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acts_use_snake_case() {
        assert_eq!("load_game".parse::<Act>().unwrap(), Act::LoadGame);
        assert_eq!(Act::NewWindow.to_string(), "new_window");
        assert!("LoadGame".parse::<Act>().is_err());
    }

    #[test]
    fn every_act_round_trips_its_name() {
        use strum::IntoEnumIterator;
        for act in Act::iter() {
            assert_eq!(act.to_string().parse::<Act>().unwrap(), act);
        }
    }
}
