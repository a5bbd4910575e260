use crate::{Act, Settings};
use std::collections::HashMap;
use std::str::FromStr;
use winit::{event, keyboard};

/// The `Cmd` struct maps key names to an [`Act`].
///
/// The settings file reads naturally as "act = key", but on a key press we need to go the other
/// way, so `Cmd` stores the bindings inverted.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_more::Deref, derive_more::DerefMut)]
pub struct Cmd(HashMap<String, Act>);

impl Cmd {
    /// The act bound to the key press in `event`, if any.
    pub fn act(&self, event: &event::KeyEvent) -> Option<Act> {
        Self::key_name(&event.logical_key).and_then(|name| self.act_for(&name))
    }

    /// The act bound to the key called `name`.
    pub fn act_for(&self, name: &str) -> Option<Act> {
        self.0.get(name).copied()
    }

    /// How a key is written in the settings file: printable keys as themselves, named keys by
    /// their `winit` name.
    pub fn key_name(key: &keyboard::Key) -> Option<String> {
        match key {
            keyboard::Key::Character(c) => Some(c.to_string()),
            keyboard::Key::Named(named) => Some(format!("{named:?}")),
            _ => None,
        }
    }
}

/// Unknown act names are skipped with a warning rather than failing the whole table.
impl From<&Settings> for Cmd {
    fn from(settings: &Settings) -> Self {
        let mut cmd = HashMap::new();
        for (name, key) in settings.keys() {
            match Act::from_str(name) {
                Ok(act) => {
                    cmd.insert(key.clone(), act);
                }
                Err(_) => tracing::warn!("Unknown act in settings: {name}"),
            }
        }
        Self(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let cmd = Cmd::from(&Settings::default());
        assert_eq!(cmd.act_for("Escape"), Some(Act::Exit));
        assert_eq!(cmd.act_for("l"), Some(Act::LoadGame));
        assert_eq!(cmd.act_for("q"), None);
    }

    #[test]
    fn key_names_match_settings() {
        let escape = keyboard::Key::Named(keyboard::NamedKey::Escape);
        assert_eq!(Cmd::key_name(&escape).unwrap(), "Escape");
        let n = keyboard::Key::Character("n".into());
        assert_eq!(Cmd::key_name(&n).unwrap(), "n");
    }
}
