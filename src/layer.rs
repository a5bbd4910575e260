/// Something happened on the board that might change what is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Notice {
    /// The view size or the board size changed.
    Geometry,
    /// Stones were placed or removed.
    Stones,
    /// The cross-hair moved, appeared or disappeared.
    CrossHair,
    /// Coordinate labels were switched on or off.
    Coordinates,
    /// Scoring mode was entered or left.
    Scoring,
}

/// Which optional layers are switched on.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, derive_new::new)]
pub struct Overlays {
    pub coordinates: bool,
    pub scoring: bool,
}

/// The draw passes of the board, in the order they are painted.  Later layers paint over
/// earlier ones.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum Layer {
    ViewBackground,
    BoardBackground,
    Grid,
    CrossHairLines,
    StarPoints,
    Stones,
    CrossHairStone,
    Symbols,
    Coordinates,
    Territory,
    DeadStones,
}

impl Layer {
    /// All layers in paint order.
    pub fn stack() -> impl Iterator<Item = Layer> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Whether the layer takes part in drawing under the current `overlays`.
    pub fn visible(&self, overlays: &Overlays) -> bool {
        match self {
            Self::Coordinates => overlays.coordinates,
            Self::Territory | Self::DeadStones => overlays.scoring,
            _ => true,
        }
    }

    /// Each layer decides for itself whether a notice concerns it.  Geometry concerns everybody.
    pub fn affected_by(&self, notice: &Notice) -> bool {
        match notice {
            Notice::Geometry => true,
            Notice::Stones => matches!(
                self,
                Self::Stones | Self::Symbols | Self::Territory | Self::DeadStones
            ),
            Notice::CrossHair => matches!(self, Self::CrossHairLines | Self::CrossHairStone),
            Notice::Coordinates => matches!(self, Self::Coordinates),
            Notice::Scoring => matches!(self, Self::Territory | Self::DeadStones),
        }
    }

    /// True if any visible layer cares about `notice`.
    pub fn any_affected(notice: &Notice, overlays: &Overlays) -> bool {
        Self::stack().any(|layer| layer.visible(overlays) && layer.affected_by(notice))
    }
}
