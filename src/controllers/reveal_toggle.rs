/// Whether a sensitive field is currently shown in clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Masked,
    Plain,
}

/// How the paired input renders its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Masked,
    Plain,
}

impl DisplayMode {
    /// HTML `type` attribute for the input.
    pub fn input_type(self) -> &'static str {
        match self {
            DisplayMode::Masked => "password",
            DisplayMode::Plain => "text",
        }
    }
}

/// Icon shown next to the field. It names the action available, not the state:
/// `Eye` while revealed ("click to hide"), `EyeSlash` while masked ("click to reveal").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Eye,
    EyeSlash,
}

impl IconKind {
    pub fn aria_label(self) -> &'static str {
        match self {
            IconKind::Eye => "Masquer le mot de passe",
            IconKind::EyeSlash => "Afficher le mot de passe",
        }
    }
}

/// Masked/plain toggle for a password field.
///
/// Display mode and icon are both derived from one `RevealState`, so they can
/// never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealToggle {
    state: RevealState,
}

impl RevealToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Plain
    }

    /// Flips the state and returns the new `revealed` value.
    pub fn toggle(&mut self) -> bool {
        self.state = match self.state {
            RevealState::Masked => RevealState::Plain,
            RevealState::Plain => RevealState::Masked,
        };
        self.is_revealed()
    }

    pub fn current_display_mode(&self) -> DisplayMode {
        match self.state {
            RevealState::Masked => DisplayMode::Masked,
            RevealState::Plain => DisplayMode::Plain,
        }
    }

    pub fn current_icon_kind(&self) -> IconKind {
        match self.state {
            RevealState::Masked => IconKind::EyeSlash,
            RevealState::Plain => IconKind::Eye,
        }
    }
}
