//! Sparse settings change request.

/// A set of optional field changes for [`GlobalGameSettings`].
///
/// Absent fields (`None`) leave the corresponding setting untouched.
/// Enumerated fields carry the raw ordinal supplied by the caller; they are
/// range-checked when applied.
///
/// [`GlobalGameSettings`]: super::game_settings::GlobalGameSettings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSettingsUpdate {
    pub speed: Option<i64>,
    pub objective: Option<i64>,
    pub start_wares: Option<i64>,
    pub fow: Option<i64>,
    pub locked_teams: Option<bool>,
    pub team_view: Option<bool>,
    pub random_start_position: Option<bool>,
}

impl GameSettingsUpdate {
    /// Script-visible field names, in application order.
    pub const FIELDS: [&'static str; 7] = [
        "speed",
        "objective",
        "startWares",
        "fow",
        "lockedTeams",
        "teamView",
        "randomStartPosition",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: i64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_objective(mut self, objective: i64) -> Self {
        self.objective = Some(objective);
        self
    }

    pub fn with_start_wares(mut self, start_wares: i64) -> Self {
        self.start_wares = Some(start_wares);
        self
    }

    pub fn with_fow(mut self, fow: i64) -> Self {
        self.fow = Some(fow);
        self
    }

    pub fn with_locked_teams(mut self, locked: bool) -> Self {
        self.locked_teams = Some(locked);
        self
    }

    pub fn with_team_view(mut self, team_view: bool) -> Self {
        self.team_view = Some(team_view);
        self
    }

    pub fn with_random_start_position(mut self, random: bool) -> Self {
        self.random_start_position = Some(random);
        self
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
