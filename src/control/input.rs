#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ThrustDirection {
    pub const ALL: [ThrustDirection; 4] = [
        ThrustDirection::Left,
        ThrustDirection::Right,
        ThrustDirection::Up,
        ThrustDirection::Down,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ClearPath,
    ToggleMapping,
    ExitFullscreen,
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrustKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ThrustKeys {
    pub fn none() -> Self {
        ThrustKeys::default()
    }

    pub fn only(direction: ThrustDirection) -> Self {
        let mut keys = ThrustKeys::none();
        keys.set(direction, true);
        keys
    }

    pub fn set(&mut self, direction: ThrustDirection, held: bool) {
        match direction {
            ThrustDirection::Left => self.left = held,
            ThrustDirection::Right => self.right = held,
            ThrustDirection::Up => self.up = held,
            ThrustDirection::Down => self.down = held,
        }
    }

    pub fn is_held(&self, direction: ThrustDirection) -> bool {
        match direction {
            ThrustDirection::Left => self.left,
            ThrustDirection::Right => self.right,
            ThrustDirection::Up => self.up,
            ThrustDirection::Down => self.down,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    /// Held directions in a fixed order: left, right, up, down.
    pub fn held(&self) -> impl Iterator<Item = ThrustDirection> + '_ {
        ThrustDirection::ALL
            .into_iter()
            .filter(move |direction| self.is_held(*direction))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub thrust: ThrustKeys,
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn idle() -> Self {
        TickInput::default()
    }

    pub fn thrusting(direction: ThrustDirection) -> Self {
        TickInput {
            thrust: ThrustKeys::only(direction),
            commands: Vec::new(),
        }
    }

    pub fn command(command: Command) -> Self {
        TickInput {
            thrust: ThrustKeys::none(),
            commands: vec![command],
        }
    }
}
