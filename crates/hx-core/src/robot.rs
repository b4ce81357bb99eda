use serde::{Deserialize, Serialize};

/// A building robot running Mr. Drump's corrupted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Display name.
    pub name: String,
    /// Remaining corruption. The robot is pacified at zero or below.
    pub corruption: i32,
    /// Upper bound of the robot's focus drain roll.
    pub max_focus_drain: i32,
}

impl Robot {
    /// Create a robot.
    pub fn new(name: impl Into<String>, corruption: i32, max_focus_drain: i32) -> Self {
        Self {
            name: name.into(),
            corruption,
            max_focus_drain,
        }
    }

    /// Whether the robot's corruption has been cleared.
    pub fn is_pacified(&self) -> bool {
        self.corruption <= 0
    }

    /// Apply reprogramming progress. Returns the remaining corruption.
    pub fn reprogram(&mut self, progress: i32) -> i32 {
        self.corruption -= progress;
        self.corruption
    }
}

impl std::fmt::Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (corruption {}, drain 1-{})",
            self.name, self.corruption, self.max_focus_drain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprogram_until_pacified() {
        let mut robot = Robot::new("TPS Report Drone", 4, 4);
        assert!(!robot.is_pacified());
        assert_eq!(robot.reprogram(3), 1);
        assert!(!robot.is_pacified());
        assert_eq!(robot.reprogram(3), -2);
        assert!(robot.is_pacified());
    }

    #[test]
    fn display() {
        let robot = Robot::new("Aggressive BaristaBot", 4, 4);
        assert_eq!(
            robot.to_string(),
            "Aggressive BaristaBot (corruption 4, drain 1-4)"
        );
    }
}
