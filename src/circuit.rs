use core::ops::Not;

/// Digital signal level of the switch input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// How the switch input line is biased when the contacts are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullMode {
    /// External pull-down resistor: the line rests low, pressing drives it
    /// high.
    PullDown,
    /// No external resistor, the MCU's internal pull-up biases the line high;
    /// pressing shorts it to ground.
    PullUpInternal,
}

/// Polarity of one switch circuit, resolved once at initialization.
///
/// Holds the raw level observed while the button is held
/// ([`active_level`](Self::active_level)) and its inverse for the released
/// state. A wrong [`PullMode`] inverts the logical behavior; it never faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchCircuit {
    active: Level,
}

impl SwitchCircuit {
    /// Derives the active/inactive pair from the circuit's pull configuration.
    pub fn from_pull(pull: PullMode) -> Self {
        let active = match pull {
            PullMode::PullDown => Level::High,
            PullMode::PullUpInternal => Level::Low,
        };
        SwitchCircuit { active }
    }

    /// Raw level observed while the button is physically pressed.
    pub fn active_level(&self) -> Level {
        self.active
    }

    /// Raw level observed while the button is released.
    pub fn inactive_level(&self) -> Level {
        !self.active
    }
}

/// Debounce timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Minimum time in milliseconds the line must stay at the inactive level
    /// after a press before the press is confirmed.
    pub window_ms: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        DebounceConfig { window_ms: 50 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_down_is_active_high() {
        let circuit = SwitchCircuit::from_pull(PullMode::PullDown);
        assert_eq!(circuit.active_level(), Level::High);
        assert_eq!(circuit.inactive_level(), Level::Low);
    }

    #[test]
    fn internal_pull_up_is_active_low() {
        let circuit = SwitchCircuit::from_pull(PullMode::PullUpInternal);
        assert_eq!(circuit.active_level(), Level::Low);
        assert_eq!(circuit.inactive_level(), Level::High);
    }

    #[test]
    fn levels_always_differ() {
        for pull in [PullMode::PullDown, PullMode::PullUpInternal] {
            let circuit = SwitchCircuit::from_pull(pull);
            assert_ne!(circuit.active_level(), circuit.inactive_level());
        }
    }
}
