//! When a host should call `generate()`. The generator itself never polls.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationMode {
    #[default]
    LevelStart,
    Event,
    Trigger,
}

/// Something that happened in the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationSignal {
    LevelStart,
    Event,
    RegionEntered,
}

impl ActivationMode {
    pub fn fires_on(self, signal: ActivationSignal) -> bool {
        matches!(
            (self, signal),
            (Self::LevelStart, ActivationSignal::LevelStart)
                | (Self::Event, ActivationSignal::Event)
                | (Self::Trigger, ActivationSignal::RegionEntered)
        )
    }
}
