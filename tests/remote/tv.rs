use interplay::Snapshottable;
use serde::{Deserialize, Serialize};

/// The receiver behind the remote control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tv {
    pub powered: bool,
    pub channel: u8,
}

impl Tv {
    pub fn new() -> Self {
        Tv {
            powered: false,
            channel: 1,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct TvState {
    powered: bool,
    channel: u8,
}

impl Snapshottable for Tv {
    type State = TvState;

    fn capture_state(&self) -> TvState {
        TvState {
            powered: self.powered,
            channel: self.channel,
        }
    }

    fn restore_state(&mut self, state: TvState) {
        self.powered = state.powered;
        self.channel = state.channel;
    }
}
