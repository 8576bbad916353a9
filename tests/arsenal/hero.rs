use interplay::{Command, CommandFault, Snapshottable};
use serde::{Deserialize, Serialize};

/// The receiver: a hero with limited ammunition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub rounds: u32,
    pub lives: u32,
}

impl Hero {
    pub fn new() -> Self {
        Hero {
            rounds: 10,
            lives: 5,
        }
    }

    pub fn shoot(&mut self) -> Result<u32, CommandFault> {
        if self.rounds == 0 {
            return Err("no rounds left".into());
        }
        self.rounds -= 1;
        Ok(self.rounds)
    }
}

#[derive(Serialize, Deserialize)]
pub struct HeroState {
    rounds: u32,
    lives: u32,
}

impl Snapshottable for Hero {
    type State = HeroState;

    fn capture_state(&self) -> HeroState {
        HeroState {
            rounds: self.rounds,
            lives: self.lives,
        }
    }

    fn restore_state(&mut self, state: HeroState) {
        self.rounds = state.rounds;
        self.lives = state.lives;
    }
}

/// Fire once; the output is the remaining round count.
pub struct Fire;

impl Command<Hero> for Fire {
    type Output = u32;

    fn name(&self) -> &str {
        "Fire"
    }

    fn apply(&self, hero: &mut Hero) -> Result<u32, CommandFault> {
        hero.shoot()
    }
}
