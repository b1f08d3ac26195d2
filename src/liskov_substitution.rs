//! Pattern L: Liskov Substitution
//!
//! Any [`Bird`] can be handed to [`make_bird_fly`] without the caller
//! knowing which kind it got.

use crate::error::Result;
use std::io::Write;
use tracing::debug;

pub trait Bird {
    fn name(&self) -> &str;

    /// Plain flight; birds with something to add override it.
    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} is flying.", self.name())?;
        Ok(())
    }
}

pub struct Parrot {
    name: String,
}

impl Parrot {
    pub fn new(name: impl Into<String>) -> Self {
        Parrot { name: name.into() }
    }
}

impl Bird for Parrot {
    fn name(&self) -> &str {
        &self.name
    }

    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} is flying and talking!", self.name)?;
        Ok(())
    }
}

pub struct Penguin {
    name: String,
}

impl Penguin {
    pub fn new(name: impl Into<String>) -> Self {
        Penguin { name: name.into() }
    }
}

impl Bird for Penguin {
    fn name(&self) -> &str {
        &self.name
    }

    fn fly(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} cannot fly.", self.name)?;
        Ok(())
    }
}

// No downcasting, no matching on the concrete type.
pub fn make_bird_fly(bird: &dyn Bird, out: &mut dyn Write) -> Result<()> {
    debug!(bird = bird.name(), "asking bird to fly");
    bird.fly(out)
}

pub fn run(out: &mut dyn Write, parrot_name: &str, penguin_name: &str) -> Result<()> {
    let parrot = Parrot::new(parrot_name);
    let penguin = Penguin::new(penguin_name);

    make_bird_fly(&parrot, out)?;
    make_bird_fly(&penguin, out)?;
    Ok(())
}
