//! Pattern I: Interface Segregation
//!
//! Clients should not be forced to implement methods they do not use.

use crate::error::Result;
use std::io::Write;

// ============================================================================
// Violation: one fat trait
// ============================================================================

pub mod violation {
    use super::*;

    pub trait Worker {
        fn work(&self, out: &mut dyn Write) -> Result<()>;
        fn eat(&self, out: &mut dyn Write) -> Result<()>;
    }

    pub struct FatHuman;

    impl Worker for FatHuman {
        fn work(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Human is working")?;
            Ok(())
        }

        fn eat(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Human is eating")?;
            Ok(())
        }
    }

    pub struct FatRobot;

    impl Worker for FatRobot {
        fn work(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Robot is working")?;
            Ok(())
        }

        // Robots don't eat, but the trait demands it.
        fn eat(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Robot is charging, not eating!")?;
            Ok(())
        }
    }

    pub fn run(out: &mut dyn Write) -> Result<()> {
        let human = FatHuman;
        let robot = FatRobot;

        human.work(out)?;
        human.eat(out)?;

        robot.work(out)?;
        robot.eat(out)?;
        Ok(())
    }
}

// ============================================================================
// Corrected: narrow capability traits
// ============================================================================

pub trait Work {
    fn work(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Eat {
    fn eat(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct Human;

impl Work for Human {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is working")?;
        Ok(())
    }
}

impl Eat for Human {
    fn eat(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is eating")?;
        Ok(())
    }
}

pub struct Robot;

impl Work for Robot {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Robot is working")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let human = Human;
    let robot = Robot;

    human.work(out)?;
    human.eat(out)?;

    robot.work(out)?;
    // robot.eat(out) does not compile: Robot has no Eat impl.
    Ok(())
}
