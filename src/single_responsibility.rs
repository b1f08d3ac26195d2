//! Pattern S: Single Responsibility
//!
//! A type should have only one reason to change. Pay calculation and
//! persistence live in separate types.

use crate::error::Result;
use crate::format::format_number;
use std::io::Write;
use tracing::debug;

// ============================================================================
// Violation: the employee computes pay and saves itself
// ============================================================================

pub mod violation {
    use super::*;

    pub struct GodEmployee {
        pub name: String,
        pub hourly_rate: f64,
        pub hours_worked: u32,
    }

    impl GodEmployee {
        pub fn new(name: impl Into<String>, hourly_rate: f64, hours_worked: u32) -> Self {
            GodEmployee {
                name: name.into(),
                hourly_rate,
                hours_worked,
            }
        }

        pub fn calculate_salary(&self) -> f64 {
            self.hourly_rate * f64::from(self.hours_worked)
        }

        // A second reason to change.
        pub fn save_to_database(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Saving {} to the database.", self.name)?;
            Ok(())
        }
    }

    pub fn run(out: &mut dyn Write, name: &str, hourly_rate: f64, hours_worked: u32) -> Result<()> {
        let emp = GodEmployee::new(name, hourly_rate, hours_worked);
        writeln!(out, "Salary: {}", format_number(emp.calculate_salary()))?;
        emp.save_to_database(out)
    }
}

// ============================================================================
// Corrected
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub hourly_rate: f64,
    pub hours_worked: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, hourly_rate: f64, hours_worked: u32) -> Self {
        Employee {
            name: name.into(),
            hourly_rate,
            hours_worked,
        }
    }

    pub fn calculate_salary(&self) -> f64 {
        self.hourly_rate * f64::from(self.hours_worked)
    }
}

pub struct Database;

impl Database {
    /// Acknowledges the save; nothing is stored.
    pub fn save_to_database(&self, out: &mut dyn Write, emp: &Employee) -> Result<()> {
        debug!(employee = %emp.name, "saving employee");
        writeln!(out, "Saving {} to the database.", emp.name)?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write, name: &str, hourly_rate: f64, hours_worked: u32) -> Result<()> {
    let emp = Employee::new(name, hourly_rate, hours_worked);
    let db = Database;

    writeln!(out, "Salary: {}", format_number(emp.calculate_salary()))?;
    db.save_to_database(out, &emp)
}
