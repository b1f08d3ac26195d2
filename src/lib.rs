//! # SOLID Principles in Rust
//!
//! One module per principle, each with a `violation` rendition and a
//! corrected one:
//!
//! ## S: Single Responsibility
//! - Pay calculation split from persistence
//!
//! ## O: Open/Closed
//! - String-tag area calculator vs. a `Shape` trait
//!
//! ## L: Liskov Substitution
//! - Parrots and penguins behind one `Bird` trait
//!
//! ## I: Interface Segregation
//! - Fat `Worker` trait vs. narrow `Work` / `Eat` capabilities
//!
//! ## D: Dependency Inversion
//! - Report generator hard-wired to a file vs. injected `DataSaver`
//!
//! Run with: `cargo run --bin solid -- [dip|lsp|isp|ocp|srp|all]`

pub mod config;
pub mod dependency_inversion;
pub mod error;
pub mod format;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod logging;
pub mod open_closed;
pub mod single_responsibility;

pub use config::DemoConfig;
pub use error::{ConfigError, DemoError, Result};

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// S, O, L, I, D.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }

    /// Whether the demo ships a "before" rendition. Only LSP does not.
    pub fn has_violation(&self) -> bool {
        !matches!(self, Principle::LiskovSubstitution)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendition {
    Violation,
    Corrected,
}

/// Runs one rendition of one demo. `diag` receives the non-fatal
/// diagnostics the violation renditions print to stderr.
pub fn run_demo(
    principle: Principle,
    rendition: Rendition,
    config: &DemoConfig,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<()> {
    tracing::debug!(?principle, ?rendition, "running demo");

    let shapes = &config.shapes;
    let employee = &config.employee;
    match (principle, rendition) {
        (Principle::SingleResponsibility, Rendition::Violation) => single_responsibility::violation::run(
            out,
            &employee.name,
            employee.hourly_rate,
            employee.hours_worked,
        ),
        (Principle::SingleResponsibility, Rendition::Corrected) => {
            single_responsibility::run(out, &employee.name, employee.hourly_rate, employee.hours_worked)
        }
        (Principle::OpenClosed, Rendition::Violation) => open_closed::violation::run(
            out,
            diag,
            shapes.circle_radius,
            shapes.rectangle_length,
            shapes.rectangle_width,
        ),
        (Principle::OpenClosed, Rendition::Corrected) => open_closed::run(
            out,
            shapes.circle_radius,
            shapes.rectangle_length,
            shapes.rectangle_width,
        ),
        (Principle::LiskovSubstitution, _) => {
            liskov_substitution::run(out, &config.birds.parrot, &config.birds.penguin)
        }
        (Principle::InterfaceSegregation, Rendition::Violation) => interface_segregation::violation::run(out),
        (Principle::InterfaceSegregation, Rendition::Corrected) => interface_segregation::run(out),
        (Principle::DependencyInversion, Rendition::Violation) => {
            dependency_inversion::violation::run(out, &config.report.payload)
        }
        (Principle::DependencyInversion, Rendition::Corrected) => {
            dependency_inversion::run(out, &config.report.payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(principle: Principle, rendition: Rendition) -> (String, String) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        run_demo(principle, rendition, &DemoConfig::default(), &mut out, &mut diag).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(diag).unwrap())
    }

    #[test]
    fn test_every_demo_runs_with_defaults() {
        for principle in Principle::ALL {
            for rendition in [Rendition::Violation, Rendition::Corrected] {
                let (out, diag) = render(principle, rendition);
                assert!(!out.is_empty(), "{principle:?}/{rendition:?} printed nothing");
                assert!(diag.is_empty());
            }
        }
    }

    #[test]
    fn test_lsp_has_a_single_rendition() {
        assert!(!Principle::LiskovSubstitution.has_violation());
        assert_eq!(
            render(Principle::LiskovSubstitution, Rendition::Violation),
            render(Principle::LiskovSubstitution, Rendition::Corrected)
        );
    }

    #[test]
    fn test_config_flows_into_demos() {
        let mut config = DemoConfig::default();
        config.employee.name = "Grace".to_string();
        config.shapes.rectangle_width = 2.0;

        let mut out = Vec::new();
        let mut diag = Vec::new();
        run_demo(Principle::SingleResponsibility, Rendition::Corrected, &config, &mut out, &mut diag).unwrap();
        run_demo(Principle::OpenClosed, Rendition::Corrected, &config, &mut out, &mut diag).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Saving Grace to the database."));
        assert!(output.contains("Area: 10\n"));
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = Principle::ALL.iter().map(Principle::title).collect();
        assert_eq!(titles[0], "Single Responsibility");
        assert_eq!(titles[4], "Dependency Inversion");
    }
}
