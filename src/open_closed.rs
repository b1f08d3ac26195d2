//! Pattern O: Open/Closed
//!
//! Open for extension, closed for modification: new shapes plug into
//! [`print_area`] without touching it.

use crate::error::{DemoError, Result};
use crate::format::format_number;
use std::f64::consts::PI;
use std::io::Write;
use tracing::{debug, warn};

// ============================================================================
// Violation: one calculator that switches on a string tag
// ============================================================================

pub mod violation {
    use super::*;

    pub struct AreaCalculator;

    impl AreaCalculator {
        /// Every new shape means another arm here.
        pub fn try_calculate_area(&self, shape: &str, dimension1: f64, dimension2: f64) -> Result<f64> {
            match shape {
                "Circle" => Ok(PI * dimension1.powi(2)),
                "Rectangle" => Ok(dimension1 * dimension2),
                other => Err(DemoError::unknown_shape(other)),
            }
        }

        /// Unknown tags print `Unknown shape!` to `diag` and count as zero.
        pub fn calculate_area(
            &self,
            diag: &mut dyn Write,
            shape: &str,
            dimension1: f64,
            dimension2: f64,
        ) -> Result<f64> {
            match self.try_calculate_area(shape, dimension1, dimension2) {
                Ok(area) => Ok(area),
                Err(DemoError::UnknownShape { tag }) => {
                    warn!(%tag, "unknown shape, using zero area");
                    writeln!(diag, "Unknown shape!")?;
                    Ok(0.0)
                }
                Err(other) => Err(other),
            }
        }
    }

    pub fn run(
        out: &mut dyn Write,
        diag: &mut dyn Write,
        circle_radius: f64,
        rectangle_length: f64,
        rectangle_width: f64,
    ) -> Result<()> {
        let calc = AreaCalculator;

        let circle = calc.calculate_area(diag, "Circle", circle_radius, 0.0)?;
        writeln!(out, "Area of Circle: {}", format_number(circle))?;

        let rectangle = calc.calculate_area(diag, "Rectangle", rectangle_length, rectangle_width)?;
        writeln!(out, "Area of Rectangle: {}", format_number(rectangle))?;
        Ok(())
    }
}

// ============================================================================
// Corrected: a Shape trait
// ============================================================================

pub trait Shape {
    fn calculate_area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn calculate_area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Rectangle { length, width }
    }
}

impl Shape for Rectangle {
    fn calculate_area(&self) -> f64 {
        self.length * self.width
    }
}

pub fn print_area(shape: &dyn Shape, out: &mut dyn Write) -> Result<()> {
    let area = shape.calculate_area();
    debug!(area, "computed area");
    writeln!(out, "Area: {}", format_number(area))?;
    Ok(())
}

pub fn run(out: &mut dyn Write, circle_radius: f64, rectangle_length: f64, rectangle_width: f64) -> Result<()> {
    let circle = Circle::new(circle_radius);
    let rectangle = Rectangle::new(rectangle_length, rectangle_width);

    print_area(&circle, out)?;
    print_area(&rectangle, out)?;
    Ok(())
}
