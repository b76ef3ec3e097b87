use std::{io::Write, process::ExitCode};

use tracing::{debug, error};

use crate::{
    area_visitor::ShapeAreaVisitor,
    errors::Result,
    options::ReportOptions,
    perimeter_visitor::ShapePerimeterVisitor,
    shapes::{Circle, Rectangle, Shape},
    visitor::Visitor,
};

pub fn default_shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Circle::new(5.0)),
        Box::new(Rectangle::new(10.0, 15.0)),
    ]
}

/// Visits shapes in order, stopping at the first write failure.
pub fn visit_all(shapes: &[Box<dyn Shape>], visitor: &mut dyn Visitor) -> Result<()> {
    for shape in shapes {
        shape.accept(visitor)?;
    }
    Ok(())
}

pub fn run<W: Write>(out: &mut W, options: ReportOptions) -> Result<()> {
    let shapes = default_shapes();
    debug!(count = shapes.len(), "running shape visitors");

    writeln!(out, "Calculating areas using ShapeAreaVisitor:")?;
    let mut area_visitor = ShapeAreaVisitor::new(&mut *out, options);
    visit_all(&shapes, &mut area_visitor)?;

    writeln!(out)?;

    writeln!(out, "Calculating perimeters using ShapePerimeterVisitor:")?;
    let mut perimeter_visitor = ShapePerimeterVisitor::new(&mut *out, options);
    visit_all(&shapes, &mut perimeter_visitor)?;

    out.flush()?;
    Ok(())
}

/// Runs the report, logging a failure instead of surfacing it.
pub fn report<W: Write>(out: &mut W, options: ReportOptions) -> ExitCode {
    match run(out, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "shape report failed");
            ExitCode::FAILURE
        }
    }
}
