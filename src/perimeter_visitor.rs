use std::{f64::consts::PI, io::Write};

use crate::{
    errors::Result,
    number_format::{fixed, shortest},
    options::ReportOptions,
    shapes::{Circle, Rectangle},
    visitor::Visitor,
};

pub struct ShapePerimeterVisitor<W: Write> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> ShapePerimeterVisitor<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        ShapePerimeterVisitor { out, options }
    }

    pub fn circle_perimeter(circle: &Circle) -> f64 {
        2.0 * PI * circle.radius()
    }

    pub fn rectangle_perimeter(rectangle: &Rectangle) -> f64 {
        2.0 * (rectangle.width() + rectangle.height())
    }
}

impl<W: Write> Visitor for ShapePerimeterVisitor<W> {
    fn visit_circle(&mut self, circle: &Circle) -> Result<()> {
        let perimeter = Self::circle_perimeter(circle);
        writeln!(
            self.out,
            "Perimeter of Circle: {}",
            fixed(perimeter, self.options.decimal_places)
        )?;
        Ok(())
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Result<()> {
        let perimeter = Self::rectangle_perimeter(rectangle);
        writeln!(self.out, "Perimeter of Rectangle: {}", shortest(perimeter))?;
        Ok(())
    }
}
