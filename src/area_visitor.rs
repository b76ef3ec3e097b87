use std::{f64::consts::PI, io::Write};

use crate::{
    errors::Result,
    number_format::{fixed, shortest},
    options::ReportOptions,
    shapes::{Circle, Rectangle},
    visitor::Visitor,
};

pub struct ShapeAreaVisitor<W: Write> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> ShapeAreaVisitor<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        ShapeAreaVisitor { out, options }
    }

    pub fn circle_area(circle: &Circle) -> f64 {
        PI * circle.radius().powi(2)
    }

    pub fn rectangle_area(rectangle: &Rectangle) -> f64 {
        rectangle.width() * rectangle.height()
    }
}

impl<W: Write> Visitor for ShapeAreaVisitor<W> {
    fn visit_circle(&mut self, circle: &Circle) -> Result<()> {
        let area = Self::circle_area(circle);
        writeln!(
            self.out,
            "Area of Circle: {}",
            fixed(area, self.options.decimal_places)
        )?;
        Ok(())
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Result<()> {
        let area = Self::rectangle_area(rectangle);
        writeln!(self.out, "Area of Rectangle: {}", shortest(area))?;
        Ok(())
    }
}
