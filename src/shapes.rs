use std::fmt::Debug;

use tracing::trace;

use crate::{errors::Result, visitor::Visitor};

pub trait Shape: Debug {
    /// Hands `self` to the visitor operation matching this variant.
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Circle::new(2.0)
    }
}

impl Shape for Circle {
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()> {
        trace!(radius = self.radius, "dispatching circle");
        visitor.visit_circle(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Rectangle::new(4.0, 6.0)
    }
}

impl Shape for Rectangle {
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()> {
        trace!(width = self.width, height = self.height, "dispatching rectangle");
        visitor.visit_rectangle(self)
    }
}
