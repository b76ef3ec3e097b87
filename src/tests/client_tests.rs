#[cfg(test)]
mod tests {
    use std::{
        io::{self, Write},
        process::ExitCode,
    };

    use crate::{
        client::{default_shapes, report, run},
        errors::Error,
        options::ReportOptions,
    };

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_shapes_has_circle_then_rectangle() {
        let shapes = default_shapes();
        assert!(shapes.len() == 2);
        assert!(format!("{:?}", shapes[0]) == "Circle { radius: 5.0 }");
        assert!(format!("{:?}", shapes[1]) == "Rectangle { width: 10.0, height: 15.0 }");
    }

    #[test]
    fn run_prints_full_report() {
        let mut buffer: Vec<u8> = vec![];
        run(&mut buffer, ReportOptions::default()).unwrap();

        let expected = "\
Calculating areas using ShapeAreaVisitor:
Area of Circle: 78.54
Area of Rectangle: 150

Calculating perimeters using ShapePerimeterVisitor:
Perimeter of Circle: 31.42
Perimeter of Rectangle: 50
";
        assert!(String::from_utf8(buffer).unwrap() == expected);
    }

    #[test]
    fn run_reports_write_failure() {
        let result = run(&mut ClosedPipe, ReportOptions::default());
        assert!(matches!(result, Err(Error::Output(err)) if err.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn report_exit_codes() {
        let mut buffer: Vec<u8> = vec![];
        assert!(report(&mut buffer, ReportOptions::default()) == ExitCode::SUCCESS);
        assert!(report(&mut ClosedPipe, ReportOptions::default()) == ExitCode::FAILURE);
    }
}
