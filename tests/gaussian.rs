#[cfg(test)]
mod tests {
    use qcslice::errors::ExtractError;
    use qcslice::io::gaussian::{select_rows, Geometry, Orientation, Step};
    use qcslice::io::{Extractor, LogFile};
    use qcslice::segment::find_markers;

    const WATER: &str = "tests/gaussian/water_opt.log";

    fn z_of_oxygen(lines: &[String]) -> String {
        lines[2].split_whitespace().nth(3).unwrap().to_string()
    }

    fn extract(orientation: Orientation, step: Step) -> Vec<String> {
        let log = LogFile::open(WATER).unwrap();
        let geometry = Geometry { orientation, step };
        match geometry.extract(&log) {
            Ok(lines) => lines,
            Err(e) => panic!("{}", e),
        }
    }

    #[test]
    fn gaussian_second_cycle_starts_after_header() {
        let log = LogFile::open(WATER).unwrap();
        let markers = find_markers(&log.lines, "Input orientation:");
        assert_eq!(markers.len(), 4);
        let (first_row, rows) =
            select_rows(&log, Orientation::Input, Step::Cycle(1)).unwrap();
        assert_eq!(first_row, markers[1] + 5);
        assert_eq!(rows, &log.lines[markers[1] + 5..markers[1] + 8]);
    }

    #[test]
    fn gaussian_cycles() {
        let first = extract(Orientation::Input, Step::Cycle(0));
        let second = extract(Orientation::Input, Step::Cycle(1));
        assert_eq!(z_of_oxygen(&first), "0.110000");
        assert_eq!(z_of_oxygen(&second), "0.115000");
    }

    #[test]
    fn gaussian_last_cycle_matches_absolute() {
        let last = extract(Orientation::Input, Step::Cycle(-1));
        let absolute = extract(Orientation::Input, Step::Cycle(2));
        assert_eq!(last, absolute);
        assert_eq!(z_of_oxygen(&last), "0.119262");
    }

    #[test]
    fn gaussian_optimized_is_after_stationary_point() {
        let log = LogFile::open(WATER).unwrap();
        let markers = find_markers(&log.lines, "Input orientation:");
        let (first_row, _) =
            select_rows(&log, Orientation::Input, Step::Optimized).unwrap();
        assert_eq!(first_row, markers[3] + 5);
    }

    #[test]
    fn gaussian_optimized_xyz() {
        let lines = extract(Orientation::Input, Step::Optimized);
        assert_eq!(lines.concat(),
                   "3\n\n\
                    O\t  0.000000\t  0.000000\t  0.119262\n\
                    H\t  0.000000\t  0.763239\t -0.477047\n\
                    H\t  0.000000\t -0.763239\t -0.477047\n");
    }

    #[test]
    fn gaussian_standard_orientation() {
        let lines = extract(Orientation::Standard, Step::Optimized);
        assert_eq!(z_of_oxygen(&lines), "0.129262");
    }

    #[test]
    fn gaussian_zmatrix_missing() {
        let log = LogFile::open(WATER).unwrap();
        let geometry = Geometry { orientation: Orientation::ZMatrix,
                                  step: Step::Cycle(0) };
        assert!(matches!(geometry.extract(&log),
                         Err(ExtractError::MarkerNotFound { .. })));
    }

    #[test]
    fn gaussian_cycle_out_of_range() {
        let log = LogFile::open(WATER).unwrap();
        let geometry = Geometry { orientation: Orientation::Input,
                                  step: Step::Cycle(5) };
        match geometry.extract(&log) {
            Err(e) => assert_eq!(e.to_string(),
                                 "Cycle 5 of \"Input orientation:\" was not found, only 4 present in tests/gaussian/water_opt.log."),
            Ok(_) => panic!("Cycle 5 should not exist"),
        }
    }

    #[test]
    fn gaussian_relative_before_first_cycle() {
        let log = LogFile::open(WATER).unwrap();
        let geometry = Geometry { orientation: Orientation::Input,
                                  step: Step::Cycle(-4) };
        match geometry.extract(&log) {
            Err(e) => assert_eq!(e.to_string(),
                                 "Cycle -1 was not found in 3 cycles in tests/gaussian/water_opt.log."),
            Ok(_) => panic!("Cycle -4 should not exist"),
        }
    }
}
