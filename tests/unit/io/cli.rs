//! Tests for command-line parsing and end-to-end ordering

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use mosaicorder::io::cli::{Cli, OrderingProcessor};
    use mosaicorder::io::configuration::{DEFAULT_REFERENCE, DEFAULT_SEED, DEFAULT_TRIALS};
    use mosaicorder::{MosaicError, TrialMode};
    use std::path::{Path, PathBuf};

    fn save_gray(path: &Path, width: u32, height: u32, level: u8) {
        RgbImage::from_pixel(width, height, Rgb([level, level, level]))
            .save(path)
            .expect("Failed to save image");
    }

    // Dark tiles sort before light ones: a=0, b=255, c=10, d=250
    fn stripes_workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tiles = dir.path().join("tiles");
        std::fs::create_dir(&tiles).expect("Failed to create tiles dir");
        for (name, level) in [("a.png", 0), ("b.png", 255), ("c.png", 10), ("d.png", 250)] {
            save_gray(&tiles.join(name), 4, 4, level);
        }

        RgbImage::from_fn(2, 2, |x, _| {
            if x == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
        .save(dir.path().join("reference.png"))
        .expect("Failed to save reference");
        dir
    }

    fn args(dir: &Path, extra: &[&str]) -> Cli {
        let tiles = dir.join("tiles");
        let reference = dir.join("reference.png");
        let mut argv = vec![
            "program".to_string(),
            tiles.to_string_lossy().to_string(),
            reference.to_string_lossy().to_string(),
            "--quiet".to_string(),
        ];
        argv.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(argv)
    }

    // Tests CLI parsing with only the required tile directory
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "tiles"]);

        assert_eq!(cli.tiles, PathBuf::from("tiles"));
        assert_eq!(cli.reference, PathBuf::from(DEFAULT_REFERENCE));
        assert_eq!(cli.width, None);
        assert_eq!(cli.trials, DEFAULT_TRIALS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(!cli.duplicates);
        assert!(!cli.sequential);
        assert!(!cli.quiet);
        assert!(cli.output.is_none());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "tiles",
            "ref.png",
            "--width",
            "8",
            "--duplicates",
            "--trials",
            "3",
            "--seed",
            "123",
            "--sequential",
            "--quiet",
            "--output",
            "ordering.txt",
        ]);

        assert_eq!(cli.reference, PathBuf::from("ref.png"));
        assert_eq!(cli.width, Some(8));
        assert!(cli.duplicates);
        assert_eq!(cli.trials, 3);
        assert_eq!(cli.seed, 123);
        assert!(cli.sequential);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.output, Some(PathBuf::from("ordering.txt")));
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "tiles", "-w", "5", "-d", "-t", "2", "-s", "9", "-q"]);

        assert_eq!(cli.width, Some(5));
        assert!(cli.duplicates);
        assert_eq!(cli.trials, 2);
        assert_eq!(cli.seed, 9);
        assert!(cli.quiet);
    }

    // Tests grid size and assigner configuration derived from arguments
    // Verified by ignoring the explicit width
    #[test]
    fn test_cli_derived_settings() {
        let default_width = Cli::parse_from(["program", "tiles"]);
        assert_eq!(default_width.grid_size(17), 4);

        let explicit = Cli::parse_from(["program", "tiles", "--width", "2", "--duplicates", "--sequential"]);
        assert_eq!(explicit.grid_size(17), 2);

        let config = explicit.assigner_config();
        assert!(config.mode.allows_duplicates());
        assert!(!config.parallel);
        assert_eq!(default_width.assigner_config().mode, TrialMode::Distinct);
    }

    // Tests the full pipeline on the stripes scenario
    // Verified by reading tiles in directory order
    #[test]
    fn test_order_end_to_end() {
        let dir = stripes_workspace();
        let assignment = OrderingProcessor::new(args(dir.path(), &[]))
            .order()
            .expect("Ordering failed");

        assert_eq!(assignment.size(), 2);
        let names: Vec<_> = assignment
            .cells()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert!(matches!(names[0], "a.png" | "c.png"));
        assert!(matches!(names[1], "b.png" | "d.png"));
        assert!(matches!(names[2], "a.png" | "c.png"));
        assert!(matches!(names[3], "b.png" | "d.png"));
        assert!((assignment.mean_score() - 93.75).abs() < 1e-9);
    }

    // Tests the ordering is written to the output file
    // Verified by writing to stdout regardless of the output flag
    #[test]
    fn test_process_writes_output() {
        let dir = stripes_workspace();
        let output = dir.path().join("out").join("ordering.txt");
        let output_arg = output.to_string_lossy().to_string();

        OrderingProcessor::new(args(dir.path(), &["--output", &output_arg]))
            .process()
            .expect("Processing failed");

        let text = std::fs::read_to_string(&output).expect("Failed to read output");
        assert_eq!(text.lines().count(), 4);
    }

    // Tests a non-square reference aborts before assignment
    // Verified by cropping the reference to a square
    #[test]
    fn test_order_rejects_non_square_reference() {
        let dir = stripes_workspace();
        save_gray(&dir.path().join("reference.png"), 6, 4, 0);

        let result = OrderingProcessor::new(args(dir.path(), &[])).order();
        assert!(matches!(result, Err(MosaicError::ReferenceNotSquare { .. })));
    }

    // Tests an oversized grid without duplicates exhausts the pool
    // Verified by allowing duplicates implicitly
    #[test]
    fn test_order_pool_exhausted_without_duplicates() {
        let dir = stripes_workspace();

        let result = OrderingProcessor::new(args(dir.path(), &["--width", "3"])).order();
        assert!(matches!(
            result,
            Err(MosaicError::PoolExhausted {
                required: 9,
                available: 4
            })
        ));

        let with_duplicates =
            OrderingProcessor::new(args(dir.path(), &["--width", "3", "--duplicates"]))
                .order()
                .expect("Ordering with duplicates failed");
        assert_eq!(with_duplicates.cells().len(), 9);
    }
}
