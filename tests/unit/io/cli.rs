//! Tests for argument parsing and batch file processing

#[cfg(test)]
mod tests {
    use blockplan::blocks::kind::{AllowedTypes, BlockKind};
    use blockplan::io::cli::{Cli, FileProcessor};
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::path::Path;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("blockplan").chain(args.iter().copied())).unwrap()
    }

    fn write_shape(path: &Path) {
        let mut img = RgbImage::from_pixel(40, 40, Rgb([255, 255, 255]));
        for y in 5..35 {
            for x in 5..35 {
                img.put_pixel(x, y, Rgb([30, 60, 90]));
            }
        }
        img.save(path).unwrap();
    }

    // Tests flag parsing including typed block names
    #[test]
    fn test_parse_flags() {
        let cli = parse(&[
            "shape.png",
            "-z",
            "10",
            "-y",
            "2.5",
            "--allowed",
            "25cm,2.5m",
            "--edge",
            "25cm",
            "--interior",
            "2.5m",
            "--3d",
        ]);

        assert_eq!(cli.z_value, Some(10.0));
        assert_eq!(cli.y_value, Some(2.5));
        assert_eq!(
            cli.allowed,
            Some(AllowedTypes::from_kinds([BlockKind::Small, BlockKind::Large]))
        );
        assert_eq!(cli.edge, Some(BlockKind::Small));
        assert_eq!(cli.interior, Some(BlockKind::Large));
        assert!(cli.use_3d);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests unknown block names are rejected at parse time
    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = Cli::try_parse_from(["blockplan", "a.png", "--allowed", "1m"]);
        assert!(result.is_err());
    }

    // Tests the image height is mandatory after merging sources
    #[test]
    fn test_plan_config_requires_height() {
        assert!(parse(&["a.png"]).plan_config().is_err());

        let config = parse(&["a.png", "-z", "5", "-t", "12"]).plan_config().unwrap();
        assert_eq!(config.z_value, Some(5.0));
        assert_eq!(config.threshold, 12.0);
    }

    // Tests command-line flags override config file values
    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(
            &path,
            r#"{ "z_value": 20.0, "y_value": 1.0, "allowed": ["50cm"], "threshold": 5.0 }"#,
        )
        .unwrap();

        let cli = parse(&["a.png", "-c", path.to_str().unwrap(), "-y", "3"]);
        let config = cli.plan_config().unwrap();

        assert_eq!(config.z_value, Some(20.0));
        assert_eq!(config.y_value, 3.0);
        assert_eq!(config.allowed, AllowedTypes::from_kinds([BlockKind::Medium]));
        assert_eq!(config.threshold, 5.0);
    }

    // Tests output paths sit next to the source image
    #[test]
    fn test_output_paths() {
        let input = Path::new("/data/logo.png");
        assert_eq!(
            FileProcessor::get_schematic_path(input),
            Path::new("/data/logo_schematic.png")
        );
        assert_eq!(FileProcessor::get_plan_path(input), Path::new("/data/logo_plan.json"));
    }

    // Tests a single file run writes both outputs
    #[test]
    fn test_process_single_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("logo.png");
        write_shape(&input);

        let cli = parse(&[input.to_str().unwrap(), "-z", "10", "-q"]);
        let processed = FileProcessor::without_progress(cli).process().unwrap();

        assert_eq!(processed, 1);
        assert!(dir.path().join("logo_schematic.png").exists());
        let json = std::fs::read_to_string(dir.path().join("logo_plan.json")).unwrap();
        let report: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(report["source"], "logo.png");
        assert!(report["instructions"].as_array().is_some_and(|a| !a.is_empty()));
    }

    // Tests directory runs skip generated schematics and finished files
    #[test]
    fn test_process_directory_skips() {
        let dir = TempDir::new().unwrap();
        write_shape(&dir.path().join("a.png"));
        write_shape(&dir.path().join("b.png"));
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let target = dir.path().to_str().unwrap();
        let first = FileProcessor::without_progress(parse(&[target, "-z", "10", "-q"]))
            .process()
            .unwrap();
        assert_eq!(first, 2);

        let second = FileProcessor::without_progress(parse(&[target, "-z", "10", "-q"]))
            .process()
            .unwrap();
        assert_eq!(second, 0);

        let forced = FileProcessor::without_progress(parse(&[target, "-z", "10", "-q", "-n"]))
            .process()
            .unwrap();
        assert_eq!(forced, 2);
    }

    // Tests bad targets are reported
    #[test]
    fn test_invalid_targets() {
        let dir = TempDir::new().unwrap();
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "x").unwrap();

        let cli = parse(&[text.to_str().unwrap(), "-z", "10", "-q"]);
        assert!(FileProcessor::without_progress(cli).process().is_err());

        let missing = dir.path().join("missing.png");
        let cli = parse(&[missing.to_str().unwrap(), "-z", "10", "-q"]);
        assert!(FileProcessor::without_progress(cli).process().is_err());
    }
}
