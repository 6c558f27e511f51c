use tempfile::tempdir;

use slideflow_cli::{run, Args};

fn args_for(diagram: &str, output: &str) -> Args {
    Args {
        diagram: diagram.to_string(),
        output: output.to_string(),
        width: 800.0,
        height: 450.0,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_builtin_diagrams() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for diagram in ["horizontal-process", "approval-flow"] {
        let output_path = temp_dir.path().join(format!("{diagram}.svg"));
        let output = output_path.to_string_lossy().to_string();

        let result = run(&args_for(diagram, &output));
        assert!(result.is_ok(), "{diagram} failed: {:?}", result.err());

        let svg = std::fs::read_to_string(&output_path).expect("output file missing");
        assert!(svg.contains("<svg"), "{diagram} output is not SVG");
        assert!(svg.contains("</svg>"), "{diagram} output is truncated");
        assert!(svg.contains("marker-end"), "{diagram} has no arrowheads");
    }
}

#[test]
fn e2e_unknown_diagram_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir
        .path()
        .join("never.svg")
        .to_string_lossy()
        .to_string();

    let result = run(&args_for("mystery", &output));
    assert!(result.is_err());
    assert!(!std::path::Path::new(&output).exists());
}

#[test]
fn e2e_config_file_overrides_style() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[style]\nconnector_color = \"#ff0000\"\n").unwrap();

    let output_path = temp_dir.path().join("styled.svg");
    let mut args = args_for("horizontal-process", &output_path.to_string_lossy());
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("styled render failed");

    let svg = std::fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("#ff0000") || svg.contains("rgb(255, 0, 0)"));
}
