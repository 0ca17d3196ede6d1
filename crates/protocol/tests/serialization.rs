use akmc_protocol::*;
use std::path::PathBuf;

#[test]
fn test_tools_config_defaults_from_empty_toml() {
    let config: ToolsConfig = toml::from_str("").expect("Failed to deserialize empty config");

    assert_eq!(config, ToolsConfig::default());
    assert_eq!(config.input_extension, "con");
    assert_eq!(config.converter.still.program, "ase");
    assert_eq!(config.converter.movie.program, "python3");
    assert_eq!(config.deck_writer.program, "pandoc");
    assert_eq!(config.formats.single, "xyz");
}

#[test]
fn test_tools_config_partial_override() {
    let toml_str = r#"
input-extension = "CON"

[converter.still]
program = "obabel"
args = ["{input}", "-O", "{output}"]

[formats.jsmol]
still = "pdb"
movie = "pdb"

[deck-writer]
program = "soffice"
template-args = []
"#;

    let config: ToolsConfig = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.input_extension, "CON");
    assert_eq!(config.converter.still.program, "obabel");
    assert_eq!(config.converter.still.args, vec!["{input}", "-O", "{output}"]);
    // Untouched sections keep their defaults
    assert_eq!(config.converter.movie, ConverterConfig::default().movie);
    assert_eq!(config.formats.table, OutputFormats::new("png", "gif"));
    assert_eq!(config.formats.jsmol, OutputFormats::new("pdb", "pdb"));
    assert_eq!(config.deck_writer.program, "soffice");
    assert_eq!(config.deck_writer.args, DeckWriterConfig::default().args);
    assert!(config.deck_writer.template_args.is_empty());
}

#[test]
fn test_tools_config_partial_tables_keep_defaults() {
    let toml_str = r#"
[viewer]
args = ["-v", "{input}"]

[converter.movie]
program = "python"

[formats.table]
still = "jpg"

[formats.jsmol]
movie = "pdb"
"#;

    let config: ToolsConfig = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.viewer.program, "ase");
    assert_eq!(config.viewer.args, vec!["-v", "{input}"]);
    assert_eq!(config.converter.movie.program, "python");
    assert_eq!(config.converter.movie.args, ConverterConfig::default().movie.args);
    assert_eq!(config.converter.still, ConverterConfig::default().still);
    // Each report kind falls back to its own defaults
    assert_eq!(config.formats.table, OutputFormats::new("jpg", "gif"));
    assert_eq!(config.formats.jsmol, OutputFormats::new("xyz", "pdb"));
    assert_eq!(config.formats.slides, OutputFormats::new("png", "gif"));
}

#[test]
fn test_formats_for_report_kind() {
    let formats = FormatsConfig::default();

    assert_eq!(formats.for_report(ReportKind::Table).extension(RenderMode::Still), "png");
    assert_eq!(formats.for_report(ReportKind::Slides).extension(RenderMode::Movie), "gif");
    assert_eq!(formats.for_report(ReportKind::Jsmol).extension(RenderMode::Movie), "xyz");
}

#[test]
fn test_artifact_role_file_names() {
    assert_eq!(ArtifactRole::Reactant.file_name("7", "con"), "reactant_7.con");
    assert_eq!(ArtifactRole::Saddle.file_stem("12"), "saddle_12");
    assert_eq!(ArtifactRole::Reaction.file_name("3", "gif"), "reaction_3.gif");
    assert_eq!(
        ArtifactRole::ENDPOINTS,
        [ArtifactRole::Reactant, ArtifactRole::Saddle, ArtifactRole::Product]
    );
}

#[test]
fn test_render_mode_from_flag() {
    assert_eq!(RenderMode::from_movies_flag(true), RenderMode::Movie);
    assert_eq!(RenderMode::from_movies_flag(false), RenderMode::Still);
    assert_eq!(RenderMode::default(), RenderMode::Still);
    assert!(RenderMode::Movie.is_movie());
}

#[test]
fn test_report_kind_default_file_names() {
    assert_eq!(ReportKind::Table.default_file_name(), "index.html");
    assert_eq!(ReportKind::Jsmol.default_file_name(), "index.html");
    assert_eq!(ReportKind::Slides.default_file_name(), "states.pptx");
}

#[test]
fn test_process_record_serialization() {
    let record = ProcessRecord {
        state_id: "0".to_string(),
        process_id: "4".to_string(),
        mode: RenderMode::Movie,
        artifacts: vec![Artifact::new(
            ArtifactRole::Reaction,
            PathBuf::from("states/0/procdata/reaction_4.gif"),
        )],
    };

    let json = serde_json::to_value(&record).expect("Failed to serialize ProcessRecord");
    assert_eq!(json["mode"], "movie");
    assert_eq!(json["artifacts"][0]["role"], "reaction");

    let deserialized: ProcessRecord =
        serde_json::from_value(json).expect("Failed to deserialize ProcessRecord");
    assert_eq!(deserialized, record);
    assert_eq!(
        deserialized.artifact(ArtifactRole::Reaction),
        Some(PathBuf::from("states/0/procdata/reaction_4.gif").as_path())
    );
    assert_eq!(deserialized.artifact(ArtifactRole::Saddle), None);
}

#[test]
fn test_walk_event_tagged_serialization() {
    let event = WalkEvent::RecordEmitted {
        state_id: "0".to_string(),
        process_id: "3".to_string(),
        index: 0,
    };

    let json = serde_json::to_value(&event).expect("Failed to serialize WalkEvent");
    assert_eq!(json["type"], "recordEmitted");
    assert_eq!(json["payload"]["process_id"], "3");

    let deserialized: WalkEvent =
        serde_json::from_value(json).expect("Failed to deserialize WalkEvent");
    assert_eq!(deserialized, event);
}

#[test]
fn test_walk_status_serialization() {
    let json = serde_json::to_value(WalkStatus::Finalized).expect("Failed to serialize WalkStatus");
    assert_eq!(json, "FINALIZED");

    let status: WalkStatus =
        serde_json::from_value(serde_json::json!("FAILED")).expect("Failed to deserialize");
    assert_eq!(status, WalkStatus::Failed);
}
