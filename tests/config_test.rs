use fretforge::config::ScoringWeights;
use fretforge::consts::*;
use fretforge::FretForgeError;

#[test]
fn test_defaults_match_named_constants() {
    let w = ScoringWeights::default();
    assert_eq!(w.weight_finger_count, DEFAULT_WEIGHT_FINGER_COUNT);
    assert_eq!(w.weight_fret_span, DEFAULT_WEIGHT_FRET_SPAN);
    assert_eq!(w.weight_position, DEFAULT_WEIGHT_POSITION);
    assert_eq!(w.weight_barre_base, DEFAULT_WEIGHT_BARRE_BASE);
    assert_eq!(w.weight_barre_length, DEFAULT_WEIGHT_BARRE_LENGTH);
    assert_eq!(w.weight_stretch_variance, DEFAULT_WEIGHT_STRETCH_VARIANCE);
    assert_eq!(w.weight_fret_inversion, DEFAULT_WEIGHT_FRET_INVERSION);
    assert_eq!(w.max_fret_span, DEFAULT_MAX_FRET_SPAN);
    assert!(w.validate().is_ok());
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    std::fs::write(&path, r#"{ "weight_fret_inversion": 50.0, "max_fret_span": 5 }"#).unwrap();

    let w = ScoringWeights::load_from_file(&path).unwrap();
    assert_eq!(w.weight_fret_inversion, 50.0);
    assert_eq!(w.max_fret_span, 5);
    assert_eq!(w.weight_barre_base, DEFAULT_WEIGHT_BARRE_BASE);
}

#[test]
fn test_invalid_weight_files() {
    let dir = tempfile::tempdir().unwrap();

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(&broken),
        Err(FretForgeError::Json(_))
    ));

    let negative = dir.path().join("negative.json");
    std::fs::write(&negative, r#"{ "weight_position": -2.0 }"#).unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(&negative),
        Err(FretForgeError::Config(_))
    ));

    assert!(matches!(
        ScoringWeights::load_from_file(dir.path().join("missing.json")),
        Err(FretForgeError::Io(_))
    ));
}

#[test]
fn test_json_round_trip_keeps_field_names() {
    let w = ScoringWeights {
        weight_barre_length: 12.5,
        ..Default::default()
    };
    let json = serde_json::to_string(&w).unwrap();
    assert!(json.contains("\"weight_barre_length\":12.5"));
    let back: ScoringWeights = serde_json::from_str(&json).unwrap();
    assert_eq!(back, w);
}
