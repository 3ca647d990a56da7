//! 照合パイプラインの結合テスト
//!
//! 画像認識サービスをフェイクに差し替えて、検出 → 絞込み → 照合を検証

use roster_match::error::{Result, RosterMatchError};
use roster_match::photo::ImageLimits;
use roster_match::pipeline::Pipeline;
use roster_match::vision::{
    DetectionSettings, LabelDetection, RecognitionService, TextDetection, VisionAdapter,
};
use roster_match_common::{parse_roster, BoundingBox, MatchThresholds, PlayerRecord};
use tempfile::tempdir;

#[derive(Default)]
struct FakeRekognition {
    labels: Vec<LabelDetection>,
    texts: Vec<TextDetection>,
    fail_labels: bool,
    fail_text: bool,
}

impl RecognitionService for FakeRekognition {
    async fn detect_labels(&self, _image: &[u8], _max_labels: i32, _min_confidence: f32) -> Result<Vec<LabelDetection>> {
        if self.fail_labels {
            return Err(RosterMatchError::RecognitionService("ThrottlingException".into()));
        }
        Ok(self.labels.clone())
    }

    async fn detect_text(&self, _image: &[u8]) -> Result<Vec<TextDetection>> {
        if self.fail_text {
            return Err(RosterMatchError::RecognitionService("ThrottlingException".into()));
        }
        Ok(self.texts.clone())
    }
}

fn person_box() -> BoundingBox {
    BoundingBox::new(0.2, 0.1, 0.3, 0.8)
}

fn person_labels() -> Vec<LabelDetection> {
    vec![LabelDetection {
        name: "Person".to_string(),
        confidence: 99.2,
        instances: vec![person_box()],
    }]
}

/// Rekognition風のJSONからテキスト検出結果を作る
fn texts_from_json(json: &str) -> Vec<TextDetection> {
    serde_json::from_str(json).expect("テキスト検出のJSONが不正")
}

fn roster() -> Vec<PlayerRecord> {
    parse_roster("P1\t-7- Alex Rivera (Hawks)\n").players
}

fn pipeline(service: FakeRekognition) -> Pipeline<FakeRekognition> {
    Pipeline::new(
        VisionAdapter::new(service, DetectionSettings::default()),
        MatchThresholds::default(),
        ImageLimits { max_bytes: 5 * 1024 * 1024, max_dimension: 1920 },
    )
}

#[tokio::test]
async fn surname_inside_person_is_matched() {
    let service = FakeRekognition {
        labels: person_labels(),
        texts: texts_from_json(
            r#"[{"text": "Rivera", "kind": "LINE", "confidence": 99.5,
                 "boundingBox": {"left": 0.3, "top": 0.4, "width": 0.1, "height": 0.05}}]"#,
        ),
        ..Default::default()
    };

    let report = pipeline(service).run_bytes(b"jpeg", &roster()).await;
    let matched = report.matched_players();

    assert_eq!(matched, vec![PlayerRecord::new("P1", "7", "Alex Rivera", "Hawks")]);
    assert_eq!(matched[0].role, "Player");
}

#[tokio::test]
async fn surname_outside_every_person_is_ignored() {
    let service = FakeRekognition {
        labels: person_labels(),
        texts: texts_from_json(
            r#"[{"text": "Rivera", "kind": "LINE", "confidence": 99.5,
                 "boundingBox": {"left": 0.6, "top": 0.02, "width": 0.3, "height": 0.05}}]"#,
        ),
        ..Default::default()
    };

    let report = pipeline(service).run_bytes(b"jpeg", &roster()).await;

    assert_eq!(report.text_lines.len(), 1);
    assert!(report.filtered.is_empty());
    assert!(report.matched_players().is_empty());
}

#[tokio::test]
async fn jersey_number_alone_is_matched() {
    let service = FakeRekognition {
        labels: person_labels(),
        texts: texts_from_json(
            r#"[{"text": "7", "kind": "LINE", "confidence": 97.0,
                 "boundingBox": {"left": 0.3, "top": 0.3, "width": 0.05, "height": 0.08}}]"#,
        ),
        ..Default::default()
    };

    let report = pipeline(service).run_bytes(b"jpeg", &roster()).await;

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].player.code, "P1");
    assert_eq!(report.matches[0].matched_text, "7");
}

#[tokio::test]
async fn malformed_roster_line_is_excluded() {
    let parsed = parse_roster("P1\t-7- Alex Rivera (Hawks)\nP2\t-8- Sam Cole\n");
    assert_eq!(parsed.players.len(), 1);

    let service = FakeRekognition {
        labels: person_labels(),
        texts: texts_from_json(
            r#"[{"text": "Cole", "kind": "LINE", "confidence": 99.0,
                 "boundingBox": {"left": 0.3, "top": 0.4, "width": 0.1, "height": 0.05}},
                {"text": "8", "kind": "LINE", "confidence": 99.0,
                 "boundingBox": {"left": 0.3, "top": 0.5, "width": 0.05, "height": 0.05}}]"#,
        ),
        ..Default::default()
    };

    let report = pipeline(service).run_bytes(b"jpeg", &parsed.players).await;
    assert!(report.matched_players().is_empty());
}

#[tokio::test]
async fn multiple_players_deduplicated_in_first_match_order() {
    let roster = parse_roster(
        "P1\t-7- Alex Rivera (Hawks)\nP2\t-23- Jane Smith (Falcons)\nP3\t-10- Kim Park (Hawks)\n",
    )
    .players;

    let service = FakeRekognition {
        labels: vec![LabelDetection {
            name: "Person".to_string(),
            confidence: 97.0,
            instances: vec![
                BoundingBox::new(0.0, 0.0, 0.5, 1.0),
                BoundingBox::new(0.5, 0.0, 0.5, 1.0),
            ],
        }],
        texts: texts_from_json(
            r#"[
                {"text": "SMITH", "kind": "LINE", "confidence": 99.0,
                 "boundingBox": {"left": 0.6, "top": 0.3, "width": 0.1, "height": 0.05}},
                {"text": "SMITH", "kind": "WORD", "confidence": 99.0,
                 "boundingBox": {"left": 0.6, "top": 0.3, "width": 0.1, "height": 0.05}},
                {"text": "Riviera", "kind": "LINE", "confidence": 95.0,
                 "boundingBox": {"left": 0.1, "top": 0.3, "width": 0.1, "height": 0.05}},
                {"text": "23", "kind": "LINE", "confidence": 99.0,
                 "boundingBox": {"left": 0.6, "top": 0.4, "width": 0.05, "height": 0.05}},
                {"text": "10", "kind": "LINE", "confidence": 85.0,
                 "boundingBox": {"left": 0.1, "top": 0.5, "width": 0.05, "height": 0.05}}
            ]"#,
        ),
        ..Default::default()
    };

    let report = pipeline(service).run_bytes(b"jpeg", &roster).await;
    let codes: Vec<String> = report.matched_players().into_iter().map(|p| p.code).collect();

    // "10" は信頼度90以下のため除外
    assert_eq!(codes, vec!["P2", "P1"]);
}

#[tokio::test]
async fn label_failure_leaves_no_person_regions() {
    let service = FakeRekognition {
        labels: person_labels(),
        texts: texts_from_json(
            r#"[{"text": "Rivera", "kind": "LINE", "confidence": 99.5,
                 "boundingBox": {"left": 0.3, "top": 0.4, "width": 0.1, "height": 0.05}}]"#,
        ),
        fail_labels: true,
        ..Default::default()
    };

    let report = pipeline(service).run_bytes(b"jpeg", &roster()).await;

    assert!(report.persons.is_empty());
    assert_eq!(report.text_lines.len(), 1);
    assert!(report.matched_players().is_empty());
}

#[tokio::test]
async fn text_failure_degrades_to_empty_report() {
    let service = FakeRekognition {
        labels: person_labels(),
        fail_text: true,
        ..Default::default()
    };

    let report = pipeline(service).run_bytes(b"jpeg", &roster()).await;

    assert_eq!(report.persons.len(), 1);
    assert!(report.text_lines.is_empty());
    assert!(report.matches.is_empty());
}

#[tokio::test]
async fn missing_image_skips_recognition() {
    let dir = tempdir().expect("Failed to create temp dir");
    let pipeline = pipeline(FakeRekognition {
        labels: person_labels(),
        ..Default::default()
    });

    let report = pipeline.run(&dir.path().join("missing.jpg"), &roster()).await;

    assert!(report.persons.is_empty());
    assert!(report.matches.is_empty());
}

#[tokio::test]
async fn image_file_is_loaded_and_matched() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("team.jpg");
    std::fs::write(&path, b"fake jpeg bytes").unwrap();

    let service = FakeRekognition {
        labels: person_labels(),
        texts: texts_from_json(
            r#"[{"text": "RIVERA", "kind": "LINE", "confidence": 99.5,
                 "boundingBox": {"left": 0.3, "top": 0.4, "width": 0.1, "height": 0.05}}]"#,
        ),
        ..Default::default()
    };
    let adapter = VisionAdapter::new(service, DetectionSettings::default());
    let pipeline = Pipeline::new(
        adapter,
        MatchThresholds::default(),
        ImageLimits { max_bytes: 1024, max_dimension: 1920 },
    );

    let report = pipeline.run(&path, &roster()).await;
    assert_eq!(report.matches.len(), 1);
}
