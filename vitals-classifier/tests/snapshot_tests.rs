//! Snapshot report tests against health-data API payloads

use vitals_classifier::{BiomarkerId, Classifier, Error, HealthScoreStatus, HealthSnapshot, Sex};

const FULL_PAYLOAD: &str = r#"{
    "height": 170,
    "weight": 72,
    "waistCircumference": 85,
    "bloodPressureSystolic": 118,
    "bloodPressureDiastolic": 84,
    "fastingBloodGlucose": 92,
    "hdlCholesterol": 55,
    "triglycerides": 160,
    "vitaminD2": 18,
    "vitaminD3": 30,
    "lastUpdate": "2024-11-02T08:15:00Z"
}"#;

#[test]
fn test_full_snapshot_report() {
    let snapshot = HealthSnapshot::from_json(FULL_PAYLOAD).unwrap();
    let report = Classifier::default()
        .classify_snapshot(&snapshot, Some(Sex::Male))
        .unwrap();

    // Every field plus the derived ratio
    assert_eq!(report.rows.len(), BiomarkerId::all_variants().len());
    assert_eq!(report.rows[0].biomarker, BiomarkerId::Height);

    let ratio = report.row(BiomarkerId::WaistHeightRatio).unwrap();
    assert!((ratio.value - 0.5).abs() < 1e-12);
    assert_eq!(ratio.result.category, "Healthy");

    assert_eq!(
        report.row(BiomarkerId::BloodPressureDiastolic).unwrap().result.category,
        "Hypertension Stage 1"
    );
    assert_eq!(
        report.row(BiomarkerId::HdlCholesterol).unwrap().result.category,
        "Near Optimal"
    );
    assert!(!report.row(BiomarkerId::VitaminD2).unwrap().result.in_range);
    assert!(report.last_update.is_some());

    let out: Vec<_> = report.out_of_range().map(|r| r.biomarker).collect();
    assert_eq!(
        out,
        vec![
            BiomarkerId::BloodPressureDiastolic,
            BiomarkerId::Triglycerides,
            BiomarkerId::VitaminD2
        ]
    );
    assert_eq!(report.in_range_count(), report.rows.len() - 3);
}

#[test]
fn test_missing_fields_are_skipped() {
    let snapshot =
        HealthSnapshot::from_json(r#"{"bloodPressureSystolic": 128, "triglycerides": 90}"#).unwrap();
    let report = Classifier::default().classify_snapshot(&snapshot, None).unwrap();
    let ids: Vec<_> = report.rows.iter().map(|r| r.biomarker).collect();
    assert_eq!(ids, vec![BiomarkerId::BloodPressureSystolic, BiomarkerId::Triglycerides]);
    assert!(report.last_update.is_none());
}

#[test]
fn test_hdl_without_sex_fails_report() {
    let snapshot = HealthSnapshot::from_json(FULL_PAYLOAD).unwrap();
    let err = Classifier::default().classify_snapshot(&snapshot, None).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredContext { .. }));
}

#[test]
fn test_malformed_payload() {
    let err = HealthSnapshot::from_json(r#"{"height": "tall"}"#).unwrap_err();
    assert!(matches!(err, Error::Payload(_)));
}

#[test]
fn test_report_serializes_for_presentation() {
    let snapshot = HealthSnapshot::from_json(r#"{"bloodPressureSystolic": 165}"#).unwrap();
    let report = Classifier::default().classify_snapshot(&snapshot, None).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let row = &json["rows"][0];
    assert_eq!(row["biomarker"], "bloodPressureSystolic");
    assert_eq!(row["unit"], "mmHg");
    assert_eq!(row["result"]["category"], "Hypertensive Crisis");
    assert_eq!(row["result"]["color"], "darkred");
    assert_eq!(row["result"]["inRange"], false);
}

#[test]
fn test_aggregate_score_status() {
    assert_eq!(HealthScoreStatus::from_score(66.0).unwrap(), HealthScoreStatus::Good);
    assert_eq!(HealthScoreStatus::from_score(76.0).unwrap().label(), "Excellent");
}
