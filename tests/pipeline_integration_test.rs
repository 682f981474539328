use anyhow::Result;
use freight_quote::{ComparisonPipeline, LocalStorage, QuoteEngine, QuoteError, QuoteJobConfig};
use tempfile::TempDir;

const REQUEST: &str = r#"{
    "options": [
        {
            "selectedHaulage": {"unitTariff": 420, "multiStop": 60, "overtimeTariff": 80, "haulierName": "Rhône Logistique"},
            "selectedSeafreights": [
                {"defaultContainer": "40' HC", "transitTime": 18, "basePrice": 1450,
                 "containers": [{"container": "40' HC", "services": [
                     {"serviceName": "THC", "price": 210},
                     {"serviceName": "BL fee", "price": 55}
                 ]}]}
            ],
            "myMiscs": [{"textServices": "Customs clearance", "price": 95}]
        },
        {
            "selectedHaulage": {"unitTariff": 390, "multiStop": 60, "overtimeTariff": 75, "haulierName": "Trans Alpes"},
            "selectedSeafreights": [
                {"defaultContainer": "40' HC", "transitTime": 21, "basePrice": 1500,
                 "containers": [{"container": "40' HC", "services": [{"serviceName": "THC", "price": 230}]}]}
            ],
            "myMiscs": []
        },
        null
    ],
    "location": {"city": "Lyon", "latitude": 45.764, "longitude": 4.8357},
    "ports": [
        {"name": "Le Havre", "country": "FR", "coordinates": {"latitude": 49.4944, "longitude": 0.1079}},
        {"name": "Fos-sur-Mer", "country": "FR", "coordinates": {"latitude": 43.4378, "longitude": 4.9447}},
        {"name": "Genoa", "country": "IT"}
    ]
}"#;

fn write_job(temp_dir: &TempDir, formats: &str) -> Result<QuoteJobConfig> {
    let base = temp_dir.path().to_string_lossy().replace('\\', "/");
    let request_path = format!("{}/request.json", base);
    std::fs::write(&request_path, REQUEST)?;

    let job = format!(
        r#"
[job]
name = "lyon-export"

[input]
request_file = "{request_path}"

[matching]
suggestions = 2

[output]
output_path = "{base}/reports"
output_formats = {formats}
"#
    );
    let job_path = format!("{}/job.toml", base);
    std::fs::write(&job_path, job)?;

    Ok(QuoteJobConfig::from_file(&job_path)?)
}

#[test]
fn test_job_writes_json_and_csv_reports() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_job(&temp_dir, r#"["json", "csv"]"#)?;

    let engine = QuoteEngine::new(ComparisonPipeline::new(LocalStorage::default(), config));
    let output = engine.run()?;

    assert!(output.contains("quote_report.json"));
    assert!(output.contains("quote_report.csv"));

    let reports = temp_dir.path().join("reports");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(reports.join("quote_report.json"))?)?;

    // option 0: 420 + 1450 + 265 + 95 = 2230; option 1: 390 + 1730 = 2120
    assert_eq!(json["comparison"]["usesHaulage"], true);
    assert_eq!(json["comparison"]["overallBest"], 1);
    assert_eq!(json["comparison"]["totals"][0]["haulageUnitTotal"], 2230.0);
    assert!(json["comparison"]["totals"][2].is_null());
    assert!(json["generatedAt"].is_string());

    assert_eq!(json["port"]["matched"]["name"], "Fos-sur-Mer");
    assert_eq!(json["port"]["matchedBy"], "distance");
    assert_eq!(json["port"]["suggestions"].as_array().unwrap().len(), 2);

    let csv = std::fs::read_to_string(reports.join("quote_report.csv"))?;
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;

    let seafreight = rows.iter().find(|r| &r[0] == "seafreight_total").unwrap();
    assert_eq!(&seafreight[1], "1715.00");
    assert_eq!(&seafreight[2], "1730.00");
    assert_eq!(&seafreight[4], "0");

    let misc = rows.iter().find(|r| &r[0] == "misc_total").unwrap();
    // only option 0 lists miscs, a single value cannot win
    assert_eq!(&misc[4], "-1");

    let multi_stop = rows.iter().find(|r| &r[0] == "multi_stop_tariff").unwrap();
    assert_eq!(&multi_stop[4], "-1");

    let overtime = rows.iter().find(|r| &r[0] == "overtime_tariff").unwrap();
    assert_eq!(&overtime[4], "1");

    Ok(())
}

#[test]
fn test_json_only_job_skips_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_job(&temp_dir, r#"["json"]"#)?;

    QuoteEngine::new(ComparisonPipeline::new(LocalStorage::default(), config)).run()?;

    let reports = temp_dir.path().join("reports");
    assert!(reports.join("quote_report.json").exists());
    assert!(!reports.join("quote_report.csv").exists());
    Ok(())
}

#[test]
fn test_malformed_request_is_a_data_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_job(&temp_dir, r#"["json"]"#)?;
    std::fs::write(
        temp_dir.path().join("request.json"),
        r#"{"options": [null, null, null, null]}"#,
    )?;

    let result = QuoteEngine::new(ComparisonPipeline::new(LocalStorage::default(), config)).run();

    assert!(matches!(result, Err(QuoteError::SerializationError(_))));
    Ok(())
}
