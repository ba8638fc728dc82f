use qr_stats::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: StatisticsRequest,
    #[serde(default)]
    expected: Option<Value>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Serialize, Default)]
struct ResultData {
    report: Option<FullReport>,
    error: Option<ErrorData>,
}

#[derive(Debug, Serialize)]
struct ErrorData {
    kind: String,
    field: Option<String>,
    message: String,
}

impl From<&QrStatsError> for ErrorData {
    fn from(err: &QrStatsError) -> Self {
        Self {
            kind: format!("{:?}", err.kind()),
            field: err.field().map(str::to_owned),
            message: err.to_string(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("fixtures");
    let output_dir = Path::new("../output/qr_stats");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let analyzer = QrStats::from_env().build()?;

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&analyzer, &path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(
    analyzer: &QrAnalyzer,
    input_path: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    match analyzer.full_report(&data.input) {
        Ok(report) => data.result.report = Some(report),
        Err(err) => data.result.error = Some(ErrorData::from(&err)),
    }

    let Some(file_name) = input_path.file_name() else {
        return Ok(());
    };
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}
