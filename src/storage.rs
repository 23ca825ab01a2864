use crate::models::RegistrationRecord;
use crate::ui::INDEX_HTML;
use csv::ReaderBuilder;
use std::{env, path::Path, path::PathBuf};
use tokio::{fs, task};
use tracing::{debug, error, info, warn};

pub const DEFAULT_CSV_PATH: &str = "NYC_Dog_Licensing_Dataset_20251111.csv";

pub fn resolve_csv_path() -> PathBuf {
    if let Ok(path) = env::var("TREND_CSV_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_CSV_PATH)
}

pub fn resolve_template_path() -> Option<PathBuf> {
    env::var("APP_PAGE_TEMPLATE").ok().map(PathBuf::from)
}

pub fn read_records(path: &Path) -> Result<Vec<RegistrationRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (line, result) in reader.deserialize::<RegistrationRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                debug!("skipping csv line {}: {err}", line + 2);
            }
        }
    }

    info!(rows = records.len(), skipped, "read {}", path.display());
    Ok(records)
}

pub async fn load_records(path: &Path) -> Option<Vec<RegistrationRecord>> {
    let owned = path.to_path_buf();
    match task::spawn_blocking(move || read_records(&owned)).await {
        Ok(Ok(records)) => Some(records),
        Ok(Err(err)) => {
            match err.kind() {
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    warn!("dataset not found at {}", path.display());
                }
                _ => error!("failed to read dataset {}: {err}", path.display()),
            }
            None
        }
        Err(err) => {
            error!("dataset reader task failed: {err}");
            None
        }
    }
}

pub async fn load_template(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return INDEX_HTML.to_string();
    };

    match fs::read_to_string(path).await {
        Ok(template) => template,
        Err(err) => {
            error!("failed to read page template {}: {err}", path.display());
            INDEX_HTML.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = env::temp_dir();
        path.push(format!("dog_name_trends_{tag}_{}_{nanos}", std::process::id()));
        path
    }

    fn write_csv(tag: &str, body: &str) -> PathBuf {
        let path = temp_path(tag);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_named_columns_in_any_order() {
        let path = write_csv(
            "columns",
            "AnimalGender,LicenseIssuedDate,AnimalName,ZipCode\n\
             F,2020-05-01,Bella,10001\n\
             M,09/12/2014, max ,10002\n",
        );

        let records = read_records(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Bella");
        assert_eq!(records[0].issued_date, "2020-05-01");
        assert_eq!(records[1].name, " max ");
    }

    #[test]
    fn short_rows_are_tolerated() {
        let path = write_csv(
            "short",
            "AnimalName,LicenseIssuedDate\n\
             Bella,2020-05-01\n\
             Rex\n\
             Luna,2021-01-01\n",
        );

        let records = read_records(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].name, "Rex");
        assert!(records[1].issued_date.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_records(&temp_path("missing")).is_err());
    }

    #[tokio::test]
    async fn load_records_degrades_to_none() {
        assert!(load_records(&temp_path("absent")).await.is_none());
    }

    #[tokio::test]
    async fn load_template_falls_back_to_builtin() {
        assert_eq!(load_template(None).await, INDEX_HTML);
        assert_eq!(load_template(Some(&temp_path("tpl"))).await, INDEX_HTML);

        let path = write_csv("page", "<p>no chart here</p>");
        let template = load_template(Some(&path)).await;
        std::fs::remove_file(&path).ok();
        assert_eq!(template, "<p>no chart here</p>");
    }
}
