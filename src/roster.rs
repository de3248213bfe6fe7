use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Student;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub version: String,
    pub exported_at: String,
    pub students: Vec<Student>,
}

pub fn save_roster(path: &Path, students: &[Student]) -> io::Result<()> {
    let doc = RosterFile {
        version: "1.0".to_string(),
        exported_at: chrono::Utc::now().to_rfc3339(),
        students: students.to_vec(),
    };
    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("roster encode error: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_roster(path: &Path) -> io::Result<Vec<Student>> {
    let contents = fs::read_to_string(path)?;
    let doc: RosterFile = serde_json::from_str(&contents)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("roster parse error: {e}")))?;
    Ok(doc.students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn roster_round_trips_ids_and_order() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("roster.json");
        let students = vec![
            Student {
                id: "2".to_string(),
                name: "Bob Smith".to_string(),
                major: "Philosophy".to_string(),
                monthly_salary: 2800.0,
                total_loan: 45000.0,
            },
            Student {
                id: "3".to_string(),
                name: "Carl".to_string(),
                major: "Art".to_string(),
                monthly_salary: 3000.0,
                total_loan: 10000.0,
            },
        ];

        save_roster(&path, &students).expect("save");
        let loaded = load_roster(&path).expect("load");
        let ids: Vec<&str> = loaded.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
        assert_eq!(loaded[0].name, "Bob Smith");
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");
        assert!(load_roster(&path).is_err());
    }
}
