use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use crate::error::ParseError;
use crate::schedule::Subject;

/// Parses hours per week, returning 0 if empty or invalid
fn parse_hours(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

/// Finds a column by case-insensitive header match, falling back to a fixed position
fn find_column(headers: &csv::StringRecord, keys: &[&str], fallback: usize) -> usize {
    headers
        .iter()
        .position(|h| {
            let h = h.trim().to_lowercase();
            keys.iter().any(|k| h.contains(k))
        })
        .unwrap_or(fallback)
}

/// Reads subjects from CSV with a header row.
///
/// A repeated subject name replaces the earlier row but keeps its position,
/// so the input order seen by the allocator stays stable.
pub fn parse_subjects<R: Read>(reader: R) -> Result<Vec<Subject>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let name_col = find_column(&headers, &["name", "subject"], 0);
    let hours_col = find_column(&headers, &["hours"], 1);
    let difficulty_col = find_column(&headers, &["difficulty"], 2);
    let priority_col = find_column(&headers, &["priority"], 3);

    let mut subjects: Vec<Subject> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (line, result) in reader.records().enumerate() {
        let record = result?;

        let name = record.get(name_col).unwrap_or("").to_string();
        if name.is_empty() {
            debug!(row = line + 1, "skipping row without a subject name");
            continue;
        }

        let subject = Subject {
            hours_per_week: parse_hours(record.get(hours_col).unwrap_or("")),
            difficulty: record.get(difficulty_col).unwrap_or("").to_string(),
            priority: record.get(priority_col).unwrap_or("").to_string(),
            name,
        };

        if let Some(&index) = positions.get(&subject.name) {
            warn!(subject = %subject.name, "duplicate subject row, keeping the later one");
            subjects[index] = subject;
        } else {
            positions.insert(subject.name.clone(), subjects.len());
            subjects.push(subject);
        }
    }

    Ok(subjects)
}

/// Loads subjects from a CSV file
pub fn load_subjects<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Subject>, ParseError> {
    let file = std::fs::File::open(csv_path)?;
    parse_subjects(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_columns_in_any_order() {
        let data = "Priority,Subject Name,Difficulty,Hours per week\nhigh,Math,hard,4\nlow,Art,easy,2\n";
        let subjects = parse_subjects(data.as_bytes()).unwrap();
        assert_eq!(
            subjects,
            vec![
                Subject::new("Math", 4, "hard", "high"),
                Subject::new("Art", 2, "easy", "low"),
            ]
        );
    }

    #[test]
    fn falls_back_to_positions() {
        let data = "a,b,c,d\nPhysics,6,medium,medium\n";
        let subjects = parse_subjects(data.as_bytes()).unwrap();
        assert_eq!(subjects, vec![Subject::new("Physics", 6, "medium", "medium")]);
    }

    #[test]
    fn tolerates_bad_rows() {
        let data = "name,hours,difficulty,priority\n,3,easy,low\nChem,lots,hard,urgent\nBio\n";
        let subjects = parse_subjects(data.as_bytes()).unwrap();
        assert_eq!(
            subjects,
            vec![
                Subject::new("Chem", 0, "hard", "urgent"),
                Subject::new("Bio", 0, "", ""),
            ]
        );
    }

    #[test]
    fn later_duplicate_replaces_in_place() {
        let data = "name,hours,difficulty,priority\nMath,4,hard,high\nArt,2,easy,low\nMath,6,medium,medium\n";
        let subjects = parse_subjects(data.as_bytes()).unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0], Subject::new("Math", 6, "medium", "medium"));
        assert_eq!(subjects[1].name, "Art");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            load_subjects("definitely/not/here.csv"),
            Err(ParseError::Io(_))
        ));
    }
}
