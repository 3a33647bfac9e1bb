use std::collections::HashSet;

use regex::Regex;

use crate::records::SyllableRecord;

/// Characters that must not remain in a phrase after decoding.
const LEFTOVER_CHARS: &[char] = &['!', ':', 'v'];

/// Returns a description of every problem found in the records, an empty list if all are fine.
pub fn check_records(records: &[SyllableRecord]) -> Result<Vec<String>, regex::Error> {
    let mut errors = vec![];
    let shortcut_pattern = Regex::new(r"^[a-z]+[0-5]$")?;
    let mut shortcuts = HashSet::new();

    for record in records {
        if !shortcut_pattern.is_match(&record.shortcut) {
            errors.push(format!(
                "Validation Error: invalid shortcut {:?} for phrase {:?}",
                record.shortcut, record.phrase
            ));
        }
        if !shortcuts.insert(record.shortcut.as_str()) {
            errors.push(format!(
                "Validation Error: duplicate shortcut {:?}",
                record.shortcut
            ));
        }

        // leftover tone digits or markers of syllables without a tone position
        if record.phrase.is_empty() {
            errors.push(format!(
                "Validation Error: empty phrase for shortcut {:?}",
                record.shortcut
            ));
        } else if let Some(c) = record
            .phrase
            .chars()
            .find(|c| c.is_ascii_digit() || LEFTOVER_CHARS.contains(c))
        {
            errors.push(format!(
                "Validation Error: phrase {:?} for shortcut {:?} contains {:?}",
                record.phrase, record.shortcut, c
            ));
        }
    }
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_records_ok() {
        let records = vec![
            SyllableRecord::new("ni3", "nǐ"),
            SyllableRecord::new("nv5", "nü"),
        ];
        assert_eq!(check_records(&records).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_check_records_errors() {
        let records = vec![
            SyllableRecord::new("ni3", "nǐ"),
            SyllableRecord::new("ni3", "nǐ"),
            SyllableRecord::new("Ni7", "nǐ"),
            SyllableRecord::new("m2", "m2"),
            SyllableRecord::new("xii1", "xii!"),
            SyllableRecord::new("nv4", "nv̀"),
            SyllableRecord::new("a1", ""),
        ];
        let errors = check_records(&records).unwrap();
        assert_eq!(errors.len(), 6);
        assert!(errors[0].contains("duplicate shortcut \"ni3\""));
        assert!(errors[1].contains("invalid shortcut \"Ni7\""));
        assert!(errors[2].contains("contains '2'"));
        assert!(errors[3].contains("contains '!'"));
        assert!(errors[4].contains("contains 'v'"));
        assert!(errors[5].contains("empty phrase"));
    }
}
