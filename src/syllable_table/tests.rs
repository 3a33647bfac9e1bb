#[cfg(test)]
use super::*;

#[test]
fn test_parse_syllable_grid_simple() {
    let grid = "ba\tpa ma\nfa\n";
    let expected = Ok(vec![
        "ba".to_owned(),
        "pa".to_owned(),
        "ma".to_owned(),
        "fa".to_owned(),
    ]);
    assert_eq!(parse_syllable_grid(grid), expected);
}

#[test]
fn test_parse_syllable_grid_leading_whitespace() {
    let grid = "\n    a\to\n\t\te  ";
    let expected = Ok(vec!["a".to_owned(), "o".to_owned(), "e".to_owned()]);
    assert_eq!(parse_syllable_grid(grid), expected);
}

#[test]
fn test_parse_syllable_grid_umlaut() {
    let grid = "nü nüe lü";
    let expected = Ok(vec!["nv".to_owned(), "nve".to_owned(), "lv".to_owned()]);
    assert_eq!(parse_syllable_grid(grid), expected);
}

#[test]
fn test_parse_syllable_grid_duplicates() {
    let grid = "bo ba bo\nzi za zi";
    let expected = Ok(vec![
        "bo".to_owned(),
        "ba".to_owned(),
        "zi".to_owned(),
        "za".to_owned(),
    ]);
    assert_eq!(parse_syllable_grid(grid), expected);
}

#[test]
fn test_parse_syllable_grid_empty() {
    assert_eq!(parse_syllable_grid(""), Err(TableError::Empty));
    assert_eq!(parse_syllable_grid(" \t\n "), Err(TableError::Empty));
}

#[test]
fn test_parse_syllable_grid_invalid() {
    assert!(matches!(
        parse_syllable_grid("ba pa3 ma"),
        Err(TableError::Grid(_))
    ));
    assert!(matches!(
        parse_syllable_grid("ba Pa"),
        Err(TableError::Grid(_))
    ));
    assert!(matches!(
        parse_syllable_grid("lu:e"),
        Err(TableError::Grid(_))
    ));
}

#[test]
fn test_syllable_table() {
    let table = syllable_table().unwrap();
    assert_eq!(table.len(), 409);
    assert_eq!(table[..3], ["bo", "ba", "bai"]);
    assert_eq!(table.last().map(String::as_str), Some("yun"));
    assert!(table.iter().any(|s| s == "nve"));
    assert!(table.iter().any(|s| s == "lv"));
    assert!(table.iter().all(|s| !s.contains('ü')));
    assert_eq!(table.iter().filter(|s| *s == "zi").count(), 1);
}
