use std::io::{self, Write};

use crate::common::escape_xml;
use crate::config;
use crate::records::SyllableRecord;

/// Writes the records as a property list that can be imported as text replacements on macOS.
pub fn write_plist(writer: &mut dyn Write, records: &[SyllableRecord]) -> io::Result<()> {
    writer.write_all(config::PLIST_HEADER.as_bytes())?;
    for record in records {
        write_plist_entry(writer, record)?;
    }
    writer.write_all(config::PLIST_FOOTER.as_bytes())?;
    writer.flush()
}

fn write_plist_entry(writer: &mut dyn Write, record: &SyllableRecord) -> io::Result<()> {
    writeln!(writer, "\t<dict>")?;
    writeln!(writer, "\t\t<key>{}</key>", config::PLIST_KEY_PHRASE)?;
    writeln!(writer, "\t\t<string>{}</string>", escape_xml(&record.phrase))?;
    writeln!(writer, "\t\t<key>{}</key>", config::PLIST_KEY_SHORTCUT)?;
    writeln!(writer, "\t\t<string>{}</string>", escape_xml(&record.shortcut))?;
    writeln!(writer, "\t</dict>")
}

pub fn write_json(writer: &mut dyn Write, records: &[SyllableRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<SyllableRecord> {
        vec![
            SyllableRecord::new("ni3", "nǐ"),
            SyllableRecord::new("nv5", "nü"),
        ]
    }

    #[test]
    fn test_write_plist() {
        let mut out: Vec<u8> = vec![];
        write_plist(&mut out, &sample_records()).unwrap();
        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<array>
	<dict>
		<key>phrase</key>
		<string>nǐ</string>
		<key>shortcut</key>
		<string>ni3</string>
	</dict>
	<dict>
		<key>phrase</key>
		<string>nü</string>
		<key>shortcut</key>
		<string>nv5</string>
	</dict>
</array>
</plist>
"#;
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_plist_empty() {
        let mut out: Vec<u8> = vec![];
        write_plist(&mut out, &[]).unwrap();
        let expected = format!("{}{}", config::PLIST_HEADER, config::PLIST_FOOTER);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_plist_escapes() {
        let mut out: Vec<u8> = vec![];
        write_plist(&mut out, &[SyllableRecord::new("<3", "a&b")]).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\t\t<string>a&amp;b</string>\n"));
        assert!(out.contains("\t\t<string>&lt;3</string>\n"));
    }

    #[test]
    fn test_write_json() {
        let mut out: Vec<u8> = vec![];
        write_json(&mut out, &sample_records()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "phrase": "nǐ", "shortcut": "ni3" },
                { "phrase": "nü", "shortcut": "nv5" }
            ])
        );
        assert!(out.ends_with(b"]\n"));
    }
}
