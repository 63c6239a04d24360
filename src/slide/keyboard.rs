//! # 키보드 레이아웃
//!
//! 레이아웃 문서에서 문자 → 키 중심 좌표 맵을 만듭니다.
//! 한 번 만들어지면 읽기 전용이며, 여러 스레드에서 동기화 없이 공유됩니다.

use crate::error::LayoutError;
use crate::ops::geometry::Point;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct KeyboardDoc {
    #[serde(rename = "@keyWidth")]
    key_width: i32,
    #[serde(rename = "@keyHeight")]
    key_height: i32,
    #[serde(rename = "row", default)]
    rows: Vec<RowDoc>,
}

#[derive(Debug, Deserialize)]
struct RowDoc {
    #[serde(rename = "@offset", default)]
    offset: i32,
    #[serde(rename = "key", default)]
    keys: Vec<KeyDoc>,
}

#[derive(Debug, Deserialize)]
struct KeyDoc {
    #[serde(rename = "@char", default)]
    ch: String,
}

/// Character to key-center mapping.
#[derive(Debug, Clone, Default)]
pub struct KeyLayout {
    keys: HashMap<char, Point>,
}

impl KeyLayout {
    /// Builds the map from `(row offset, key characters)` rows.
    ///
    /// Key `j` of row `i` sits at `x = offset + key_width/2 + j*key_width`,
    /// `y = key_height/2 + i*key_width`. The row pitch is the key *width*;
    /// existing dictionaries were built with that geometry.
    pub fn from_rows(
        key_width: i32,
        key_height: i32,
        rows: &[(i32, &str)],
    ) -> Result<Self, LayoutError> {
        check_key_size(key_width, key_height)?;
        let mut keys = HashMap::new();
        for (i, (offset, chars)) in rows.iter().enumerate() {
            for (j, ch) in chars.chars().enumerate() {
                keys.insert(ch, key_center(key_width, key_height, *offset, i, j)?);
            }
        }
        Ok(Self { keys })
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, LayoutError> {
        let doc: KeyboardDoc = quick_xml::de::from_str(xml)?;
        check_key_size(doc.key_width, doc.key_height)?;

        let mut keys = HashMap::new();
        for (i, row) in doc.rows.iter().enumerate() {
            for (j, key) in row.keys.iter().enumerate() {
                let mut chars = key.ch.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        let center =
                            key_center(doc.key_width, doc.key_height, row.offset, i, j)?;
                        keys.insert(ch, center);
                    }
                    _ => debug!(
                        row = i,
                        key = j,
                        label = %key.ch,
                        "skipping key without a single character"
                    ),
                }
            }
        }
        debug!(keys = keys.len(), rows = doc.rows.len(), "keyboard layout parsed");
        Ok(Self { keys })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_xml_str(&xml)
    }

    pub fn get(&self, ch: char) -> Option<Point> {
        self.keys.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn check_key_size(key_width: i32, key_height: i32) -> Result<(), LayoutError> {
    if key_width <= 0 || key_height <= 0 {
        return Err(LayoutError::Geometry(format!(
            "keyWidth={} keyHeight={}",
            key_width, key_height
        )));
    }
    Ok(())
}

fn key_center(
    key_width: i32,
    key_height: i32,
    offset: i32,
    row: usize,
    col: usize,
) -> Result<Point, LayoutError> {
    // 정수 나눗셈은 기존 사전과의 호환을 위해 유지, 오버플로는 i64 + checked 로 차단
    let kw = i64::from(key_width);
    let overflow = || LayoutError::Geometry(format!("key {col} of row {row} is out of range"));
    let x = i64::try_from(col)
        .ok()
        .and_then(|c| c.checked_mul(kw))
        .and_then(|v| v.checked_add(i64::from(offset) + kw / 2))
        .ok_or_else(overflow)?;
    let y = i64::try_from(row)
        .ok()
        .and_then(|r| r.checked_mul(kw))
        .and_then(|v| v.checked_add(i64::from(key_height) / 2))
        .ok_or_else(overflow)?;
    Ok(Point::new(x as f64, y as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QWERTY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<keyboard keyWidth="32" keyHeight="48">
  <row offset="0">
    <key char="q"/><key char="w"/><key char="e"/>
  </row>
  <row offset="16">
    <key char="a"/><key char="s"/>
  </row>
  <row offset="48">
    <key char="z"/><key char="shift"/><key char="x"/>
  </row>
</keyboard>"#;

    #[test]
    fn test_from_rows_matches_reference_geometry() {
        let layout = KeyLayout::from_rows(10, 10, &[(0, "abc")]).unwrap();
        assert_eq!(layout.get('a'), Some(Point::new(5.0, 5.0)));
        assert_eq!(layout.get('b'), Some(Point::new(15.0, 5.0)));
        assert_eq!(layout.get('c'), Some(Point::new(25.0, 5.0)));
        assert_eq!(layout.get('d'), None);
    }

    #[test]
    fn test_row_pitch_uses_key_width() {
        let layout = KeyLayout::from_rows(10, 30, &[(0, "a"), (3, "b")]).unwrap();
        assert_eq!(layout.get('a'), Some(Point::new(5.0, 15.0)));
        // y = 30/2 + 1*10, 행 간격은 keyWidth
        assert_eq!(layout.get('b'), Some(Point::new(8.0, 25.0)));
    }

    #[test]
    fn test_xml_layout() {
        let layout = KeyLayout::from_xml_str(QWERTY).unwrap();
        assert_eq!(layout.len(), 7);
        assert_eq!(layout.get('q'), Some(Point::new(16.0, 24.0)));
        assert_eq!(layout.get('e'), Some(Point::new(80.0, 24.0)));
        assert_eq!(layout.get('s'), Some(Point::new(64.0, 56.0)));
        // "shift" 키는 건너뛰지만 열 번호는 유지
        assert_eq!(layout.get('x'), Some(Point::new(128.0, 88.0)));
    }

    #[test]
    fn test_odd_key_size_truncates() {
        let layout = KeyLayout::from_rows(15, 9, &[(0, "ab")]).unwrap();
        assert_eq!(layout.get('a'), Some(Point::new(7.0, 4.0)));
        assert_eq!(layout.get('b'), Some(Point::new(22.0, 4.0)));
    }

    #[test]
    fn test_malformed_documents_fail() {
        assert!(KeyLayout::from_xml_str("<keyboard><row>").is_err());
        assert!(KeyLayout::from_xml_str(r#"<keyboard keyWidth="x" keyHeight="1"/>"#).is_err());
        assert!(matches!(
            KeyLayout::from_xml_str(r#"<keyboard keyWidth="0" keyHeight="10"/>"#),
            Err(LayoutError::Geometry(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = KeyLayout::from_path("/definitely/not/here.xml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.xml"));
    }

    #[test]
    fn test_both_constructors_reject_bad_key_size() {
        assert!(matches!(
            KeyLayout::from_rows(0, 10, &[(0, "a")]),
            Err(LayoutError::Geometry(_))
        ));
        assert!(matches!(
            KeyLayout::from_rows(10, -1, &[(0, "a")]),
            Err(LayoutError::Geometry(_))
        ));
    }

    #[test]
    fn test_huge_key_width_does_not_overflow() {
        let xml = r#"<keyboard keyWidth="2000000000" keyHeight="10">
  <row offset="0"><key char="a"/><key char="b"/></row>
  <row offset="2000000000"><key char="c"/></row>
</keyboard>"#;
        let layout = KeyLayout::from_xml_str(xml).unwrap();
        assert_eq!(layout.get('a'), Some(Point::new(1_000_000_000.0, 5.0)));
        assert_eq!(layout.get('b'), Some(Point::new(3_000_000_000.0, 5.0)));
        assert_eq!(layout.get('c'), Some(Point::new(3_000_000_000.0, 2_000_000_005.0)));
    }

    #[test]
    fn test_unrelated_elements_between_rows_and_keys() {
        let xml = r#"<keyboard keyWidth="10" keyHeight="10">
  <row><key char="a"/><spacer/><key char="b"/></row>
  <spacer/>
  <!-- second row -->
  <row><key char="c"/></row>
</keyboard>"#;
        let layout = KeyLayout::from_xml_str(xml).unwrap();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.get('a'), Some(Point::new(5.0, 5.0)));
        assert_eq!(layout.get('b'), Some(Point::new(15.0, 5.0)));
        assert_eq!(layout.get('c'), Some(Point::new(5.0, 15.0)));
    }
}
