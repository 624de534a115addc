//! FDF form-template codec.
//!
//! The export target is an FDF document (subset): a flat `/Fields`
//! array of dictionaries, each naming a field (`/T`), declaring its
//! kind (`/FT /Tx` for text, `/FT /Btn` for a toggle), an optional
//! value (`/V`), and for text fields an appearance string (`/DA`)
//! carrying the font size. The template's schema is an external
//! contract: field names are matched verbatim, diacritics included,
//! and this module never invents or removes fields.

use std::collections::BTreeMap;

use crate::error::ExportError;

const DEFAULT_FONT_SIZE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldState {
    Text { value: String, font_size: u8 },
    Toggle { checked: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormField {
    name: String,
    state: FieldState,
}

/// A parsed form template: an ordered list of named fields with a
/// capability (kind) discovered once at parse time. Serialization
/// preserves the template's field order, so re-export of identical
/// content is byte-for-byte stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    fields: Vec<FormField>,
    index: BTreeMap<String, usize>,
}

impl FormDocument {
    pub fn parse(bytes: &[u8]) -> Result<Self, ExportError> {
        let mut scanner = Scanner::new(bytes);
        if !scanner.starts_with(b"%FDF") {
            return Err(ExportError::new(
                "template is not an FDF document (missing %FDF header)",
            ));
        }

        scanner
            .seek_token(b"/Fields")
            .ok_or_else(|| ExportError::new("template has no /Fields array"))?;
        scanner.skip_whitespace();
        if !scanner.consume(b"[") {
            return Err(ExportError::new("expected [ after /Fields"));
        }

        let mut fields = Vec::new();
        let mut index = BTreeMap::new();
        loop {
            scanner.skip_whitespace();
            if scanner.consume(b"]") {
                break;
            }
            if !scanner.consume(b"<<") {
                return Err(ExportError::new(format!(
                    "expected << or ] in /Fields array at byte {}",
                    scanner.pos
                )));
            }
            let field = parse_field_dict(&mut scanner)?;
            if index.contains_key(&field.name) {
                return Err(ExportError::new(format!(
                    "template declares field {:?} twice",
                    field.name
                )));
            }
            index.insert(field.name.clone(), fields.len());
            fields.push(field);
        }

        Ok(Self { fields, index })
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Capability of a named field, or `None` when the template omits
    /// it. This is the probe the mapper queries before every write.
    pub fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.index.get(name).map(|&i| match self.fields[i].state {
            FieldState::Text { .. } => FieldKind::Text,
            FieldState::Toggle { .. } => FieldKind::Toggle,
        })
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.index.get(name).and_then(|&i| match &self.fields[i].state {
            FieldState::Text { value, .. } => Some(value.as_str()),
            FieldState::Toggle { .. } => None,
        })
    }

    pub fn is_checked(&self, name: &str) -> Option<bool> {
        self.index.get(name).and_then(|&i| match self.fields[i].state {
            FieldState::Text { .. } => None,
            FieldState::Toggle { checked } => Some(checked),
        })
    }

    /// Writes a text field. Returns false when the field is absent or
    /// not a text field; never errors.
    pub fn set_text(&mut self, name: &str, value: &str, font_size: u8) -> bool {
        let Some(&i) = self.index.get(name) else {
            return false;
        };
        match &mut self.fields[i].state {
            FieldState::Text {
                value: slot,
                font_size: size,
            } => {
                *slot = value.to_string();
                *size = font_size;
                true
            }
            FieldState::Toggle { .. } => false,
        }
    }

    /// Checks or unchecks a toggle field. Returns false when the
    /// field is absent or not a toggle.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        let Some(&i) = self.index.get(name) else {
            return false;
        };
        match &mut self.fields[i].state {
            FieldState::Text { .. } => false,
            FieldState::Toggle { checked: slot } => {
                *slot = checked;
                true
            }
        }
    }

    /// The reset pass: every text field cleared, every toggle
    /// unchecked, appearance back to the default size. Makes export
    /// idempotent regardless of what the template shipped with.
    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            match &mut field.state {
                FieldState::Text { value, font_size } => {
                    value.clear();
                    *font_size = DEFAULT_FONT_SIZE;
                }
                FieldState::Toggle { checked } => *checked = false,
            }
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = String::new();
        out.push_str("%FDF-1.2\n");
        out.push_str("1 0 obj\n");
        out.push_str("<< /FDF << /Fields [\n");
        for field in &self.fields {
            match &field.state {
                FieldState::Text { value, font_size } => {
                    out.push_str(&format!(
                        "<< /T ({}) /FT /Tx /V ({}) /DA (/Helv {} Tf 0 g) >>\n",
                        escape_string(&field.name),
                        escape_string(value),
                        font_size
                    ));
                }
                FieldState::Toggle { checked } => {
                    out.push_str(&format!(
                        "<< /T ({}) /FT /Btn /V /{} >>\n",
                        escape_string(&field.name),
                        if *checked { "Yes" } else { "Off" }
                    ));
                }
            }
        }
        out.push_str("] >> >>\n");
        out.push_str("endobj\n");
        out.push_str("trailer\n");
        out.push_str("<< /Root 1 0 R >>\n");
        out.push_str("%%EOF\n");
        out.into_bytes()
    }
}

fn parse_field_dict(scanner: &mut Scanner<'_>) -> Result<FormField, ExportError> {
    let mut name: Option<String> = None;
    let mut kind: Option<FieldKind> = None;
    let mut text_value = String::new();
    let mut checked = false;
    let mut font_size = DEFAULT_FONT_SIZE;

    loop {
        scanner.skip_whitespace();
        if scanner.consume(b">>") {
            break;
        }
        let key = scanner
            .read_name()
            .ok_or_else(|| ExportError::new("expected /Key inside field dictionary"))?;
        scanner.skip_whitespace();
        match key.as_str() {
            "T" => {
                name = Some(scanner.read_string()?);
            }
            "FT" => {
                let value = scanner
                    .read_name()
                    .ok_or_else(|| ExportError::new("expected name after /FT"))?;
                kind = Some(match value.as_str() {
                    "Tx" => FieldKind::Text,
                    "Btn" => FieldKind::Toggle,
                    other => {
                        return Err(ExportError::new(format!(
                            "unsupported field type /{other}"
                        )));
                    }
                });
            }
            "V" => {
                if scanner.peek() == Some(b'(') {
                    text_value = scanner.read_string()?;
                } else {
                    let value = scanner
                        .read_name()
                        .ok_or_else(|| ExportError::new("expected value after /V"))?;
                    checked = value == "Yes";
                }
            }
            "DA" => {
                let appearance = scanner.read_string()?;
                font_size = font_size_from_appearance(&appearance).unwrap_or(DEFAULT_FONT_SIZE);
            }
            _ => {
                // Unknown keys are tolerated; skip their value.
                skip_value(scanner)?;
            }
        }
    }

    let name = name.ok_or_else(|| ExportError::new("field dictionary is missing /T"))?;
    let state = match kind.ok_or_else(|| {
        ExportError::new(format!("field {name:?} is missing /FT"))
    })? {
        FieldKind::Text => FieldState::Text {
            value: text_value,
            font_size,
        },
        FieldKind::Toggle => FieldState::Toggle { checked },
    };
    Ok(FormField { name, state })
}

fn skip_value(scanner: &mut Scanner<'_>) -> Result<(), ExportError> {
    scanner.skip_whitespace();
    match scanner.peek() {
        Some(b'(') => {
            scanner.read_string()?;
            Ok(())
        }
        Some(b'/') => {
            scanner.read_name();
            Ok(())
        }
        _ => {
            // Bare token (number, boolean): consume until delimiter.
            while let Some(byte) = scanner.peek() {
                if byte.is_ascii_whitespace() || matches!(byte, b'/' | b'(' | b'>' | b']') {
                    break;
                }
                scanner.pos += 1;
            }
            Ok(())
        }
    }
}

/// Pulls the size out of an appearance string like "/Helv 12 Tf 0 g".
fn font_size_from_appearance(appearance: &str) -> Option<u8> {
    let mut tokens = appearance.split_whitespace().peekable();
    while let Some(token) = tokens.next() {
        if tokens.peek() == Some(&"Tf") {
            return token.parse().ok();
        }
    }
    None
}

fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(ch),
        }
    }
    out
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes.starts_with(prefix)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self
            .peek()
            .is_some_and(|byte| byte.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn consume(&mut self, token: &[u8]) -> bool {
        if self.bytes[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// Advances to just past the next occurrence of `token`, skipping
    /// the contents of parenthesized strings so field values cannot
    /// alias structural tokens.
    fn seek_token(&mut self, token: &[u8]) -> Option<()> {
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos..].starts_with(token) {
                self.pos += token.len();
                return Some(());
            }
            if self.bytes[self.pos] == b'(' {
                let _ = self.read_string();
            } else {
                self.pos += 1;
            }
        }
        None
    }

    /// Reads a `/Name` token; the cursor must be at the slash.
    fn read_name(&mut self) -> Option<String> {
        if self.peek() != Some(b'/') {
            return None;
        }
        self.pos += 1;
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_whitespace() || matches!(byte, b'/' | b'(' | b'<' | b'>' | b'[' | b']')
            {
                break;
            }
            self.pos += 1;
        }
        Some(String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned())
    }

    /// Reads a `(...)` string, honoring backslash escapes and balanced
    /// nested parentheses.
    fn read_string(&mut self) -> Result<String, ExportError> {
        self.skip_whitespace();
        if self.peek() != Some(b'(') {
            return Err(ExportError::new(format!(
                "expected ( at byte {}",
                self.pos
            )));
        }
        self.pos += 1;

        let mut out = Vec::new();
        let mut depth = 1usize;
        while let Some(byte) = self.peek() {
            self.pos += 1;
            match byte {
                b'\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(ExportError::new("unterminated escape in string"));
                    };
                    self.pos += 1;
                    match escaped {
                        b'n' => out.push(b'\n'),
                        b'r' => out.push(b'\r'),
                        b't' => out.push(b'\t'),
                        other => out.push(other),
                    }
                }
                b'(' => {
                    depth += 1;
                    out.push(byte);
                }
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(String::from_utf8_lossy(&out).into_owned());
                    }
                    out.push(byte);
                }
                other => out.push(other),
            }
        }
        Err(ExportError::new("unterminated string in template"))
    }
}
