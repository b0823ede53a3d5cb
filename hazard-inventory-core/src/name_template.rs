//! Named-field string templates.
//!
//! Model identifiers, display names and array names are authored as templates
//! containing `{name}` fields. A template is parsed once into literal and field
//! segments; fields are then bound (template parameters during expansion) or
//! rendered (scenario, year, model id and return period when resolving
//! periods).
//!
//! # Grammar
//!
//! ```text
//! template = (literal | '{{' | '}}' | field)*
//! field    = '{' name (':' spec)? '}'
//! name     = [A-Za-z_][A-Za-z0-9_]*
//! spec     = '0'? width? 'd'?
//! width    = [0-9]+
//! ```
//!
//! `{return_period:05d}` renders the integer 1000 as `01000`; `{return_period}`
//! renders it as `1000`.

use crate::errors::{InventoryError, InventoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Widest field a format spec may ask for.
pub const MAX_WIDTH: usize = u16::MAX as usize;

/// Formatting directive attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
    /// Pad with zeros instead of spaces (integers only).
    pub zero_fill: bool,
    /// Minimum rendered width.
    pub width: Option<usize>,
    /// The `d` presentation type (integers only).
    pub integer: bool,
}

impl FormatSpec {
    fn parse(spec: &str) -> Option<Self> {
        let (zero_fill, rest) = match spec.strip_prefix('0') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };
        let (integer, digits) = match rest.strip_suffix('d') {
            Some(digits) => (true, digits),
            None => (false, rest),
        };
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let width = if digits.is_empty() {
            None
        } else {
            let width: usize = digits.parse().ok()?;
            if width > MAX_WIDTH {
                return None;
            }
            Some(width)
        };
        Some(Self {
            zero_fill,
            width,
            integer,
        })
    }

    pub fn is_empty(&self) -> bool {
        !self.zero_fill && self.width.is_none() && !self.integer
    }

    /// Render `value` for the field `field` according to this directive.
    pub fn apply(&self, field: &str, value: FieldValue<'_>) -> InventoryResult<String> {
        let width = self.width.unwrap_or(0);
        match value {
            FieldValue::Integer(n) => {
                let sign = if n < 0 { "-" } else { "" };
                let digits = n.unsigned_abs().to_string();
                let used = sign.len() + digits.len();
                if self.zero_fill && width > used {
                    Ok(format!("{sign}{}{digits}", "0".repeat(width - used)))
                } else {
                    Ok(format!("{:>width$}", format!("{sign}{digits}")))
                }
            }
            FieldValue::Text(text) => {
                if self.integer || self.zero_fill {
                    return Err(InventoryError::InvalidFormat {
                        field: field.to_string(),
                        spec: self.to_string(),
                        reason: format!("'{text}' is not an integer"),
                    });
                }
                Ok(format!("{text:<width$}"))
            }
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.zero_fill {
            write!(f, "0")?;
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if self.integer {
            write!(f, "d")?;
        }
        Ok(())
    }
}

/// A value supplied for a field at bind or render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
}

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field { name: String, spec: FormatSpec },
}

/// A parsed template.
///
/// Serialized as its source text, so malformed templates are rejected while
/// a catalog document is being decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameTemplate {
    segments: Vec<Segment>,
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl NameTemplate {
    /// Parses a template string.
    ///
    /// # Examples
    ///
    /// ```
    /// use hazard_inventory_core::name_template::NameTemplate;
    ///
    /// let template = NameTemplate::parse("inunriver_{scenario}_rp{return_period:05d}").unwrap();
    /// let fields: Vec<_> = template.fields().collect();
    /// assert_eq!(fields, ["scenario", "return_period"]);
    /// ```
    pub fn parse(template: &str) -> InventoryResult<Self> {
        let malformed = |reason: String| InventoryError::MalformedTemplate {
            template: template.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(malformed("single '}' outside a field".to_string())),
                '{' => {
                    let mut body = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(malformed("nested '{' in field".to_string())),
                            Some(ch) => body.push(ch),
                            None => return Err(malformed("unterminated field".to_string())),
                        }
                    }
                    let (name, spec) = match body.split_once(':') {
                        Some((name, spec)) => (name, Some(spec)),
                        None => (body.as_str(), None),
                    };
                    if !is_identifier(name) {
                        return Err(malformed(format!("invalid field name '{name}'")));
                    }
                    let spec = match spec {
                        Some(spec) => FormatSpec::parse(spec)
                            .ok_or_else(|| malformed(format!("unsupported format spec '{spec}'")))?,
                        None => FormatSpec::default(),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field {
                        name: name.to_string(),
                        spec,
                    });
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True for a template with no content at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Names of the fields in order of appearance (repeats included).
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// First field whose name is not in `allowed`.
    pub fn unknown_field(&self, allowed: &[&str]) -> Option<&str> {
        self.fields().find(|name| !allowed.contains(name))
    }

    /// Replace every `name` field with `value`, leaving other fields in place.
    pub fn bind(&self, name: &str, value: &str) -> InventoryResult<Self> {
        let mut segments: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let text = match segment {
                Segment::Field { name: field, spec } if field == name => {
                    spec.apply(field, FieldValue::Text(value))?
                }
                Segment::Literal(text) => text.clone(),
                field => {
                    segments.push(field.clone());
                    continue;
                }
            };
            match segments.last_mut() {
                Some(Segment::Literal(previous)) => previous.push_str(&text),
                _ if text.is_empty() => {}
                _ => segments.push(Segment::Literal(text)),
            }
        }
        Ok(Self { segments })
    }

    /// Render the template, looking up a value for each field.
    pub fn render<'a, F>(&self, lookup: F) -> InventoryResult<String>
    where
        F: Fn(&str) -> Option<FieldValue<'a>>,
    {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Field { name, spec } => {
                    let value = lookup(name).ok_or_else(|| InventoryError::MalformedTemplate {
                        template: self.to_string(),
                        reason: format!("no value supplied for field '{name}'"),
                    })?;
                    rendered.push_str(&spec.apply(name, value)?);
                }
            }
        }
        Ok(rendered)
    }
}

impl fmt::Display for NameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    write!(f, "{}", text.replace('{', "{{").replace('}', "}}"))?
                }
                Segment::Field { name, spec } if spec.is_empty() => write!(f, "{{{name}}}")?,
                Segment::Field { name, spec } => write!(f, "{{{name}:{spec}}}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for NameTemplate {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NameTemplate {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NameTemplate> for String {
    fn from(value: NameTemplate) -> Self {
        value.to_string()
    }
}
