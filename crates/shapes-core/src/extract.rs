//! Content extraction - annotation and structural tree from raw asset text
//!
//! Extraction never fails. Content that is not well-formed XML simply has
//! no tree, and inference continues on the annotation alone.

use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

// First `<!-- ... -->` block; `.` stops at newlines, surrounding whitespace may span them.
static ANNOTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\s*(.+?)\s*-->").unwrap());

/// One element of a parsed asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written, e.g. `circle` or `svg:circle`
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Pre-order walk over this element and all of its descendants
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// What could be read out of one asset's content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub annotation: Option<String>,
    pub tree: Option<Element>,
}

impl Extraction {
    pub fn is_parsed(&self) -> bool {
        self.tree.is_some()
    }
}

/// Extract the annotation and, if the content is well-formed, its element tree.
pub fn extract(content: &str) -> Extraction {
    let annotation = extract_annotation(content);
    let tree = match parse_tree(content) {
        Ok(root) => Some(root),
        Err(e) => {
            debug!("Structural parse failed, using annotation only: {}", e);
            None
        }
    };

    Extraction { annotation, tree }
}

pub fn extract_annotation(content: &str) -> Option<String> {
    ANNOTATION_REGEX
        .captures(content)
        .map(|cap| cap[1].trim().to_string())
}

#[derive(Error, Debug)]
enum StructureError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Attribute(#[from] AttrError),

    #[error("{0}")]
    Malformed(&'static str),

    #[error("unbound namespace prefix: {0}")]
    UnboundPrefix(String),
}

fn parse_tree(content: &str) -> Result<Element, StructureError> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut open: Vec<Element> = Vec::new();
    // Prefixes declared by each open element, parallel to `open`
    let mut scopes: Vec<Vec<String>> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(tag) => {
                if open.is_empty() && root.is_some() {
                    return Err(StructureError::Malformed("content after root element"));
                }
                let (element, declared) = scoped_element(&tag, &scopes)?;
                scopes.push(declared);
                open.push(element);
            }
            Event::Empty(tag) => {
                let (element, _) = scoped_element(&tag, &scopes)?;
                attach(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or(StructureError::Malformed("unexpected end tag"))?;
                scopes.pop();
                attach(&mut open, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if open.is_empty() && !text.trim().is_empty() {
                    return Err(StructureError::Malformed("text outside root element"));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !open.is_empty() {
        return Err(StructureError::Malformed("unclosed element"));
    }
    root.ok_or(StructureError::Malformed("no root element"))
}

fn element_from_tag(tag: &BytesStart<'_>) -> Result<Element, StructureError> {
    let mut element = Element::new(String::from_utf8_lossy(tag.name().as_ref()));
    for attr in tag.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Build the element for `tag` and check every prefix it uses is declared,
/// either on the tag itself or on an open ancestor.
fn scoped_element(
    tag: &BytesStart<'_>,
    scopes: &[Vec<String>],
) -> Result<(Element, Vec<String>), StructureError> {
    let element = element_from_tag(tag)?;
    let declared: Vec<String> = element
        .attributes
        .iter()
        .filter_map(|(key, _)| key.strip_prefix("xmlns:"))
        .map(str::to_string)
        .collect();

    let attribute_names = element
        .attributes
        .iter()
        .map(|(key, _)| key.as_str())
        .filter(|key| *key != "xmlns" && !key.starts_with("xmlns:"));

    for name in std::iter::once(element.name.as_str()).chain(attribute_names) {
        let Some((prefix, _)) = name.split_once(':') else {
            continue;
        };
        let bound = prefix == "xml"
            || declared.iter().any(|p| p == prefix)
            || scopes.iter().flatten().any(|p| p == prefix);
        if !bound {
            return Err(StructureError::UnboundPrefix(prefix.to_string()));
        }
    }

    Ok((element, declared))
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), StructureError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(StructureError::Malformed("content after root element")),
    }
    Ok(())
}
