//! XML documents converted to a nested mapping.
//!
//! Responsibilities:
//! - Turn element names into keys and element text into string scalars.
//! - Collect repeated sibling elements into a sequence.
//! - Keep attributes as `@name` keys and mixed text as `$text`.
//!
//! Invariants:
//! - Values are never type-coerced; `<port>3000</port>` yields the string `"3000"`.
//! - Text is trimmed; whitespace-only text is ignored.
//! - An element still open at end of input is an error.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

use super::TextToTree;
use crate::constants::{XML_ATTRIBUTE_PREFIX, XML_TEXT_KEY};
use crate::error::{ConfigError, Result};

/// XML parser backed by `quick-xml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlParser;

impl TextToTree for XmlParser {
    fn parse(&self, text: &str) -> Result<Vec<Value>> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut root = Map::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Element::open(&start)?),
                Event::Empty(start) => {
                    let element = Element::open(&start)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut root, element);
                    }
                }
                Event::Text(text) => {
                    if let Some(element) = stack.last_mut() {
                        element.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(element) = stack.last_mut() {
                        element.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(element) = stack.pop() {
            return Err(ConfigError::XmlUnclosed {
                element: element.name,
            });
        }

        Ok(vec![Value::Object(root)])
    }
}

/// An element whose end tag has not been read yet.
struct Element {
    name: String,
    attributes: Map<String, Value>,
    children: Map<String, Value>,
    text: String,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Map::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref());
            let value = attribute.unescape_value()?;
            attributes.insert(
                format!("{XML_ATTRIBUTE_PREFIX}{key}"),
                Value::String(value.into_owned()),
            );
        }

        Ok(Self {
            name,
            attributes,
            children: Map::new(),
            text: String::new(),
        })
    }

    fn into_value(self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text);
        }

        let mut map = self.attributes;
        for (key, value) in self.children {
            map.insert(key, value);
        }
        if !self.text.is_empty() {
            map.insert(XML_TEXT_KEY.to_string(), Value::String(self.text));
        }
        Value::Object(map)
    }
}

/// Attach a closed element to its parent, or to the document root.
fn attach(stack: &mut [Element], root: &mut Map<String, Value>, element: Element) {
    let parent = match stack.last_mut() {
        Some(parent) => &mut parent.children,
        None => root,
    };
    let name = element.name.clone();
    insert_repeated(parent, name, element.into_value());
}

/// Insert a child, turning repeated names into a sequence.
fn insert_repeated(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}
