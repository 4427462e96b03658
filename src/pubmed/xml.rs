//! Minimal element tree over EFetch XML with optional path lookups
//!
//! Record fields live at fixed paths in the document. Lookups return
//! `None` for a missing path instead of failing, so each field can be
//! reported as absent independently.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{PubMedError, Result};

/// One XML element with its direct text and child elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlNode {
    name: String,
    text: Option<String>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    fn from_start(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Parse a document and return its root element
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // Open elements, innermost last
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => stack.push(XmlNode::from_start(e)),
                Ok(Event::Empty(ref e)) => {
                    let node = XmlNode::from_start(e);
                    attach(&mut stack, &mut root, node)?;
                }
                Ok(Event::End(_)) => {
                    let node = stack.pop().ok_or_else(|| PubMedError::XmlParseError {
                        message: "unbalanced closing tag".to_string(),
                    })?;
                    attach(&mut stack, &mut root, node)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|_| PubMedError::XmlParseError {
                            message: "Failed to decode XML text".to_string(),
                        })?
                        .into_owned();
                    push_text(&mut stack, &text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    push_text(&mut stack, &text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(PubMedError::XmlParseError {
                        message: format!("XML parsing error: {}", e),
                    });
                }
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(PubMedError::XmlParseError {
                message: format!("unclosed element <{}>", stack[stack.len() - 1].name),
            });
        }

        let root = root.ok_or_else(|| PubMedError::XmlParseError {
            message: "document has no root element".to_string(),
        })?;
        debug!(root = %root.name, children = root.children.len(), "Parsed XML document");
        Ok(root)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's own text content, `None` if it has none
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First descendant matching a `/`-separated path of child names
    ///
    /// The path is relative to this element, so the element's own name is
    /// not part of it. Matches are taken in document order.
    pub fn find(&self, path: &str) -> Option<&XmlNode> {
        self.find_all(path).into_iter().next()
    }

    /// Every descendant matching a `/`-separated path, in document order
    pub fn find_all(&self, path: &str) -> Vec<&XmlNode> {
        let mut current = vec![self];
        for step in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .into_iter()
                .flat_map(move |node| node.children.iter().filter(move |child| child.name == step))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

fn push_text(stack: &mut [XmlNode], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(node) = stack.last_mut() {
        node.text.get_or_insert_with(String::new).push_str(text);
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => {
            return Err(PubMedError::XmlParseError {
                message: format!("multiple root elements, found <{}>", node.name),
            });
        }
    }
    Ok(())
}
