//! Generic XML tree, shaped the way the service's documents are read: child
//! elements become keys, text becomes leaves, repeated siblings become
//! sequences. Attributes are dropped.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Map(Vec<(String, Node)>),
    Seq(Vec<Node>),
}

impl Node {
    /// Child under `key`. A repeated key yields its [`Node::Seq`].
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// All children named `key` in document order, whether there are none,
    /// one or many of them.
    pub fn seq(&self, key: &str) -> Vec<&Node> {
        match self.get(key) {
            None => Vec::new(),
            Some(Node::Seq(items)) => items.iter().collect(),
            Some(node) => vec![node],
        }
    }
}

struct Frame {
    name: String,
    entries: Vec<(String, Node)>,
    text: String,
}

impl Frame {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
            text: String::new(),
        }
    }

    fn insert(&mut self, key: String, node: Node) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, Node::Seq(items))) => items.push(node),
            Some((_, slot)) => {
                let first = std::mem::replace(slot, Node::Seq(Vec::new()));
                *slot = Node::Seq(vec![first, node]);
            }
            None => self.entries.push((key, node)),
        }
    }

    fn finish(self) -> (String, Node) {
        let node = if self.entries.is_empty() {
            Node::Text(self.text)
        } else {
            Node::Map(self.entries)
        };
        (self.name, node)
    }
}

fn malformed(e: impl std::fmt::Display) -> Error {
    Error::Parse(e.to_string())
}

fn name_of(raw: &[u8]) -> Result<String> {
    Ok(std::str::from_utf8(raw).map_err(malformed)?.to_owned())
}

/// Parses a whole document. The returned node is a map holding the single
/// root element.
pub fn parse(text: &str) -> Result<Node> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Frame::new(String::new())];
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if stack.len() == 1 && !stack[0].entries.is_empty() {
                    return Err(Error::Parse("multiple root elements".into()));
                }
                stack.push(Frame::new(name_of(e.local_name().as_ref())?));
            }
            Event::Empty(e) => {
                if stack.len() == 1 && !stack[0].entries.is_empty() {
                    return Err(Error::Parse("multiple root elements".into()));
                }
                let name = name_of(e.local_name().as_ref())?;
                if let Some(top) = stack.last_mut() {
                    top.insert(name, Node::Text(String::new()));
                }
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(Error::Parse("unexpected end tag".into()));
                }
                if let Some(frame) = stack.pop() {
                    let (name, node) = frame.finish();
                    if let Some(top) = stack.last_mut() {
                        top.insert(name, node);
                    }
                }
            }
            Event::Text(e) => {
                let s = e.unescape().map_err(malformed)?;
                if stack.len() < 2 {
                    return Err(Error::Parse(format!("text outside root: {s:?}")));
                }
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&s);
                }
            }
            Event::CData(e) => {
                let s = std::str::from_utf8(&e).map_err(malformed)?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(s);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(Error::Parse("unclosed element at end of input".into()));
    }
    let (_, doc) = stack.remove(0).finish();
    match doc {
        Node::Map(_) => Ok(doc),
        _ => Err(Error::Parse("no root element".into())),
    }
}
