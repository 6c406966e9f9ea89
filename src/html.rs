//! Append-only HTML sink used by the block handlers.
//!
//! The sink accumulates a tree of elements and text/raw leaves while the
//! parser walks the line buffer, then serializes it once at the end. One
//! sink instance is owned by a single conversion and threaded `&mut` through
//! every handler call, so independent conversions never share state.

#[derive(Debug, Clone)]
enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone)]
struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    void: bool,
    children: Vec<Node>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            void: false,
            children: Vec::new(),
        }
    }

    fn write_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        if self.void {
            out.push_str(" />");
        } else {
            out.push('>');
        }
    }
}

/// Tree-building document sink.
///
/// `open`/`close` must be balanced; `finish` closes anything left open so a
/// handler bug degrades to odd markup instead of a panic.
#[derive(Debug, Default)]
pub struct HtmlDoc {
    roots: Vec<Node>,
    open: Vec<Element>,
}

impl HtmlDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an element with no attributes.
    pub fn open(&mut self, tag: &'static str) {
        self.open.push(Element::new(tag));
    }

    /// Opens an element carrying a `class` attribute.
    pub fn open_with_class(&mut self, tag: &'static str, class: &str) {
        let mut element = Element::new(tag);
        element.attrs.push(("class", class.to_string()));
        self.open.push(element);
    }

    /// Closes the innermost open element.
    pub fn close(&mut self) {
        debug_assert!(!self.open.is_empty(), "close() without a matching open()");
        if let Some(element) = self.open.pop() {
            self.push(Node::Element(element));
        }
    }

    /// Appends character data, escaped on serialization.
    pub fn text(&mut self, text: &str) {
        if !text.is_empty() {
            self.push(Node::Text(text.to_string()));
        }
    }

    /// Appends pre-rendered markup verbatim.
    pub fn raw(&mut self, markup: &str) {
        if !markup.is_empty() {
            self.push(Node::Raw(markup.to_string()));
        }
    }

    /// Appends a self-closing element such as `img`.
    pub fn void_element(&mut self, tag: &'static str, attrs: &[(&'static str, &str)]) {
        let mut element = Element::new(tag);
        element.void = true;
        element.attrs = attrs
            .iter()
            .map(|(name, value)| (*name, (*value).to_string()))
            .collect();
        self.push(Node::Element(element));
    }

    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn into_roots(mut self) -> Vec<Node> {
        while !self.open.is_empty() {
            self.close();
        }
        self.roots
    }

    /// Serializes the fragment as the plain concatenation of its nodes.
    pub fn finish(self) -> String {
        let mut out = String::new();
        for node in &self.into_roots() {
            write_node(node, &mut out);
        }
        out
    }

    /// Serializes the fragment with `width` spaces per nesting level.
    ///
    /// Elements whose children are all elements go onto their own lines;
    /// elements holding character data stay on one line so the indentation
    /// cannot change how the fragment renders.
    pub fn finish_indented(self, width: usize) -> String {
        let mut out = String::new();
        for node in &self.into_roots() {
            write_node_indented(node, width, 0, &mut out);
        }
        if out.ends_with('\n') {
            out.pop();
        }
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Raw(markup) => out.push_str(markup),
        Node::Element(element) => {
            element.write_open_tag(out);
            if element.void {
                return;
            }
            for child in &element.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(element.tag);
            out.push('>');
        }
    }
}

fn indentable(element: &Element) -> bool {
    !element.void
        && !element.children.is_empty()
        && element
            .children
            .iter()
            .all(|child| matches!(child, Node::Element(_)))
}

fn write_node_indented(node: &Node, width: usize, depth: usize, out: &mut String) {
    let pad = " ".repeat(width * depth);
    out.push_str(&pad);
    match node {
        Node::Element(element) if indentable(element) => {
            element.write_open_tag(out);
            out.push('\n');
            for child in &element.children {
                write_node_indented(child, width, depth + 1, out);
            }
            out.push_str(&pad);
            out.push_str("</");
            out.push_str(element.tag);
            out.push('>');
        }
        other => write_node(other, out),
    }
    out.push('\n');
}
