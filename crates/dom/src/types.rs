pub type NodeId = u32;

/// Identifier of a node within one tree.
///
/// Ids are assigned by whoever builds the tree; this crate only requires
/// them to be unique within the tree they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub NodeId);

/// A node in the in-memory DOM tree.
///
/// Attribute values are optional to model boolean attributes
/// (`<input checked>` carries `("checked", None)`).
#[derive(Clone, Debug)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } => children,
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } => Some(children),
            Node::Element { children, .. } => Some(children),
            Node::Text { .. } => None,
        }
    }

    /// Returns `true` for elements whose tag name matches, ASCII
    /// case-insensitively.
    pub fn is_element(&self, tag: &str) -> bool {
        matches!(self, Node::Element { name, .. } if name.eq_ignore_ascii_case(tag))
    }

    /// Returns the value of the named attribute, if present with a value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }

    /// Returns `true` if the named attribute is present, with or without
    /// a value.
    pub fn has_attr(&self, name: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
            }
            _ => false,
        }
    }

    /// Sets (or inserts) the named attribute on an element.
    ///
    /// No-op on non-element nodes.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let Node::Element { attributes, .. } = self else {
            return;
        };
        if let Some(slot) = attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            slot.1 = Some(value.to_string());
        } else {
            attributes.push((name.to_string(), Some(value.to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(id: u32, name: &str, attributes: Vec<(String, Option<String>)>) -> Node {
        Node::Element {
            id: Id(id),
            name: name.to_string(),
            attributes,
            children: Vec::new(),
        }
    }

    #[test]
    fn attr_lookup_is_case_insensitive_on_names() {
        let node = elem(
            1,
            "input",
            vec![("Data-Value".to_string(), Some("v".to_string()))],
        );
        assert_eq!(node.attr("data-value"), Some("v"));
    }

    #[test]
    fn boolean_attribute_has_no_value() {
        let node = elem(1, "input", vec![("checked".to_string(), None)]);
        assert!(node.has_attr("checked"));
        assert_eq!(node.attr("checked"), None);
    }

    #[test]
    fn set_attr_overwrites_existing_entry() {
        let mut node = elem(
            1,
            "input",
            vec![("value".to_string(), Some("old".to_string()))],
        );
        node.set_attr("value", "new");
        assert_eq!(node.attr("value"), Some("new"));

        let Node::Element { attributes, .. } = &node else {
            unreachable!()
        };
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn set_attr_on_text_is_a_no_op() {
        let mut node = Node::Text {
            id: Id(1),
            text: "t".to_string(),
        };
        node.set_attr("value", "v");
        assert_eq!(node.attr("value"), None);
    }
}
