use scraper::ElementRef;
use ego_tree::NodeRef;
use scraper::node::Node;

/// Flattens the visible text of an element.
///
/// Each direct child contributes its own flattened text, and the
/// contributions are joined with single spaces. An element child with no
/// text descendants contributes an empty string, which still occupies a
/// join slot: an anchor wrapping an icon followed by the literal text
/// "pnpm" flattens to " pnpm". Downstream fixtures depend on that artifact,
/// so the rule is applied exactly, with no trimming.
pub fn flatten(element: ElementRef) -> String {
    element
        .children()
        .filter_map(node_text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn node_text(node: NodeRef<Node>) -> Option<String> {
    match node.value() {
        Node::Text(text) => Some(text.text.to_string()),
        Node::Element(_) => Some(
            node.children()
                .filter_map(node_text)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        // Comments, doctypes etc. don't occupy a join slot
        _ => None,
    }
}
