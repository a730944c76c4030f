use xmlstructdiff::{parse_str, LineContext, XmlNode};

#[test]
fn test_context_uses_start_line_and_opening_tag() {
    let forest = parse_str("<root>\n\n  <item kind=\"a\">\n  </item>\n</root>").unwrap();
    let item = &forest[0].children[0];
    assert_eq!(
        item.context(),
        LineContext {
            line: 3,
            opening_tag: "<item kind=\"a\">".to_string(),
        }
    );
    assert_eq!(item.end_line, 4);
}

#[test]
fn test_child_tags_is_a_set() {
    let forest = parse_str("<root><b/><a/><b/><c/></root>").unwrap();
    let tags: Vec<&str> = forest[0].child_tags().into_iter().collect();
    assert_eq!(tags, vec!["a", "b", "c"]);
}

#[test]
fn test_built_nodes() {
    let node = XmlNode::new("root", 1)
        .with_child(XmlNode::new("a", 2))
        .with_child(XmlNode::new("b", 3).with_child(XmlNode::new("c", 4)));
    assert_eq!(node.element_count(), 4);
    assert_eq!(node.depth(), 3);
}
