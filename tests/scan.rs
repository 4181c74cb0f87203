use randex::scan::{Mark, Outline, Scanner, Unit};

fn marks(pattern: &str) -> Vec<Mark> {
    Scanner::new(pattern).map(|unit| unit.mark).collect()
}

fn depths(pattern: &str) -> Vec<usize> {
    Scanner::new(pattern).map(|unit| unit.depth).collect()
}

#[test]
fn test_plain_and_structural_marks() {
    assert_eq!(marks("ab"), vec![Mark::Plain, Mark::Plain]);
    assert_eq!(
        marks("(a|b)"),
        vec![Mark::Open, Mark::Plain, Mark::Pipe, Mark::Plain, Mark::Close]
    );
    assert_eq!(marks("*+?{}"), vec![Mark::Plain; 5]);
}

#[test]
fn test_escape_marks() {
    assert_eq!(marks(r"\("), vec![Mark::Escape, Mark::Escaped]);
    assert_eq!(
        marks(r"\\("),
        vec![Mark::Escape, Mark::Escaped, Mark::Open]
    );
    assert_eq!(marks(r"a\"), vec![Mark::Plain, Mark::Escape]);
}

#[test]
fn test_class_marks() {
    assert_eq!(
        marks("[a(|]"),
        vec![
            Mark::ClassOpen,
            Mark::ClassBody,
            Mark::ClassBody,
            Mark::ClassBody,
            Mark::ClassClose
        ]
    );
    assert_eq!(
        marks("[]]"),
        vec![Mark::ClassOpen, Mark::ClassBody, Mark::ClassClose]
    );
    assert_eq!(
        marks("[^]]"),
        vec![
            Mark::ClassOpen,
            Mark::ClassBody,
            Mark::ClassBody,
            Mark::ClassClose
        ]
    );
    assert_eq!(
        marks(r"[\]]"),
        vec![
            Mark::ClassOpen,
            Mark::ClassBody,
            Mark::ClassBody,
            Mark::ClassClose
        ]
    );
    assert_eq!(
        marks("[[:alpha:]]").last(),
        Some(&Mark::ClassClose)
    );
    assert_eq!(
        marks("[[:alpha:]]").iter().filter(|&&mark| mark == Mark::ClassClose).count(),
        1
    );
}

#[test]
fn test_depths() {
    assert_eq!(depths("(a(b))c"), vec![0, 1, 1, 2, 1, 0, 0]);
    assert_eq!(depths("a)"), vec![0, 0]);
    assert_eq!(marks("a)"), vec![Mark::Plain, Mark::Plain]);
}

#[test]
fn test_offsets_are_bytes() {
    let units: Vec<Unit> = Scanner::new("é(").collect();
    assert_eq!(units[0].offset, 0);
    assert_eq!(units[1].offset, 2);
    assert_eq!(units[1].ch, '(');
}

#[test]
fn test_outline_groups() {
    let outline = Outline::new("(a)(b(c))");
    assert_eq!(outline.close_of(0), Some(2));
    assert_eq!(outline.close_of(3), Some(8));
    assert_eq!(outline.open_of(8), Some(3));
    assert_eq!(outline.open_of(7), Some(5));
    assert_eq!(outline.close_of(1), None);
    assert!(outline.group_reaches_end(3));
    assert!(!outline.group_reaches_end(0));
    assert_eq!(outline.text(4, 8), "b(c)");
    assert_eq!(outline.text(3, outline.len()), "(b(c))");
}

#[test]
fn test_outline_pipes_and_classes() {
    let outline = Outline::new("a|(b|c)|[|]");
    assert_eq!(outline.top_level_pipes().collect::<Vec<_>>(), vec![7, 1]);
    assert_eq!(outline.class_open_of(10), Some(8));
    assert_eq!(outline.class_open_of(9), None);
}
