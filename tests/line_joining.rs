use stlreader::construct::Document;
use stlreader::stl::{join_lines, parse, LogicalLine};

#[test]
fn continuation_matches_single_line() {
    let single = parse(r#"[Home] -> [Feature:Fast] ::mod(title="Fast", order=1)"#);
    let split = parse("[Home] -> [Feature:Fast]\n    ::mod(title=\"Fast\", order=1)");
    assert_eq!(single, split);
    assert_eq!(split.len(), 1);
}

#[test]
fn continuation_across_several_lines() {
    let doc = parse("[Home] -> [Hero:Main]\n  ::mod(title=\"T\")\n  ::mod(subtitle=\"S\", title=\"U\")");
    assert_eq!(doc.len(), 1);
    let hero = &doc.statements()[0];
    assert_eq!(hero.modifier_as::<String>("title").as_deref(), Some("U"));
    assert_eq!(hero.modifier_as::<String>("subtitle").as_deref(), Some("S"));
}

#[test]
fn blank_line_ends_continuation() {
    let joined = join_lines("[A] -> [B]\n\n::mod(x=1)");
    assert_eq!(
        joined.lines,
        vec![
            LogicalLine::Text("[A] -> [B]".into()),
            LogicalLine::Separator,
            LogicalLine::Text("::mod(x=1)".into()),
        ]
    );
    let doc = parse("[A] -> [B]\n\n::mod(x=1)");
    assert_eq!(doc.len(), 1);
    assert!(doc.statements()[0].modifiers().is_empty());
}

#[test]
fn comments_are_isolated_and_ordered() {
    let text = "# First comment\n[A] -> [B]\n   #   second one  \n::mod(x=1)\n[C] -> [D]\n#third";
    let doc = parse(text);
    assert_eq!(doc.comments(), &["First comment", "second one", "third"]);
    // the comment line separates, so ::mod(x=1) never reaches [A] -> [B]
    assert_eq!(doc.len(), 2);
    assert!(doc.statements()[0].modifiers().is_empty());
    assert_eq!(doc.statements()[1].source().raw(), "C");
}

#[test]
fn anchor_line_never_continues() {
    let doc = parse("[A] -> [B]\n[C] -> [D]");
    assert_eq!(doc.len(), 2);
}

#[test]
fn unmatched_lines_are_skipped() {
    let doc = Document::parse("title: not a statement\n\n[A] -> [B]\n\nfree text here\n[Broken -> [X]");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.statements()[0].target().raw(), "B");
}

#[test]
fn statements_keep_source_order() {
    let doc = parse("[S] -> [T1]\n[S] -> [T2]\r\n[S] -> [T3]\n");
    let targets: Vec<&str> = doc.statements().iter().map(|s| s.target().raw()).collect();
    assert_eq!(targets, vec!["T1", "T2", "T3"]);
}

#[test]
fn empty_text_is_empty_document() {
    let doc = parse("");
    assert!(doc.is_empty());
    assert!(doc.comments().is_empty());
}

#[test]
fn byte_order_mark_does_not_hide_first_comment() {
    let doc = parse("\u{feff}# Home page\nnot joined\n[A] -> [B]");
    assert_eq!(doc.comments(), &["Home page"]);
    assert_eq!(doc.len(), 1);
    let joined = join_lines("\u{feff}[A] -> [B]");
    assert_eq!(joined.lines, vec![LogicalLine::Text("[A] -> [B]".into())]);
}
