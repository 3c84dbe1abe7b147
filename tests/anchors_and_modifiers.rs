use stlreader::datatype::Value;
use stlreader::stl::{parse_anchor, parse_modifier_value, parse_modifiers, parse_statement};

#[test]
fn anchor_without_colon_is_bare_name() {
    let anchor = parse_anchor("  Overview ");
    assert_eq!(anchor.name(), "Overview");
    assert_eq!(anchor.namespace(), None);
    assert_eq!(anchor.raw(), "Overview");
}

#[test]
fn anchor_splits_at_first_colon_only() {
    let anchor = parse_anchor("NS:Name");
    assert_eq!(anchor.namespace(), Some("NS"));
    assert_eq!(anchor.name(), "Name");
    assert_eq!(anchor.raw(), "NS:Name");
    // everything after the first colon belongs to the name
    let anchor = parse_anchor("Doc:Guide:Intro");
    assert_eq!(anchor.namespace(), Some("Doc"));
    assert_eq!(anchor.name(), "Guide:Intro");
    assert_eq!(format!("{}:{}", anchor.namespace().unwrap(), anchor.name()), anchor.raw());
}

#[test]
fn modifier_typing() {
    let mods = parse_modifiers(r#"a=true,b=3.5,c="x,y""#);
    assert_eq!(mods.len(), 3);
    assert_eq!(mods.get("a"), Some(&Value::Bool(true)));
    assert_eq!(mods.get("b"), Some(&Value::Number(3.5)));
    // the comma inside the quotes does not split the pair
    assert_eq!(mods.get("c"), Some(&Value::Text("x,y".into())));
}

#[test]
fn literal_precedence() {
    assert_eq!(parse_modifier_value("false"), Value::Bool(false));
    assert_eq!(parse_modifier_value("-12"), Value::Number(-12.0));
    assert_eq!(parse_modifier_value(" 2019 "), Value::Number(2019.0));
    assert_eq!(parse_modifier_value("\"true\""), Value::Text("true".into()));
    assert_eq!(parse_modifier_value("'42'"), Value::Text("42".into()));
    assert_eq!(parse_modifier_value("1.2.3"), Value::Text("1.2.3".into()));
    assert_eq!(parse_modifier_value("TRUE"), Value::Text("TRUE".into()));
    assert_eq!(parse_modifier_value("bare words"), Value::Text("bare words".into()));
}

#[test]
fn escaped_quotes_stay_literal() {
    let mods = parse_modifiers(r#"title="say \"hi\"", note='it\'s'"#);
    assert_eq!(mods.get("title"), Some(&Value::Text(r#"say \"hi\""#.into())));
    assert_eq!(mods.get("note"), Some(&Value::Text(r"it\'s".into())));
}

#[test]
fn later_modifier_block_wins() {
    let statement = parse_statement(r#"[A] -> [B] ::mod(x=1, y="keep") ::mod(x=2)"#).expect("statement");
    assert_eq!(statement.modifier("x"), Some(&Value::Number(2.0)));
    assert_eq!(statement.modifier("y"), Some(&Value::Text("keep".into())));
}

#[test]
fn unicode_arrow_and_spacing() {
    let statement = parse_statement("[Nav:Main]→[Link:Docs] ::mod(href=\"/docs\")").expect("statement");
    assert_eq!(statement.source().raw(), "Nav:Main");
    assert_eq!(statement.target().name(), "Docs");
    assert_eq!(statement.modifier("href"), Some(&Value::Text("/docs".into())));
}

#[test]
fn nested_parentheses_inside_block() {
    let statement = parse_statement(r#"[A] -> [B] ::mod(api="parse(text)", order=3)"#).expect("statement");
    assert_eq!(statement.modifier("api"), Some(&Value::Text("parse(text)".into())));
    assert_eq!(statement.modifier("order"), Some(&Value::Number(3.0)));
}

#[test]
fn non_statement_lines_are_rejected() {
    assert!(parse_statement("just prose").is_none());
    assert!(parse_statement("[A] [B]").is_none());
    assert!(parse_statement("[] -> [B]").is_none());
}

#[test]
fn repeated_key_in_one_block_keeps_last() {
    let mods = parse_modifiers("x=1, x=\"two\"");
    assert_eq!(mods.len(), 1);
    assert_eq!(mods.get("x"), Some(&Value::Text("two".into())));
}

#[test]
fn numbers_read_as_text_like_page_scripts() {
    let statement = parse_statement(
        "[ASO:Level_1] -> [Layer:L] ::mod(year=2019, zero=-0, big=1000000000000000000000, tiny=0.0000001, small=0.000001, half=-2.5)",
    )
    .expect("statement");
    let text = |key: &str| statement.modifier_as::<String>(key);
    assert_eq!(text("year").as_deref(), Some("2019"));
    assert_eq!(text("zero").as_deref(), Some("0"));
    assert_eq!(text("big").as_deref(), Some("1e+21"));
    assert_eq!(text("tiny").as_deref(), Some("1e-7"));
    assert_eq!(text("small").as_deref(), Some("0.000001"));
    assert_eq!(text("half").as_deref(), Some("-2.5"));
}
