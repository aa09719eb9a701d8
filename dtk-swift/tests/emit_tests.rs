use std::collections::HashMap;

use dtk_core::{
    AccessLevel, DtkError, FileHeader, FormatOptions, LiteralResolver, ReferenceResolver, Result,
    TokenValue, TypographyToken,
};
use dtk_swift::emit;

/// In-memory dictionary that resolves `{path}` references one level deep.
struct MockDictionary {
    values: HashMap<String, TokenValue>,
}

impl MockDictionary {
    fn new(entries: &[(&str, TokenValue)]) -> Self {
        Self { values: entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect() }
    }
}

impl ReferenceResolver for MockDictionary {
    fn resolve(&self, value: &TokenValue) -> Result<TokenValue> {
        match value.reference_path() {
            Some(path) => self
                .values
                .get(path)
                .cloned()
                .ok_or_else(|| DtkError::resolve(value.to_string(), "no such token")),
            None => Ok(value.clone()),
        }
    }
}

fn title_token() -> TypographyToken {
    TypographyToken::new("Title1Bold", "Pretendard", "Bold", "28", "135%", "-2%")
}

#[test]
fn test_title_token_end_to_end() {
    let out = emit(&[title_token()], &LiteralResolver, &FormatOptions::default()).unwrap();

    assert!(out.contains("    internal static func Title1Bold() -> UIFont {"));
    assert!(out.contains(
        "let font = UIFont(name: \"Pretendard-Bold\", size: 28.0) ?? .systemFont(ofSize: 28.0, weight: .bold)"
    ));
    assert!(out.contains("    internal var Title1BoldAttributed: NSAttributedString {"));
    assert!(out.contains(
        "return self.attributed(for: UIFont.Title1Bold, lineHeight: 1.35, letterSpacing: -0.56)"
    ));
}

#[test]
fn test_unrecognised_weight_uses_bare_family_and_regular() {
    let token = TypographyToken::new("Quote", "Pretendard", "Italic", "18", "160%", "0");
    let out = emit(&[token], &LiteralResolver, &FormatOptions::default()).unwrap();

    assert!(out.contains(
        "UIFont(name: \"Pretendard\", size: 18.0) ?? .systemFont(ofSize: 18.0, weight: .regular)"
    ));
}

#[test]
fn test_references_are_resolved_through_the_resolver() {
    let dictionary = MockDictionary::new(&[
        ("font.family.primary", TokenValue::from("Pretendard")),
        ("font.weight.semibold", TokenValue::from("SemiBold")),
        ("font.size.lg", TokenValue::Number(20.0)),
        ("line-height.relaxed", TokenValue::from("150%")),
        ("letter-spacing.tight", TokenValue::from("-1")),
    ]);
    let token = TypographyToken::new(
        "HeadlineSemiBold",
        "{font.family.primary}",
        "{font.weight.semibold}",
        "{font.size.lg}",
        "{line-height.relaxed}",
        "{letter-spacing.tight}",
    );

    let out = emit(&[token], &dictionary, &FormatOptions::default()).unwrap();

    assert!(out.contains(
        "UIFont(name: \"Pretendard-SemiBold\", size: 20.0) ?? .systemFont(ofSize: 20.0, weight: .semibold)"
    ));
    assert!(out.contains("lineHeight: 1.5, letterSpacing: -1.0)"));
}

#[test]
fn test_resolver_failure_produces_no_output() {
    let dictionary = MockDictionary::new(&[]);
    let token = TypographyToken::new("Broken", "{font.family.missing}", "Bold", "12", "100%", "0");

    let err = emit(&[token], &dictionary, &FormatOptions::default()).unwrap_err();
    assert!(err.is_resolve_error());
    assert!(err.to_string().contains("{font.family.missing}"));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let tokens = vec![
        title_token(),
        TypographyToken::new("Body", "Inter", "Regular", "16", "150%", "0.5"),
    ];
    let options = FormatOptions::builder()
        .file_header(FileHeader::lines(["//", "// Do not edit directly", "//"]))
        .import("UIKit")
        .build();

    let first = emit(&tokens, &LiteralResolver, &options).unwrap();
    let second = emit(&tokens, &LiteralResolver, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_declarations_follow_input_order() {
    let names = ["Zeta", "Alpha", "Mid"];
    let tokens: Vec<_> = names
        .iter()
        .map(|name| TypographyToken::new(*name, "Inter", "Medium", "14", "120%", "0"))
        .collect();

    let out = emit(&tokens, &LiteralResolver, &FormatOptions::default()).unwrap();

    let constructors: Vec<_> =
        names.iter().map(|n| out.find(&format!("static func {n}()")).unwrap()).collect();
    let accessors: Vec<_> =
        names.iter().map(|n| out.find(&format!("var {n}Attributed")).unwrap()).collect();

    assert!(constructors.windows(2).all(|w| w[0] < w[1]));
    assert!(accessors.windows(2).all(|w| w[0] < w[1]));
    assert!(constructors.last().unwrap() < accessors.first().unwrap());
}

#[test]
fn test_sections_appear_in_order() {
    let options = FormatOptions::builder()
        .file_header(FileHeader::lines(["// Generated"]))
        .import("UIKit")
        .build();
    let out = emit(&[title_token()], &LiteralResolver, &options).unwrap();

    let positions = [
        out.find("// Generated").unwrap(),
        out.find("import UIKit").unwrap(),
        out.find("extension UIFont.Weight").unwrap(),
        out.find("static func Title1Bold()").unwrap(),
        out.find("func attributed(for typographyStyle").unwrap(),
        out.find("var Title1BoldAttributed").unwrap(),
    ];
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_absent_options_omit_sections() {
    let out = emit(&[title_token()], &LiteralResolver, &FormatOptions::default()).unwrap();
    assert!(out.starts_with("// MARK: - UIFont.Weight Extension"));
    assert!(!out.contains("import "));
}

#[test]
fn test_access_level_applies_to_generated_symbols() {
    let options = FormatOptions::builder().access_level(AccessLevel::Public).build();
    let out = emit(&[title_token()], &LiteralResolver, &options).unwrap();

    assert!(out.contains("public static func Title1Bold() -> UIFont"));
    assert!(out.contains("public func attributed(for typographyStyle"));
    assert!(out.contains("public var Title1BoldAttributed"));
    assert!(!out.contains("internal "));
}

#[test]
fn test_package_access_level_from_config() {
    let options: FormatOptions =
        serde_json::from_value(serde_json::json!({ "accessLevel": "package" })).unwrap();
    let out = emit(&[title_token()], &LiteralResolver, &options).unwrap();

    assert!(out.contains("package static func Title1Bold() -> UIFont"));
    assert!(out.contains("package func attributed(for typographyStyle"));
    assert!(out.contains("package var Title1BoldAttributed"));
}

#[test]
fn test_generated_header_receives_token_count() {
    let options = FormatOptions::builder()
        .file_header(FileHeader::generated(|ctx| {
            vec![format!("// {} - {} styles", ctx.format_name, ctx.token_count)]
        }))
        .build();
    let tokens = vec![title_token(), title_token()];

    let out = emit(&tokens, &LiteralResolver, &options).unwrap();
    assert!(out.starts_with("// swift/typography - 2 styles\n"));
}

#[test]
fn test_weight_helper_is_emitted_once() {
    let out = emit(&[title_token()], &LiteralResolver, &FormatOptions::default()).unwrap();
    assert_eq!(out.matches("extension UIFont.Weight {").count(), 1);
    assert!(out.contains("case \"semibold\": return .semibold"));
    assert!(out.contains("default: return .regular"));
}
