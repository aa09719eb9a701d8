//! Swift/UIKit renderer for typography documents.

use dtk_core::{PlatformRenderer, ResolvedTypographyStyle, Result, TypographyDocument};
use serde::Serialize;
use serde_json::json;

use crate::SWIFT_TYPOGRAPHY_FORMAT;
use crate::literal::{float_literal, string_literal_contents};
use crate::template_engine::TemplateEngine;
use crate::templates;

/// Template data for one style. Numbers are pre-formatted as Swift literals.
#[derive(Debug, Serialize)]
struct StyleContext<'a> {
    access: &'a str,
    name: &'a str,
    file_name: String,
    size: String,
    weight: &'static str,
    line_height: String,
    letter_spacing: String,
}

impl<'a> StyleContext<'a> {
    fn new(access: &'a str, style: &'a ResolvedTypographyStyle) -> Self {
        Self {
            access,
            name: &style.name,
            file_name: string_literal_contents(&style.font_file_name),
            size: float_literal(style.font_size_points),
            weight: style.platform_weight.as_str(),
            line_height: float_literal(style.line_height_multiple),
            letter_spacing: float_literal(style.letter_spacing_points),
        }
    }
}

/// Renders `UIFont` and `NSAttributedString` extensions.
///
/// Output sections, in order: header, imports, weight helper, one font
/// constructor per style, the attributed-string helper, one accessor per style.
#[derive(Debug)]
pub struct SwiftUiKitRenderer {
    engine: TemplateEngine,
}

impl SwiftUiKitRenderer {
    pub fn new() -> Result<Self> {
        Ok(Self { engine: TemplateEngine::new()? })
    }
}

impl PlatformRenderer for SwiftUiKitRenderer {
    fn format_name(&self) -> &str {
        SWIFT_TYPOGRAPHY_FORMAT
    }

    fn render(&self, document: &TypographyDocument) -> Result<String> {
        let access = document.access_level.keyword();
        let styles: Vec<StyleContext<'_>> =
            document.styles.iter().map(|style| StyleContext::new(access, style)).collect();
        let mut output = Vec::new();

        if !document.header_lines.is_empty() {
            let text = document.header_lines.join("\n");
            output.push(self.engine.render(templates::HEADER, &json!({ "text": text }))?);
            output.push(String::new());
        }

        if !document.imports.is_empty() {
            for module in &document.imports {
                output.push(self.engine.render(templates::IMPORTS, &json!({ "module": module }))?);
            }
            output.push(String::new());
        }

        output.push(self.engine.render(templates::WEIGHT_EXTENSION, &json!({}))?);

        output.push(self.engine.render(templates::FONT_EXTENSION_OPEN, &json!({}))?);
        for style in &styles {
            output.push(self.engine.render(templates::FONT_CONSTRUCTOR, style)?);
        }
        output.push(self.engine.render(templates::FONT_EXTENSION_CLOSE, &json!({}))?);

        let helper = json!({ "access": access });
        output.push(self.engine.render(templates::ATTRIBUTED_HELPER, &helper)?);
        for style in &styles {
            output.push(String::new());
            output.push(self.engine.render(templates::ATTRIBUTED_ACCESSOR, style)?);
        }
        output.push(self.engine.render(templates::STRING_EXTENSION_CLOSE, &json!({}))?);

        Ok(output.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtk_core::{AccessLevel, FontWeight};

    fn style(name: &str, file: &str, weight: FontWeight) -> ResolvedTypographyStyle {
        ResolvedTypographyStyle {
            name: name.to_string(),
            font_family_name: "Pretendard".to_string(),
            font_weight_name: weight.as_str().to_string(),
            font_size_points: 16.0,
            line_height_multiple: 1.5,
            letter_spacing_points: 0.0,
            platform_weight: weight,
            font_file_name: file.to_string(),
        }
    }

    fn document(styles: Vec<ResolvedTypographyStyle>) -> TypographyDocument {
        TypographyDocument {
            header_lines: Vec::new(),
            imports: Vec::new(),
            access_level: AccessLevel::Internal,
            styles,
        }
    }

    #[test]
    fn test_empty_document_still_has_scaffolding() {
        let renderer = SwiftUiKitRenderer::new().unwrap();
        let out = renderer.render(&document(Vec::new())).unwrap();

        assert!(out.starts_with("// MARK: - UIFont.Weight Extension"));
        assert!(out.contains("extension UIFont {"));
        assert!(out.contains("} // end of extension UIFont"));
        assert!(out.contains("internal func attributed(for typographyStyle: () -> UIFont"));
        assert!(out.ends_with("} // end of extension String\n"));
        assert!(!out.contains("import "));
    }

    #[test]
    fn test_font_constructor_line() {
        let renderer = SwiftUiKitRenderer::new().unwrap();
        let out = renderer
            .render(&document(vec![style("BodyMedium", "Pretendard-Medium", FontWeight::Medium)]))
            .unwrap();

        assert!(out.contains("    internal static func BodyMedium() -> UIFont {\n"));
        assert!(out.contains(
            "let font = UIFont(name: \"Pretendard-Medium\", size: 16.0) ?? .systemFont(ofSize: 16.0, weight: .medium)"
        ));
        assert!(out.contains("    internal var BodyMediumAttributed: NSAttributedString {\n"));
        assert!(out.contains(
            "return self.attributed(for: UIFont.BodyMedium, lineHeight: 1.5, letterSpacing: 0.0)"
        ));
    }

    #[test]
    fn test_file_name_is_escaped() {
        let renderer = SwiftUiKitRenderer::new().unwrap();
        let out = renderer
            .render(&document(vec![style("Odd", "Odd\"Family", FontWeight::Regular)]))
            .unwrap();
        assert!(out.contains("UIFont(name: \"Odd\\\"Family\", size: 16.0)"));
    }

    #[test]
    fn test_header_and_imports_come_first() {
        let renderer = SwiftUiKitRenderer::new().unwrap();
        let mut doc = document(Vec::new());
        doc.header_lines = vec!["//".to_string(), "// Do not edit directly".to_string()];
        doc.imports = vec!["UIKit".to_string(), "Foundation".to_string()];

        let out = renderer.render(&doc).unwrap();
        assert!(out.starts_with(
            "//\n// Do not edit directly\n\nimport UIKit\nimport Foundation\n\n// MARK:"
        ));
    }

    #[test]
    fn test_format_name() {
        let renderer = SwiftUiKitRenderer::new().unwrap();
        assert_eq!(renderer.format_name(), "swift/typography");
    }
}
