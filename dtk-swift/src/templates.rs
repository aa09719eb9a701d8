//! Swift/UIKit template sources.
//!
//! Each template renders one fragment; the renderer decides the order and
//! joins fragments with newlines. Values are inserted verbatim (no HTML
//! escaping), so string literals are escaped before they reach the template.

pub const HEADER: &str = "header";
pub const IMPORTS: &str = "imports";
pub const WEIGHT_EXTENSION: &str = "weight_extension";
pub const FONT_EXTENSION_OPEN: &str = "font_extension_open";
pub const FONT_CONSTRUCTOR: &str = "font_constructor";
pub const FONT_EXTENSION_CLOSE: &str = "font_extension_close";
pub const ATTRIBUTED_HELPER: &str = "attributed_helper";
pub const ATTRIBUTED_ACCESSOR: &str = "attributed_accessor";
pub const STRING_EXTENSION_CLOSE: &str = "string_extension_close";

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    (HEADER, HEADER_TEMPLATE),
    (IMPORTS, IMPORTS_TEMPLATE),
    (WEIGHT_EXTENSION, WEIGHT_EXTENSION_TEMPLATE),
    (FONT_EXTENSION_OPEN, FONT_EXTENSION_OPEN_TEMPLATE),
    (FONT_CONSTRUCTOR, FONT_CONSTRUCTOR_TEMPLATE),
    (FONT_EXTENSION_CLOSE, FONT_EXTENSION_CLOSE_TEMPLATE),
    (ATTRIBUTED_HELPER, ATTRIBUTED_HELPER_TEMPLATE),
    (ATTRIBUTED_ACCESSOR, ATTRIBUTED_ACCESSOR_TEMPLATE),
    (STRING_EXTENSION_CLOSE, STRING_EXTENSION_CLOSE_TEMPLATE),
];

const HEADER_TEMPLATE: &str = "{{text}}";

const IMPORTS_TEMPLATE: &str = "import {{module}}";

const WEIGHT_EXTENSION_TEMPLATE: &str = r#"// MARK: - UIFont.Weight Extension for Style Dictionary Font Weights
extension UIFont.Weight {
    public static func from(styleDictionaryWeight weight: String) -> UIFont.Weight {
        switch weight.lowercased() {
        case "bold": return .bold
        case "semibold": return .semibold
        case "medium": return .medium
        case "regular": return .regular
        default: return .regular
        }
    }
}
"#;

const FONT_EXTENSION_OPEN_TEMPLATE: &str = "// MARK: - Typography Styles
extension UIFont {";

const FONT_CONSTRUCTOR_TEMPLATE: &str = r#"    {{access}} static func {{name}}() -> UIFont {
        let font = UIFont(name: "{{file_name}}", size: {{size}}) ?? .systemFont(ofSize: {{size}}, weight: .{{weight}})
        return font
    }"#;

const FONT_EXTENSION_CLOSE_TEMPLATE: &str = "} // end of extension UIFont
";

const ATTRIBUTED_HELPER_TEMPLATE: &str = r#"// MARK: - Attributed Typography
extension String {
    // Helper to apply typography styles to NSAttributedString
    {{access}} func attributed(for typographyStyle: () -> UIFont, lineHeight: CGFloat, letterSpacing: CGFloat) -> NSAttributedString {
        let font = typographyStyle()

        let paragraphStyle = NSMutableParagraphStyle()
        paragraphStyle.lineHeightMultiple = lineHeight

        let attributes: [NSAttributedString.Key: Any] = [
            .font: font,
            .kern: letterSpacing,
            .paragraphStyle: paragraphStyle
        ]
        return NSAttributedString(string: self, attributes: attributes)
    }

    // Convenience accessors for each typography style"#;

const ATTRIBUTED_ACCESSOR_TEMPLATE: &str = r#"    {{access}} var {{name}}Attributed: NSAttributedString {
        return self.attributed(for: UIFont.{{name}}, lineHeight: {{line_height}}, letterSpacing: {{letter_spacing}})
    }"#;

const STRING_EXTENSION_CLOSE_TEMPLATE: &str = "} // end of extension String
";
