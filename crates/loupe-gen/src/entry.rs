//! Preview entry-point source generation.
//!
//! Produces the self-contained program the dev server bundles and serves:
//! it imports the selected component by name with a computed relative path,
//! mounts it with its serialized default props, and renders a small overlay
//! naming the active component so it is obvious which artifact is live.
//!
//! A parallel diagnostic template renders a static placeholder with an
//! arbitrary message and needs no component at all; the lifecycle manager
//! writes it on startup to verify the pipeline is wired before any real
//! component is loaded.

use crate::error::{GenError, Result};
use crate::paths::relative_import;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prop value type, directing how the stored textual default is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    /// Quoted string literal.
    String,
    /// Numeric literal parsed from the stored text.
    Number,
    /// Boolean literal parsed from "true"/"false".
    Boolean,
    /// Array literal, emitted verbatim.
    Array,
    /// Object literal, emitted verbatim.
    Object,
    /// Executable expression; gated by [`FunctionPropPolicy`].
    Function,
}

/// A single component prop with its textual default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    /// Prop name, a valid identifier.
    pub name: String,
    /// Value type.
    #[serde(rename = "type")]
    pub kind: PropKind,
    /// Default value, always stored as text; interpretation is type-directed
    /// at serialization time.
    #[serde(rename = "defaultValue")]
    pub default_value: String,
}

/// Identity, location, and prop list of the component being previewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Exported component name.
    pub name: String,
    /// Absolute path of the source file exporting the component.
    pub absolute_path: PathBuf,
    /// Props in declaration order.
    pub props: Vec<Prop>,
}

/// How function-type prop defaults are handled.
///
/// Function defaults are workspace-authored text inlined as executable code,
/// which is an injection vector. The default policy refuses them; `Inline`
/// is an explicit opt-in for trusted workspaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionPropPolicy {
    /// Fail serialization with a descriptive error (default).
    #[default]
    Reject,
    /// Emit the stored text verbatim as an executable expression.
    Inline,
}

/// Serialize one prop default by its declared type.
pub fn serialize_prop(prop: &Prop, policy: FunctionPropPolicy) -> Result<String> {
    let text = prop.default_value.trim();
    match prop.kind {
        PropKind::String => Ok(js_string(&prop.default_value)),
        PropKind::Boolean => match text {
            "true" => Ok("true".to_string()),
            "false" => Ok("false".to_string()),
            _ => Err(GenError::InvalidBoolean {
                name: prop.name.clone(),
                value: prop.default_value.clone(),
            }),
        },
        PropKind::Number => {
            text.parse::<f64>().map_err(|_| GenError::InvalidNumber {
                name: prop.name.clone(),
                value: prop.default_value.clone(),
            })?;
            // The text already parsed; emit it as written to preserve the
            // author's formatting ("42" stays "42", not "42.0").
            Ok(text.to_string())
        }
        PropKind::Array | PropKind::Object => Ok(text.to_string()),
        PropKind::Function => match policy {
            FunctionPropPolicy::Inline => Ok(text.to_string()),
            FunctionPropPolicy::Reject => Err(GenError::FunctionRejected {
                name: prop.name.clone(),
            }),
        },
    }
}

/// Generate the preview entry source for a component.
///
/// `preview_root` is the directory the entry file will live in; the import
/// specifier is computed relative to it.
pub fn component_entry(
    descriptor: &ComponentDescriptor,
    preview_root: &Path,
    policy: FunctionPropPolicy,
) -> Result<String> {
    if !is_identifier(&descriptor.name) {
        return Err(GenError::InvalidIdentifier {
            name: descriptor.name.clone(),
        });
    }

    let import_path = relative_import(preview_root, &descriptor.absolute_path);

    let mut props_src = String::new();
    for prop in &descriptor.props {
        if !is_identifier(&prop.name) {
            return Err(GenError::InvalidIdentifier {
                name: prop.name.clone(),
            });
        }
        props_src.push_str("  ");
        props_src.push_str(&prop.name);
        props_src.push_str(": ");
        props_src.push_str(&serialize_prop(prop, policy)?);
        props_src.push_str(",\n");
    }

    let name = &descriptor.name;
    let overlay_label = js_string(name);

    Ok(format!(
        r#"import React from "react";
import {{ createRoot }} from "react-dom/client";
import {{ {name} }} from "{import_path}";
import "./safelist.css";

const props = {{
{props_src}}};

const container = document.getElementById("root");
if (!container) {{
  throw new Error("Preview root container #root not found");
}}

createRoot(container).render(
  <React.StrictMode>
    <div className="min-h-screen flex items-center justify-center">
      <{name} {{...props}} />
    </div>
    <div className="fixed bottom-2 right-2 rounded bg-neutral-900 px-2 py-1 text-xs text-neutral-50 opacity-75 pointer-events-none">
      {{{overlay_label}}}
    </div>
  </React.StrictMode>
);
"#
    ))
}

/// Generate the diagnostic placeholder entry.
///
/// Renders a static message and requires no component descriptor. Written at
/// startup so the embedding surface shows something meaningful before a
/// component is selected, and useful for confirming the pipeline end to end.
pub fn diagnostic_entry(message: &str) -> String {
    let message_literal = js_string(message);

    format!(
        r#"import React from "react";
import {{ createRoot }} from "react-dom/client";
import "./safelist.css";

const container = document.getElementById("root");
if (!container) {{
  throw new Error("Preview root container #root not found");
}}

createRoot(container).render(
  <div className="min-h-screen flex flex-col items-center justify-center gap-2">
    <div className="text-lg font-semibold">Loupe preview</div>
    <div className="text-sm text-neutral-500">{{{message_literal}}}</div>
  </div>
);
"#
    )
}

/// Emit a JSON string literal, which is also a valid JS string literal.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(props: Vec<Prop>) -> ComponentDescriptor {
        ComponentDescriptor {
            name: "Btn".to_string(),
            absolute_path: PathBuf::from("/ws/src/components/Btn.tsx"),
            props,
        }
    }

    fn prop(name: &str, kind: PropKind, default_value: &str) -> Prop {
        Prop {
            name: name.to_string(),
            kind,
            default_value: default_value.to_string(),
        }
    }

    #[test]
    fn test_string_prop_quoted() {
        let p = prop("label", PropKind::String, "Hi");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::default()).unwrap(),
            "\"Hi\""
        );
    }

    #[test]
    fn test_string_prop_escapes_quotes() {
        let p = prop("label", PropKind::String, "say \"hi\"");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::default()).unwrap(),
            r#""say \"hi\"""#
        );
    }

    #[test]
    fn test_boolean_prop_literal() {
        let p = prop("disabled", PropKind::Boolean, "true");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::default()).unwrap(),
            "true"
        );
    }

    #[test]
    fn test_boolean_prop_invalid_text() {
        let p = prop("disabled", PropKind::Boolean, "yes");
        let err = serialize_prop(&p, FunctionPropPolicy::default()).unwrap_err();
        assert!(err.to_string().contains("disabled"));
    }

    #[test]
    fn test_number_prop_preserves_text() {
        let p = prop("count", PropKind::Number, "42");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::default()).unwrap(),
            "42"
        );

        let p = prop("ratio", PropKind::Number, "3.14");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::default()).unwrap(),
            "3.14"
        );
    }

    #[test]
    fn test_number_prop_invalid_text() {
        let p = prop("count", PropKind::Number, "lots");
        assert!(serialize_prop(&p, FunctionPropPolicy::default()).is_err());
    }

    #[test]
    fn test_array_and_object_verbatim() {
        let p = prop("items", PropKind::Array, "[1, 2, 3]");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::default()).unwrap(),
            "[1, 2, 3]"
        );

        let p = prop("style", PropKind::Object, "{ color: 'red' }");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::default()).unwrap(),
            "{ color: 'red' }"
        );
    }

    #[test]
    fn test_function_prop_rejected_by_default() {
        let p = prop("onClick", PropKind::Function, "() => alert('hi')");
        let err = serialize_prop(&p, FunctionPropPolicy::default()).unwrap_err();
        assert!(matches!(err, GenError::FunctionRejected { .. }));
    }

    #[test]
    fn test_function_prop_inlined_when_opted_in() {
        let p = prop("onClick", PropKind::Function, "() => alert('hi')");
        assert_eq!(
            serialize_prop(&p, FunctionPropPolicy::Inline).unwrap(),
            "() => alert('hi')"
        );
    }

    #[test]
    fn test_component_entry_import_path() {
        let desc = descriptor(vec![]);
        let source = component_entry(
            &desc,
            Path::new("/ext/preview"),
            FunctionPropPolicy::default(),
        )
        .unwrap();
        assert!(source.contains(r#"import { Btn } from "../../ws/src/components/Btn.tsx";"#));
    }

    #[test]
    fn test_component_entry_props_and_overlay() {
        let desc = descriptor(vec![
            prop("label", PropKind::String, "Hi"),
            prop("disabled", PropKind::Boolean, "true"),
        ]);
        let source = component_entry(
            &desc,
            Path::new("/ext/preview"),
            FunctionPropPolicy::default(),
        )
        .unwrap();
        assert!(source.contains("label: \"Hi\",\n"));
        assert!(source.contains("disabled: true,\n"));
        assert!(source.contains("<Btn {...props} />"));
        // Diagnostic overlay names the active component.
        assert!(source.contains("{\"Btn\"}"));
        assert!(source.contains("import \"./safelist.css\";"));
    }

    #[test]
    fn test_component_entry_rejects_invalid_name() {
        let mut desc = descriptor(vec![]);
        desc.name = "not a name".to_string();
        assert!(component_entry(
            &desc,
            Path::new("/ext/preview"),
            FunctionPropPolicy::default()
        )
        .is_err());
    }

    #[test]
    fn test_diagnostic_entry_needs_no_descriptor() {
        let source = diagnostic_entry("Select a component to preview");
        assert!(source.contains("{\"Select a component to preview\"}"));
        assert!(source.contains("createRoot(container)"));
        assert!(!source.contains("{...props}"));
    }

    #[test]
    fn test_diagnostic_entry_escapes_message() {
        let source = diagnostic_entry("a \"quoted\" <message>");
        assert!(source.contains(r#"{"a \"quoted\" <message>"}"#));
    }
}
