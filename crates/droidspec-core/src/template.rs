//! Embedded starter descriptor for `droidspec init`.
//!
//! The template is compiled into the binary; `{{variable}}` placeholders are
//! replaced at render time.

use std::collections::BTreeMap;

const STARTER: &str = r#"[application]
namespace = "{{namespace}}"
version-code = 1
version-name = "1.0.0"
multidex = true

[sdk]
# min and ndk are supplied by the toolchain when left unset
compile = {{compile_sdk}}
target = 34

[compile-options]
source-compatibility = "11"
target-compatibility = "11"
jvm-target = "11"

[variant.release]
# Signed with the debug keys for now so release builds work out of the box.
signing = "debug"
minify = true

[splits.abi]
enable = false
"#;

/// Variables available for `{{variable}}` interpolation in template content.
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Create a context with the standard descriptor variables.
    pub fn new(namespace: &str, compile_sdk: u32) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("namespace".to_string(), namespace.to_string());
        vars.insert("compile_sdk".to_string(), compile_sdk.to_string());
        Self { vars }
    }

    /// Add a custom variable to the context.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

/// Render the starter `Android.toml` with the given context.
pub fn render_starter(ctx: &TemplateContext) -> String {
    interpolate(STARTER, ctx)
}

/// Replace all `{{key}}` placeholders in `input` with values from `ctx`.
/// Unknown keys are left untouched.
pub fn interpolate(input: &str, ctx: &TemplateContext) -> String {
    let mut result = input.to_string();
    for (key, value) in &ctx.vars {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
