//! Runtime companion shipped next to the plugin.
//!
//! The stubs only give the marker names a callable shape for editors and type
//! checkers; every call is removed by the transform, so reaching one at
//! runtime means the plugin is missing from the build.

pub const RUNTIME_JS: &str = include_str!("../runtime/index.js");
pub const RUNTIME_DTS: &str = include_str!("../runtime/index.d.ts");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::ALL_MODIFIERS;

    const MISCONFIGURED_MESSAGE: &str = "[vue-jsx-modifier] this method should be removed at compile time.\n\
         Put 'vue-jsx-modifier' into your SWC plugins (before the Vue JSX transform).";

    #[test]
    fn it_exports_every_marker() {
        for kind in ALL_MODIFIERS {
            let name = kind.marker_name();
            assert!(
                RUNTIME_JS.contains(&format!("exports.{name} = function {name}(")),
                "{name} missing from index.js"
            );
            assert!(
                RUNTIME_DTS.contains(&format!("export declare function {name}<")),
                "{name} missing from index.d.ts"
            );
        }
    }

    #[test]
    fn it_throws_the_configuration_message() {
        let (first, second) = MISCONFIGURED_MESSAGE
            .split_once('\n')
            .unwrap();
        assert!(RUNTIME_JS.contains(&format!("\"{first}\\n\" +")));
        assert!(RUNTIME_JS.contains(&format!("\"{second}\";")));
        assert!(RUNTIME_JS.contains("throw new Error(MISCONFIGURED);"));
    }
}
