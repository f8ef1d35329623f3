use swc_core::common::{Span, Spanned};

#[derive(Debug)]
pub struct ModifierError {
    pub span: Span,
    pub kind: ModifierErrorKind,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModifierErrorKind {
    /// Data modifier on a reserved/event-like attribute, or event modifier on a prop
    #[error("{modifier} modifier can be used only in {expected}")]
    Placement {
        modifier: &'static str,
        expected: Placement,
    },
    #[error("{modifier} modifier must have {expected}")]
    Arity {
        modifier: &'static str,
        expected: &'static str,
    },
    /// An argument has the wrong syntactic form
    #[error("{0}")]
    Shape(String),
    /// `__relay` target whose property gives no event name
    #[error("Failed to determine event name to emit")]
    NameDerivation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    ComponentProp,
    EventHandler,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::ComponentProp => f.write_str("component prop"),
            Placement::EventHandler => f.write_str("event handler"),
        }
    }
}

impl ModifierError {
    pub fn new(span: Span, kind: ModifierErrorKind) -> Self {
        Self { span, kind }
    }
}

impl std::fmt::Display for ModifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for ModifierError {}

impl Spanned for ModifierError {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_core::common::DUMMY_SP;

    #[test]
    fn it_formats_messages() {
        let err = ModifierError::new(
            DUMMY_SP,
            ModifierErrorKind::Placement {
                modifier: "sync",
                expected: Placement::ComponentProp,
            },
        );
        assert_eq!(err.to_string(), "sync modifier can be used only in component prop");

        let err = ModifierErrorKind::Arity {
            modifier: "once",
            expected: "one argument",
        };
        assert_eq!(err.to_string(), "once modifier must have one argument");

        assert_eq!(
            ModifierErrorKind::NameDerivation.to_string(),
            "Failed to determine event name to emit"
        );
    }
}
