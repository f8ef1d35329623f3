use serde::Deserialize;
use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::ast::{Expr, Ident, IdentName, MemberExpr, MemberProp, ThisExpr},
};

const DEFAULT_EMIT_CALLEE: &str = "this.$emit";
const DEFAULT_PARAM_PREFIX: &str = "_v";

/// Plugin options, passed as JSON by the host:
///
/// ```json
/// ["vue-jsx-modifier", { "emitCallee": "this.$emit", "paramPrefix": "_v" }]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifierConfig {
    /// Dotted path called by `__relay` handlers when no emitter is given
    pub emit_callee: String,
    /// Prefix of synthesized handler parameters
    pub param_prefix: String,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            emit_callee: DEFAULT_EMIT_CALLEE.to_string(),
            param_prefix: DEFAULT_PARAM_PREFIX.to_string(),
        }
    }
}

impl ModifierConfig {
    /// Lenient parse of the raw plugin config; anything unreadable means defaults.
    pub fn from_json(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<ModifierConfig>(raw) {
            Ok(config) => config.normalized(),
            Err(err) => {
                tracing::warn!(error = %err, "invalid vue-jsx-modifier config, using defaults");
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        if parse_callee_path(&self.emit_callee).is_none() {
            tracing::warn!(emit_callee = %self.emit_callee, "invalid emitCallee, using default");
            self.emit_callee = DEFAULT_EMIT_CALLEE.to_string();
        }
        if !is_identifier(&self.param_prefix) {
            tracing::warn!(param_prefix = %self.param_prefix, "invalid paramPrefix, using default");
            self.param_prefix = DEFAULT_PARAM_PREFIX.to_string();
        }
        self
    }

    /// Expression for the configured emit callee, e.g. `this.$emit`.
    pub fn emit_callee_expr(&self) -> Expr {
        parse_callee_path(&self.emit_callee)
            .or_else(|| parse_callee_path(DEFAULT_EMIT_CALLEE))
            .unwrap_or_else(|| Expr::This(ThisExpr { span: DUMMY_SP }))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn parse_callee_path(path: &str) -> Option<Expr> {
    let mut segments = path.split('.');
    let root = segments.next()?;
    let mut expr = if root == "this" {
        Expr::This(ThisExpr { span: DUMMY_SP })
    } else if is_identifier(root) {
        Expr::Ident(Ident::new(root.into(), DUMMY_SP, SyntaxContext::empty()))
    } else {
        return None;
    };
    for seg in segments {
        if !is_identifier(seg) {
            return None;
        }
        expr = Expr::Member(MemberExpr {
            span: DUMMY_SP,
            obj: Box::new(expr),
            prop: MemberProp::Ident(IdentName::new(seg.into(), DUMMY_SP)),
        });
    }
    Some(expr)
}
