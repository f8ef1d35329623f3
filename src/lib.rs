use swc_core::{
    common::errors::HANDLER,
    ecma::{
        ast::*,
        visit::{VisitMut, VisitMutWith},
    },
    plugin::{plugin_transform, proxies::TransformPluginProgramMetadata},
};

pub mod config;
pub mod error;
pub mod modifier;
pub mod process;
pub mod runtime;
pub mod scope;
pub mod synth;

#[cfg(test)]
mod test_utils;

pub use config::ModifierConfig;
pub use error::{ModifierError, ModifierErrorKind, Placement};
pub use modifier::{Bucket, EventModifier, ModifierKind};

use process::{AttrAction, Processor};
use scope::ScopeStack;
use synth::Accumulator;

pub const PLUGIN_NAME: &str = "vue-jsx-modifier";

// -----------------------------------------------------------------------------
// Transform state
// -----------------------------------------------------------------------------

/// Rewrites modifier calls on every JSX opening element of a program.
///
/// Must run before the pass lowering JSX into `h()` calls. The first error
/// stops all further rewriting; collect it with [`ModifierTransform::finish`].
pub struct ModifierTransform {
    config: ModifierConfig,
    emit_callee: Expr,
    scopes: ScopeStack,
    error: Option<ModifierError>,
}

impl ModifierTransform {
    pub fn new(config: ModifierConfig) -> Self {
        let emit_callee = config.emit_callee_expr();
        Self {
            config,
            emit_callee,
            scopes: ScopeStack::default(),
            error: None,
        }
    }

    pub fn finish(self) -> Result<(), ModifierError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn rewrite_opening_element(&self, el: &mut JSXOpeningElement) -> Result<(), ModifierError> {
        let processor = Processor {
            scopes: &self.scopes,
            emit_callee: &self.emit_callee,
            param_prefix: &self.config.param_prefix,
        };
        let mut acc = Accumulator::default();

        let mut i = 0;
        while i < el.attrs.len() {
            if let JSXAttrOrSpread::JSXAttr(attr) = &mut el.attrs[i] {
                if processor.dispatch(attr, &mut acc)? == AttrAction::Remove {
                    el.attrs.remove(i);
                    continue;
                }
            }
            i += 1;
        }

        let handlers = acc.len();
        if let Some(vnode_data) = acc.into_spread_attr() {
            tracing::debug!(handlers, "attached vnode data spread");
            el.attrs.push(vnode_data);
        }
        Ok(())
    }

    fn with_scope<N>(&mut self, names: std::collections::HashSet<String>, node: &mut N)
    where
        N: VisitMutWith<Self>,
    {
        self.scopes.push(names);
        node.visit_mut_children_with(self);
        self.scopes.pop();
    }
}

impl VisitMut for ModifierTransform {
    fn visit_mut_module(&mut self, m: &mut Module) {
        self.with_scope(scope::module_bindings(m), m);
    }

    fn visit_mut_script(&mut self, s: &mut Script) {
        self.with_scope(scope::script_bindings(s), s);
    }

    fn visit_mut_function(&mut self, f: &mut Function) {
        self.with_scope(scope::function_bindings(f), f);
    }

    fn visit_mut_fn_expr(&mut self, f: &mut FnExpr) {
        self.with_scope(scope::expr_name_bindings(f.ident.as_ref()), f);
    }

    fn visit_mut_class_expr(&mut self, c: &mut ClassExpr) {
        self.with_scope(scope::expr_name_bindings(c.ident.as_ref()), c);
    }

    fn visit_mut_arrow_expr(&mut self, a: &mut ArrowExpr) {
        self.with_scope(scope::arrow_bindings(a), a);
    }

    fn visit_mut_constructor(&mut self, c: &mut Constructor) {
        self.with_scope(scope::constructor_bindings(c), c);
    }

    fn visit_mut_jsx_opening_element(&mut self, el: &mut JSXOpeningElement) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.rewrite_opening_element(el) {
            tracing::debug!(error = %err, "modifier rewrite failed");
            self.error = Some(err);
            return;
        }
        // Elements nested in attribute values get their own pass.
        el.visit_mut_children_with(self);
    }
}

/// Runs the modifier rewrite over a whole program.
pub fn transform_program(program: &mut Program, config: &ModifierConfig) -> Result<(), ModifierError> {
    let mut transform = ModifierTransform::new(config.clone());
    program.visit_mut_with(&mut transform);
    transform.finish()
}

// -----------------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------------

#[plugin_transform]
pub fn process_transform(mut program: Program, metadata: TransformPluginProgramMetadata) -> Program {
    let config = metadata
        .get_transform_plugin_config()
        .map(|raw| ModifierConfig::from_json(&raw))
        .unwrap_or_default();

    if let Err(err) = transform_program(&mut program, &config) {
        HANDLER.with(|handler| {
            handler
                .struct_span_err(err.span, &format!("[{}] {}", PLUGIN_NAME, err))
                .emit()
        });
    }

    program
}
