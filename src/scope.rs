use std::collections::HashSet;
use swc_core::ecma::{
    ast::*,
    utils::find_pat_ids,
    visit::{Visit, VisitWith},
};

/// Names bound by each function-like scope currently entered, outermost first.
///
/// Block scoping is folded into the enclosing function: a `let` inside an
/// `if` counts as bound for the whole function. This only ever makes
/// `fresh_name` skip more candidates.
#[derive(Default)]
pub struct ScopeStack {
    scopes: Vec<HashSet<String>>,
}

impl ScopeStack {
    pub fn push(&mut self, names: HashSet<String>) {
        self.scopes.push(names);
    }

    pub fn pop(&mut self) {
        self.scopes.pop();
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.contains(name))
    }

    /// `prefix0`, `prefix1`, ... the first one not bound in a reachable scope.
    pub fn fresh_name(&self, prefix: &str) -> String {
        let mut i = 0usize;
        loop {
            let name = format!("{prefix}{i}");
            if !self.is_bound(&name) {
                return name;
            }
            i += 1;
        }
    }
}

// -----------------------------------------------------------------------------
// Binding collection
// -----------------------------------------------------------------------------

pub fn module_bindings(module: &Module) -> HashSet<String> {
    let mut out = HashSet::new();
    module.visit_with(&mut DeclaredNames { out: &mut out });
    out
}

pub fn script_bindings(script: &Script) -> HashSet<String> {
    let mut out = HashSet::new();
    script.visit_with(&mut DeclaredNames { out: &mut out });
    out
}

/// The own name of a function or class expression, visible only inside it.
pub fn expr_name_bindings(ident: Option<&Ident>) -> HashSet<String> {
    ident.map(|id| id.sym.to_string()).into_iter().collect()
}

pub fn function_bindings(function: &Function) -> HashSet<String> {
    let mut out = HashSet::new();
    for param in &function.params {
        insert_pat(&mut out, &param.pat);
    }
    if let Some(body) = &function.body {
        body.visit_with(&mut DeclaredNames { out: &mut out });
    }
    out
}

pub fn arrow_bindings(arrow: &ArrowExpr) -> HashSet<String> {
    let mut out = HashSet::new();
    for pat in &arrow.params {
        insert_pat(&mut out, pat);
    }
    arrow.body.visit_with(&mut DeclaredNames { out: &mut out });
    out
}

pub fn constructor_bindings(ctor: &Constructor) -> HashSet<String> {
    let mut out = HashSet::new();
    for param in &ctor.params {
        match param {
            ParamOrTsParamProp::Param(p) => insert_pat(&mut out, &p.pat),
            ParamOrTsParamProp::TsParamProp(p) => match &p.param {
                TsParamPropParam::Ident(id) => {
                    out.insert(id.id.sym.to_string());
                }
                TsParamPropParam::Assign(assign) => insert_pat(&mut out, &assign.left),
            },
        }
    }
    if let Some(body) = &ctor.body {
        body.visit_with(&mut DeclaredNames { out: &mut out });
    }
    out
}

fn insert_pat(out: &mut HashSet<String>, pat: &Pat) {
    let ids: Vec<Id> = find_pat_ids(pat);
    out.extend(ids.into_iter().map(|(sym, _)| sym.to_string()));
}

/// Collects declarations of one scope without entering nested functions.
struct DeclaredNames<'a> {
    out: &'a mut HashSet<String>,
}

impl Visit for DeclaredNames<'_> {
    fn visit_var_declarator(&mut self, d: &VarDeclarator) {
        insert_pat(self.out, &d.name);
        d.init.visit_with(self);
    }

    fn visit_fn_decl(&mut self, n: &FnDecl) {
        self.out.insert(n.ident.sym.to_string());
    }

    fn visit_class_decl(&mut self, n: &ClassDecl) {
        self.out.insert(n.ident.sym.to_string());
    }

    fn visit_catch_clause(&mut self, n: &CatchClause) {
        if let Some(param) = &n.param {
            insert_pat(self.out, param);
        }
        n.body.visit_with(self);
    }

    fn visit_import_specifier(&mut self, n: &ImportSpecifier) {
        let local = match n {
            ImportSpecifier::Named(s) => &s.local,
            ImportSpecifier::Default(s) => &s.local,
            ImportSpecifier::Namespace(s) => &s.local,
        };
        self.out.insert(local.sym.to_string());
    }

    // Nested scopes are collected when the transform enters them.
    fn visit_function(&mut self, _: &Function) {}
    fn visit_arrow_expr(&mut self, _: &ArrowExpr) {}
    fn visit_class(&mut self, _: &Class) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::parse_module;
    use swc_core::common::{SyntaxContext, DUMMY_SP};

    fn names(set: &HashSet<String>) -> Vec<String> {
        let mut v: Vec<String> = set.iter().cloned().collect();
        v.sort();
        v
    }

    #[test]
    fn it_collects_module_declarations() {
        let module = parse_module(
            "import A, { b as c } from 'x'; import * as ns from 'y';
             const { d, e: [f] } = obj; let g; var h = () => { var inner; };
             function k(param) { var alsoInner; } class L {}
             try {} catch (err) { let m; }",
        );
        assert_eq!(
            names(&module_bindings(&module)),
            vec!["A", "L", "c", "d", "err", "f", "g", "h", "k", "m", "ns"]
        );
    }

    #[test]
    fn it_picks_first_unbound_name() {
        let mut scopes = ScopeStack::default();
        assert_eq!(scopes.fresh_name("_v"), "_v0");

        scopes.push(["_v0".to_string()].into_iter().collect());
        assert_eq!(scopes.fresh_name("_v"), "_v1");

        scopes.push(["_v1".to_string(), "_v3".to_string()].into_iter().collect());
        assert_eq!(scopes.fresh_name("_v"), "_v2");

        scopes.pop();
        assert_eq!(scopes.fresh_name("_v"), "_v1");
    }

    #[test]
    fn it_binds_expression_names() {
        let id = Ident::new("_v0".into(), DUMMY_SP, SyntaxContext::empty());
        assert_eq!(names(&expr_name_bindings(Some(&id))), vec!["_v0"]);
        assert!(expr_name_bindings(None).is_empty());
    }
}
