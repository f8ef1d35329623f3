use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::ast::*,
};

use crate::modifier::Bucket;

// -----------------------------------------------------------------------------
// Handler functions
// -----------------------------------------------------------------------------

/// `<param> => { <target> = <param>; }`
pub fn build_assignment_fn(target: MemberExpr, param: &str) -> Expr {
    let assign = Expr::Assign(AssignExpr {
        span: DUMMY_SP,
        op: AssignOp::Assign,
        left: AssignTarget::Simple(SimpleAssignTarget::Member(target)),
        right: Box::new(ident_expr(param)),
    });
    arrow_with_body(param, assign)
}

/// `<param> => { <emit_callee>(<event_name>, <param>); }`
pub fn build_emit_fn(event_name: Expr, param: &str, emit_callee: Expr) -> Expr {
    let call = Expr::Call(CallExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(emit_callee)),
        args: vec![
            ExprOrSpread {
                spread: None,
                expr: Box::new(event_name),
            },
            ExprOrSpread {
                spread: None,
                expr: Box::new(ident_expr(param)),
            },
        ],
        type_args: None,
    });
    arrow_with_body(param, call)
}

fn arrow_with_body(param: &str, stmt_expr: Expr) -> Expr {
    Expr::Arrow(ArrowExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        params: vec![Pat::Ident(BindingIdent {
            id: Ident::new(param.into(), DUMMY_SP, SyntaxContext::empty()),
            type_ann: None,
        })],
        body: Box::new(BlockStmtOrExpr::BlockStmt(BlockStmt {
            span: DUMMY_SP,
            ctxt: SyntaxContext::empty(),
            stmts: vec![Stmt::Expr(ExprStmt {
                span: DUMMY_SP,
                expr: Box::new(stmt_expr),
            })],
        })),
        is_async: false,
        is_generator: false,
        type_params: None,
        return_type: None,
    })
}

fn ident_expr(name: &str) -> Expr {
    Expr::Ident(Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty()))
}

pub fn str_lit(value: &str) -> Expr {
    Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }))
}

// -----------------------------------------------------------------------------
// Accumulated VNode data
// -----------------------------------------------------------------------------

/// Handlers collected from one opening element, in source order.
#[derive(Default)]
pub struct Accumulator {
    on: Vec<(String, Box<Expr>)>,
    native_on: Vec<(String, Box<Expr>)>,
}

impl Accumulator {
    pub fn push(&mut self, bucket: Bucket, key: String, handler: Box<Expr>) {
        match bucket {
            Bucket::On => self.on.push((key, handler)),
            Bucket::NativeOn => self.native_on.push((key, handler)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on.is_empty() && self.native_on.is_empty()
    }

    pub fn len(&self) -> usize {
        self.on.len() + self.native_on.len()
    }

    /// `{...{ on: { ... }, nativeOn: { ... } }}`, or `None` when nothing was collected.
    pub fn into_spread_attr(self) -> Option<JSXAttrOrSpread> {
        if self.is_empty() {
            return None;
        }
        let mut props = vec![];
        for (bucket, entries) in [(Bucket::On, self.on), (Bucket::NativeOn, self.native_on)] {
            if entries.is_empty() {
                continue;
            }
            props.push(PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                key: PropName::Ident(IdentName::new(bucket.key().into(), DUMMY_SP)),
                value: Box::new(Expr::Object(ObjectLit {
                    span: DUMMY_SP,
                    props: entries
                        .into_iter()
                        .map(|(key, value)| {
                            PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                                key: PropName::Str(Str {
                                    span: DUMMY_SP,
                                    value: key.into(),
                                    raw: None,
                                }),
                                value,
                            })))
                        })
                        .collect(),
                })),
            }))));
        }
        Some(JSXAttrOrSpread::SpreadElement(SpreadElement {
            dot3_token: DUMMY_SP,
            expr: Box::new(Expr::Object(ObjectLit {
                span: DUMMY_SP,
                props,
            })),
        }))
    }
}
