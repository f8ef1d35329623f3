use swc_core::{
    common::DUMMY_SP,
    ecma::ast::*,
};

use crate::{
    error::{ModifierError, ModifierErrorKind, Placement},
    modifier::{
        attribute_name, classify_modifier_call, is_reserved_for_vnode_data,
        parse_event_attribute, to_handler_key, Bucket, EventModifier, ModifierKind,
    },
    scope::ScopeStack,
    synth::{build_assignment_fn, build_emit_fn, str_lit, Accumulator},
};

/// What the element rewriter must do with an attribute after dispatch.
#[derive(Debug, PartialEq, Eq)]
pub enum AttrAction {
    Keep,
    Remove,
}

/// The two modifiers that bind a prop rather than relocate a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataModifier {
    Sync,
    Relay,
}

impl DataModifier {
    fn as_str(self) -> &'static str {
        match self {
            DataModifier::Sync => ModifierKind::Sync.as_str(),
            DataModifier::Relay => ModifierKind::Relay.as_str(),
        }
    }
}

/// Everything a modifier rewrite needs besides the attribute itself.
pub struct Processor<'a> {
    pub scopes: &'a ScopeStack,
    pub emit_callee: &'a Expr,
    pub param_prefix: &'a str,
}

impl Processor<'_> {
    /// Rewrites `attr={ __modifier(...) }` and records its handler in `acc`.
    /// Attributes holding anything else are left alone.
    pub fn dispatch(
        &self,
        attr: &mut JSXAttr,
        acc: &mut Accumulator,
    ) -> Result<AttrAction, ModifierError> {
        let attr_name = attribute_name(&attr.name);
        let Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(slot),
            ..
        })) = &mut attr.value
        else {
            return Ok(AttrAction::Keep);
        };

        let Some(kind) = modifier_call(slot).and_then(|call| match &call.callee {
            Callee::Expr(callee) => classify_modifier_call(callee),
            _ => None,
        }) else {
            tracing::trace!(attr = %attr_name, "not a modifier call");
            return Ok(AttrAction::Keep);
        };

        match kind {
            ModifierKind::Sync => {
                self.process_data_modifier(DataModifier::Sync, &attr_name, slot, acc)?;
                Ok(AttrAction::Keep)
            }
            ModifierKind::Relay => {
                self.process_data_modifier(DataModifier::Relay, &attr_name, slot, acc)?;
                Ok(AttrAction::Keep)
            }
            ModifierKind::Event(event) => {
                self.process_event_modifier(event, &attr_name, slot, acc)?;
                Ok(AttrAction::Remove)
            }
        }
    }

    /// `prop={ __sync(a.b) }` / `prop={ __relay(this.b) }`
    fn process_data_modifier(
        &self,
        kind: DataModifier,
        attr_name: &str,
        slot: &mut Box<Expr>,
        acc: &mut Accumulator,
    ) -> Result<(), ModifierError> {
        let modifier = kind.as_str();
        let Some(call) = modifier_call(slot) else {
            return Ok(());
        };
        let span = call.span;
        let fail = |err| Err(ModifierError::new(span, err));

        if is_reserved_for_vnode_data(attr_name) {
            return fail(ModifierErrorKind::Placement {
                modifier,
                expected: Placement::ComponentProp,
            });
        }
        if !(1..=2).contains(&call.args.len()) {
            return fail(ModifierErrorKind::Arity {
                modifier,
                expected: "one or two arguments",
            });
        }
        if call.args.iter().any(|arg| arg.spread.is_some()) {
            return fail(ModifierErrorKind::Shape(format!(
                "{modifier} modifier must not have spread argument"
            )));
        }
        let Expr::Member(target) = peel_parens(&call.args[0].expr) else {
            return fail(ModifierErrorKind::Shape(format!(
                "argument of {modifier} modifier must be MemberExpression"
            )));
        };
        let target = target.clone();
        let extra = call.args.get(1).map(|arg| (*arg.expr).clone());

        let handler = match kind {
            DataModifier::Relay => {
                let Some(event_name) = relay_event_name(&target) else {
                    return fail(ModifierErrorKind::NameDerivation);
                };
                let emit_callee = match extra {
                    Some(callee @ (Expr::Ident(_) | Expr::Member(_))) => callee,
                    Some(_) => {
                        return fail(ModifierErrorKind::Shape(format!(
                            "second argument of {modifier} modifier must be Identifier or \
                             MemberExpression"
                        )))
                    }
                    None => self.emit_callee.clone(),
                };
                let param = self.scopes.fresh_name(self.param_prefix);
                build_emit_fn(event_name, &param, emit_callee)
            }
            DataModifier::Sync => match extra {
                Some(setter) => setter,
                None => {
                    let param = self.scopes.fresh_name(self.param_prefix);
                    build_assignment_fn(target.clone(), &param)
                }
            },
        };

        // The prop now just reads the bound value
        **slot = Expr::Member(target);

        let key = to_handler_key(attr_name);
        tracing::debug!(modifier, attr = %attr_name, key = %key, "rewrote data modifier");
        acc.push(Bucket::On, key, Box::new(handler));
        Ok(())
    }

    /// `onClick={ __capture(handler) }`; the caller drops the attribute.
    fn process_event_modifier(
        &self,
        event: EventModifier,
        attr_name: &str,
        slot: &mut Box<Expr>,
        acc: &mut Accumulator,
    ) -> Result<(), ModifierError> {
        let modifier = event.as_str();
        let Some(call) = modifier_call_mut(slot) else {
            return Ok(());
        };
        let span = call.span;
        let fail = |err| Err(ModifierError::new(span, err));

        let Some((bucket, event_name)) = parse_event_attribute(attr_name) else {
            return fail(ModifierErrorKind::Placement {
                modifier,
                expected: Placement::EventHandler,
            });
        };
        if call.args.len() != 1 {
            return fail(ModifierErrorKind::Arity {
                modifier,
                expected: "one argument",
            });
        }
        let arg = &call.args[0];
        if arg.spread.is_some() {
            return fail(ModifierErrorKind::Shape(format!(
                "{modifier} modifier must not have spread argument"
            )));
        }
        match &*arg.expr {
            Expr::JSXNamespacedName(_) => {
                return fail(ModifierErrorKind::Shape(format!(
                    "{modifier} modifier argument must not be JSXNamespacedName"
                )))
            }
            Expr::Invalid(_) => {
                return fail(ModifierErrorKind::Shape(format!(
                    "{modifier} modifier argument must be an expression"
                )))
            }
            _ => {}
        }

        let handler = call.args.remove(0).expr;
        let key = format!("{}{}", event.prefix(), event_name);
        tracing::debug!(modifier, attr = %attr_name, key = %key, bucket = bucket.key(), "relocated event handler");
        acc.push(bucket, key, handler);
        Ok(())
    }
}

/// `"update:<prop>"`, or `"update:" + <key>` for a dynamic computed key.
fn relay_event_name(target: &MemberExpr) -> Option<Expr> {
    match &target.prop {
        MemberProp::Ident(prop) => Some(str_lit(&format!("update:{}", prop.sym))),
        MemberProp::Computed(computed) => match &*computed.expr {
            Expr::Lit(Lit::Str(s)) => Some(str_lit(&format!("update:{}", s.value))),
            key => Some(Expr::Bin(BinExpr {
                span: DUMMY_SP,
                op: BinaryOp::Add,
                left: Box::new(str_lit("update:")),
                right: Box::new(key.clone()),
            })),
        },
        MemberProp::PrivateName(_) => None,
    }
}

fn peel_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => peel_parens(&paren.expr),
        _ => expr,
    }
}

fn modifier_call(expr: &Expr) -> Option<&CallExpr> {
    match peel_parens(expr) {
        Expr::Call(call) => Some(call),
        _ => None,
    }
}

fn modifier_call_mut(expr: &mut Expr) -> Option<&mut CallExpr> {
    match expr {
        Expr::Paren(paren) => modifier_call_mut(&mut paren.expr),
        Expr::Call(call) => Some(call),
        _ => None,
    }
}
