use lazy_static::lazy_static;
use regex::{Captures, Regex};
use swc_core::ecma::ast::{Expr, JSXAttrName, MemberProp};

// -----------------------------------------------------------------------------
// Modifier kinds
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Sync,
    Relay,
    Event(EventModifier),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventModifier {
    Once,
    Capture,
    Passive,
    CaptureOnce,
}

pub const ALL_MODIFIERS: [ModifierKind; 6] = [
    ModifierKind::Sync,
    ModifierKind::Relay,
    ModifierKind::Event(EventModifier::Once),
    ModifierKind::Event(EventModifier::Capture),
    ModifierKind::Event(EventModifier::Passive),
    ModifierKind::Event(EventModifier::CaptureOnce),
];

impl ModifierKind {
    /// Name used in diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            ModifierKind::Sync => "sync",
            ModifierKind::Relay => "relay",
            ModifierKind::Event(e) => e.as_str(),
        }
    }

    /// Name of the marker function written in the source
    pub fn marker_name(self) -> &'static str {
        match self {
            ModifierKind::Sync => "__sync",
            ModifierKind::Relay => "__relay",
            ModifierKind::Event(EventModifier::Once) => "__once",
            ModifierKind::Event(EventModifier::Capture) => "__capture",
            ModifierKind::Event(EventModifier::Passive) => "__passive",
            ModifierKind::Event(EventModifier::CaptureOnce) => "__captureOnce",
        }
    }

    fn from_marker_name(name: &str) -> Option<Self> {
        ALL_MODIFIERS.into_iter().find(|m| m.marker_name() == name)
    }
}

impl EventModifier {
    pub fn as_str(self) -> &'static str {
        match self {
            EventModifier::Once => "once",
            EventModifier::Capture => "capture",
            EventModifier::Passive => "passive",
            EventModifier::CaptureOnce => "captureOnce",
        }
    }

    /// Vue 2 listener key prefix (`~` once, `!` capture, `&` passive)
    pub fn prefix(self) -> &'static str {
        match self {
            EventModifier::Once => "~",
            EventModifier::Capture => "!",
            EventModifier::Passive => "&",
            EventModifier::CaptureOnce => "~!",
        }
    }
}

/// Target map inside VNode data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    On,
    NativeOn,
}

impl Bucket {
    pub fn key(self) -> &'static str {
        match self {
            Bucket::On => "on",
            Bucket::NativeOn => "nativeOn",
        }
    }
}

// -----------------------------------------------------------------------------
// Classifiers
// -----------------------------------------------------------------------------

/// Recognizes `__sync(...)` and `anything.__sync(...)`; the receiver is ignored.
pub fn classify_modifier_call(callee: &Expr) -> Option<ModifierKind> {
    let name = match callee {
        Expr::Ident(ident) => ident.sym.as_ref(),
        Expr::Member(member) => match (&*member.obj, &member.prop) {
            (Expr::Ident(_), MemberProp::Ident(prop)) => prop.sym.as_ref(),
            _ => return None,
        },
        _ => return None,
    };
    ModifierKind::from_marker_name(name)
}

pub fn attribute_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

lazy_static! {
    static ref KEBAB_SEGMENT: Regex = Regex::new(r"-([a-z])").unwrap();
    static ref RESERVED_PREFIX: Regex = Regex::new(r"^(domProps|on|nativeOn|hook)[-_A-Z]").unwrap();
    static ref EVENT_ATTRIBUTE: Regex = Regex::new(r"^(on|nativeOn)([-_A-Z])(.*)$").unwrap();
}

/// Attributes consumed as top-level VNode data rather than props
const KNOWN_ATTRS: &[&str] = &[
    "class",
    "staticClass",
    "style",
    "key",
    "ref",
    "refInFor",
    "slot",
    "scopedSlots",
];

/// Only `-` followed by a lowercase ASCII letter is folded.
pub fn camelize(value: &str) -> String {
    KEBAB_SEGMENT
        .replace_all(value, |caps: &Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

pub fn to_handler_key(attr_name: &str) -> String {
    format!("update:{}", camelize(attr_name))
}

pub fn is_reserved_for_vnode_data(attr_name: &str) -> bool {
    KNOWN_ATTRS.contains(&attr_name) || RESERVED_PREFIX.is_match(attr_name)
}

/// `onFooBar` -> (On, "fooBar"), `nativeOn-foo-bar` -> (NativeOn, "foo-bar")
pub fn parse_event_attribute(attr_name: &str) -> Option<(Bucket, String)> {
    let caps = EVENT_ATTRIBUTE.captures(attr_name)?;
    let bucket = if &caps[1] == "on" {
        Bucket::On
    } else {
        Bucket::NativeOn
    };
    let boundary = match &caps[2] {
        "-" | "_" => String::new(),
        upper => upper.to_ascii_lowercase(),
    };
    Some((bucket, boundary + &caps[3]))
}
