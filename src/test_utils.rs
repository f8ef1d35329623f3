use swc_core::common::{sync::Lrc, FileName, SourceMap};
use swc_core::ecma::ast::{EsVersion, Expr, Module, Program};
use swc_core::ecma::codegen::{text_writer::JsWriter, Config, Emitter, Node};
use swc_core::ecma::parser::{parse_file_as_expr, parse_file_as_module, EsSyntax, Syntax};

use crate::{transform_program, ModifierConfig, ModifierError};

fn syntax() -> Syntax {
    Syntax::Es(EsSyntax {
        jsx: true,
        ..Default::default()
    })
}

pub fn parse_module(src: &str) -> Module {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(FileName::Anon.into(), src.to_string());
    let mut errors = vec![];
    let module = parse_file_as_module(&fm, syntax(), EsVersion::EsNext, None, &mut errors)
        .unwrap_or_else(|err| panic!("failed to parse {src}: {err:?}"));
    assert!(errors.is_empty(), "recoverable parse errors in {src}: {errors:?}");
    module
}

/// Parses one expression; outer parentheses are dropped.
pub fn parse_expr(src: &str) -> Box<Expr> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(FileName::Anon.into(), src.to_string());
    let mut errors = vec![];
    let mut expr = parse_file_as_expr(&fm, syntax(), EsVersion::EsNext, None, &mut errors)
        .unwrap_or_else(|err| panic!("failed to parse {src}: {err:?}"));
    while let Expr::Paren(paren) = &mut *expr {
        expr = std::mem::take(&mut paren.expr);
    }
    expr
}

pub fn to_code(node: &impl Node) -> String {
    let cm: Lrc<SourceMap> = Default::default();
    let mut buff: Vec<u8> = Vec::with_capacity(128);
    {
        let writer = JsWriter::new(cm.clone(), "\n", &mut buff, None);
        let mut emitter = Emitter {
            cfg: Config::default().with_minify(true),
            comments: None,
            wr: writer,
            cm,
        };
        node.emit_with(&mut emitter).unwrap();
    }
    String::from_utf8(buff).unwrap()
}

/// Canonical printed form of `src`, for comparing against transform output.
pub fn print_program(src: &str) -> String {
    to_code(&Program::Module(parse_module(src)))
}

pub fn transform_with(src: &str, config: &ModifierConfig) -> Result<String, ModifierError> {
    let mut program = Program::Module(parse_module(src));
    transform_program(&mut program, config)?;
    Ok(to_code(&program))
}

pub fn transform(src: &str) -> Result<String, ModifierError> {
    transform_with(src, &ModifierConfig::default())
}
