//! JSX/TSX parsing via swc.
//!
//! The syntax is chosen per file extension: TypeScript for `.ts`/`.tsx`,
//! ECMAScript with JSX for everything else. Parse failures are returned as
//! structured [`ParseFailure`] values; the analysis treats them as per-file,
//! non-fatal errors.
//!
//! This module is the single boundary between the external parser's node
//! types and the engine's own closed types: nothing outside `core::extract`
//! and this module touches swc nodes.

use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use swc_common::{BytePos, FileName, Globals, SourceMap, Spanned, GLOBALS};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::facts::SourceLocation;

/// Optional syntax extensions that are off by default.
///
/// When a file fails to parse, the parser retries with each disabled
/// extension enabled; extensions that make the parse succeed are surfaced as
/// suggestions so the caller can enable them and re-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyntaxExtension {
    /// Legacy decorators (`@observer class ...`).
    Decorators,
    /// `export v from "mod"` re-exports.
    ExportDefaultFrom,
    /// The `::` function-bind operator.
    FnBind,
}

impl SyntaxExtension {
    pub const ALL: [SyntaxExtension; 3] = [
        SyntaxExtension::Decorators,
        SyntaxExtension::ExportDefaultFrom,
        SyntaxExtension::FnBind,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SyntaxExtension::Decorators => "decorators",
            SyntaxExtension::ExportDefaultFrom => "export-default-from",
            SyntaxExtension::FnBind => "fn-bind",
        }
    }
}

/// A successfully parsed source file.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Byte offset of the file within `source_map`; spans are relative to it.
    pub start_pos: BytePos,
}

/// Structured parse failure, recoverable at the file boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    pub message: String,
    /// Byte offset of the failure within the file.
    pub position: usize,
    pub location: SourceLocation,
    /// Names of syntax extensions that would make the file parse.
    pub missing_syntax: Vec<String>,
}

/// Parse one source file, probing for missing syntax extensions on failure.
pub fn parse_source(
    code: &str,
    file_path: &str,
    extensions: &[SyntaxExtension],
) -> Result<ParsedSource, ParseFailure> {
    match attempt(code, file_path, syntax_for(file_path, extensions)) {
        Ok(parsed) => Ok(parsed),
        Err(mut failure) => {
            failure.missing_syntax = probe_missing_syntax(code, file_path, extensions);
            Err(failure)
        }
    }
}

fn syntax_for(file_path: &str, extensions: &[SyntaxExtension]) -> Syntax {
    let decorators = extensions.contains(&SyntaxExtension::Decorators);
    if file_path.ends_with(".ts") {
        Syntax::Typescript(TsSyntax {
            tsx: false,
            decorators,
            ..Default::default()
        })
    } else if file_path.ends_with(".tsx") {
        Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators,
            ..Default::default()
        })
    } else {
        Syntax::Es(EsSyntax {
            jsx: true,
            decorators,
            export_default_from: extensions.contains(&SyntaxExtension::ExportDefaultFrom),
            fn_bind: extensions.contains(&SyntaxExtension::FnBind),
            allow_return_outside_function: true,
            ..Default::default()
        })
    }
}

fn attempt(code: &str, file_path: &str, syntax: Syntax) -> Result<ParsedSource, ParseFailure> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());
        let start_pos = source_file.start_pos;

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        match parser.parse_module() {
            Ok(module) => Ok(ParsedSource {
                module,
                source_map,
                start_pos,
            }),
            Err(err) => {
                let span = err.span();
                // Dummy spans cannot be looked up; fall back to file start.
                let pos = if span.lo.0 == 0 { start_pos } else { span.lo };
                let loc = source_map.lookup_char_pos(pos);
                Err(ParseFailure {
                    message: err.kind().msg().to_string(),
                    position: pos.0.saturating_sub(start_pos.0) as usize,
                    location: SourceLocation::new(loc.line, loc.col_display),
                    missing_syntax: Vec::new(),
                })
            }
        }
    })
}

/// Retry the parse with each disabled extension enabled; return the names of
/// the ones that make it succeed.
fn probe_missing_syntax(
    code: &str,
    file_path: &str,
    enabled: &[SyntaxExtension],
) -> Vec<String> {
    SyntaxExtension::ALL
        .iter()
        .filter(|ext| !enabled.contains(ext))
        .filter(|ext| {
            let mut probe = enabled.to_vec();
            probe.push(**ext);
            attempt(code, file_path, syntax_for(file_path, &probe)).is_ok()
        })
        .map(|ext| ext.name().to_string())
        .collect()
}
