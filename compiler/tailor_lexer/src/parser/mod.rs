//! Delimiter-driven structural parser.
//!
//! The parser does not implement a full grammar. It recovers the structure
//! the formatter's features care about: statements terminated by `;` or a
//! block, `{}` blocks, `()`/`[]` groups split into comma-separated items,
//! and a coarse statement classification from leading keywords. Unbalanced
//! delimiters are syntax errors.
//!
//! # Grammar
//!
//! ```text
//! unit       := statement* EOF
//! statement  := (token | group | block)+ (';' | block | label-colon)?
//! block      := '{' statement* '}'
//! group      := '(' items ')' | '[' items ']'
//! items      := item? ((',' | ';') item?)*
//! item       := (token | group | block)+
//! ```
//!
//! A block ends its statement unless the statement is an initializer or
//! expression (`=`, `->`, `return`, `throw` seen before the brace).

use tailor_ir::{FrontendError, NodeId, ParseTree, RuleType, TokenStream};

use crate::stack::ensure_sufficient_stack;
use crate::RawToken;

/// Rules of the reference grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    CompilationUnit,
    ImportDeclaration,
    TypeDeclaration,
    MethodDeclaration,
    ControlStatement,
    JumpStatement,
    LabelStatement,
    Statement,
    Block,
    Parens,
    Brackets,
    ListItem,
}

impl Rule {
    /// Every rule, in declaration order.
    pub const ALL: [Rule; 12] = [
        Rule::CompilationUnit,
        Rule::ImportDeclaration,
        Rule::TypeDeclaration,
        Rule::MethodDeclaration,
        Rule::ControlStatement,
        Rule::JumpStatement,
        Rule::LabelStatement,
        Rule::Statement,
        Rule::Block,
        Rule::Parens,
        Rule::Brackets,
        Rule::ListItem,
    ];

    /// Opaque tag handed to the engine; `0` stays [`RuleType::NONE`].
    #[inline]
    pub fn rule_type(self) -> RuleType {
        RuleType::new(self as u16 + 1)
    }

    pub fn from_rule_type(rule: RuleType) -> Option<Rule> {
        let raw = rule.raw().checked_sub(1)?;
        Rule::ALL.get(usize::from(raw)).copied()
    }
}

/// What ended a statement.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Terminator {
    Semi,
    Block,
    LabelColon,
    /// Closing delimiter of the enclosing group or end of input.
    Enclosing,
}

/// What the statement scanner observed, used for classification.
#[derive(Default)]
struct StatementShape {
    first: Option<RawToken>,
    declares_type: bool,
    parens_before_block: bool,
    expression: bool,
}

impl StatementShape {
    fn classify(&self, terminator: Terminator) -> Rule {
        use RawToken as T;
        match self.first {
            Some(T::Import | T::Package) => Rule::ImportDeclaration,
            Some(
                T::If
                | T::Else
                | T::For
                | T::While
                | T::Do
                | T::Switch
                | T::Try
                | T::Catch
                | T::Finally
                | T::Synchronized,
            ) => Rule::ControlStatement,
            Some(T::Return | T::Throw | T::Break | T::Continue) => Rule::JumpStatement,
            Some(T::Case | T::DefaultKw) if terminator == Terminator::LabelColon => {
                Rule::LabelStatement
            }
            _ if terminator == Terminator::Block && self.declares_type => Rule::TypeDeclaration,
            _ if terminator == Terminator::Block && self.parens_before_block => {
                Rule::MethodDeclaration
            }
            _ => Rule::Statement,
        }
    }
}

struct Parser<'a> {
    stream: &'a TokenStream,
    /// Token indices of real tokens, EOF last.
    real: Vec<usize>,
    pos: usize,
    tree: ParseTree,
}

impl<'a> Parser<'a> {
    fn new(stream: &'a TokenStream) -> Self {
        Parser {
            stream,
            real: stream.real_indices(),
            pos: 0,
            tree: ParseTree::new(Rule::CompilationUnit.rule_type()),
        }
    }

    /// Kind of the current real token; `None` at EOF.
    fn peek(&self) -> Option<RawToken> {
        let index = *self.real.get(self.pos)?;
        let token = self.stream.get(index)?;
        RawToken::from_token_type(token.ty)
    }

    /// Kind of the previously consumed real token.
    fn previous(&self) -> Option<RawToken> {
        let index = *self.real.get(self.pos.checked_sub(1)?)?;
        RawToken::from_token_type(self.stream.get(index)?.ty)
    }

    /// Attach the current token to `parent` and move on.
    fn bump(&mut self, parent: NodeId) {
        if let Some(&index) = self.real.get(self.pos) {
            self.tree.push_token(parent, index);
            self.pos += 1;
        }
    }

    fn error(&self, message: String) -> FrontendError {
        let token = self
            .real
            .get(self.pos)
            .and_then(|&i| self.stream.get(i))
            .copied();
        FrontendError::Syntax {
            line: token.map_or(0, |t| t.line),
            column: token.map_or(0, |t| t.column),
            message,
        }
    }

    fn parse_unit(mut self) -> Result<ParseTree, FrontendError> {
        let root = self.tree.root();
        self.parse_statements(root, None)?;
        // EOF
        self.bump(root);
        Ok(self.tree)
    }

    /// Parse statements until `close` (left unconsumed) or EOF.
    fn parse_statements(
        &mut self,
        parent: NodeId,
        close: Option<RawToken>,
    ) -> Result<(), FrontendError> {
        loop {
            match self.peek() {
                None if close.is_some() => {
                    return Err(self.error("unclosed `{` at end of input".to_string()));
                }
                None => return Ok(()),
                Some(kind) if Some(kind) == close => return Ok(()),
                Some(kind) if kind.is_closer() => {
                    return Err(self.error(format!("unexpected `{}`", self.current_text())));
                }
                Some(_) => self.parse_statement(parent, close)?,
            }
        }
    }

    fn current_text(&self) -> &str {
        self.real.get(self.pos).map_or("", |&i| self.stream.text(i))
    }

    fn parse_statement(
        &mut self,
        parent: NodeId,
        close: Option<RawToken>,
    ) -> Result<(), FrontendError> {
        let stmt = self.tree.push_node(parent, Rule::Statement.rule_type());
        let mut shape = StatementShape {
            first: self.peek(),
            ..StatementShape::default()
        };
        let mut last_was_parens = false;

        let terminator = loop {
            let Some(kind) = self.peek() else {
                break Terminator::Enclosing;
            };
            if Some(kind) == close {
                break Terminator::Enclosing;
            }
            match kind {
                RawToken::RParen | RawToken::RBracket | RawToken::RBrace => {
                    return Err(self.error(format!("unexpected `{}`", self.current_text())));
                }
                RawToken::Semi => {
                    self.bump(stmt);
                    break Terminator::Semi;
                }
                RawToken::LBrace => {
                    shape.parens_before_block |= last_was_parens;
                    self.parse_block(stmt)?;
                    if !shape.expression {
                        break Terminator::Block;
                    }
                    last_was_parens = false;
                }
                RawToken::LParen => {
                    self.parse_group(stmt, Rule::Parens, RawToken::RParen)?;
                    last_was_parens = true;
                }
                RawToken::LBracket => {
                    self.parse_group(stmt, Rule::Brackets, RawToken::RBracket)?;
                    last_was_parens = false;
                }
                RawToken::Colon
                    if matches!(shape.first, Some(RawToken::Case | RawToken::DefaultKw)) =>
                {
                    self.bump(stmt);
                    break Terminator::LabelColon;
                }
                _ => {
                    match kind {
                        RawToken::Class | RawToken::Interface | RawToken::Enum
                            if self.previous() != Some(RawToken::Dot) =>
                        {
                            shape.declares_type = true;
                        }
                        RawToken::Assign
                        | RawToken::Arrow
                        | RawToken::Return
                        | RawToken::Throw
                        | RawToken::New => shape.expression = true,
                        _ => {}
                    }
                    // `throws X` keeps the method header shape.
                    if !matches!(
                        kind,
                        RawToken::Throws | RawToken::Ident | RawToken::Dot | RawToken::Comma
                    ) {
                        last_was_parens = false;
                    }
                    self.bump(stmt);
                }
            }
        };

        self.tree.set_rule(stmt, shape.classify(terminator).rule_type());
        Ok(())
    }

    /// Blocks and groups recurse once per nesting level, so both grow the
    /// stack on demand.
    fn parse_block(&mut self, parent: NodeId) -> Result<(), FrontendError> {
        ensure_sufficient_stack(|| self.parse_block_inner(parent))
    }

    fn parse_block_inner(&mut self, parent: NodeId) -> Result<(), FrontendError> {
        let block = self.tree.push_node(parent, Rule::Block.rule_type());
        self.bump(block);
        self.parse_statements(block, Some(RawToken::RBrace))?;
        self.bump(block);
        Ok(())
    }

    fn parse_group(
        &mut self,
        parent: NodeId,
        rule: Rule,
        close: RawToken,
    ) -> Result<(), FrontendError> {
        ensure_sufficient_stack(|| self.parse_group_inner(parent, rule, close))
    }

    fn parse_group_inner(
        &mut self,
        parent: NodeId,
        rule: Rule,
        close: RawToken,
    ) -> Result<(), FrontendError> {
        let group = self.tree.push_node(parent, rule.rule_type());
        self.bump(group);
        let mut item: Option<NodeId> = None;
        loop {
            let Some(kind) = self.peek() else {
                return Err(self.error("unclosed group at end of input".to_string()));
            };
            if kind == close {
                self.bump(group);
                return Ok(());
            }
            if kind.is_closer() {
                return Err(self.error(format!("unexpected `{}`", self.current_text())));
            }
            if matches!(kind, RawToken::Comma | RawToken::Semi) {
                self.bump(group);
                item = None;
                continue;
            }
            let target = match item {
                Some(id) => id,
                None => {
                    let id = self.tree.push_node(group, Rule::ListItem.rule_type());
                    item = Some(id);
                    id
                }
            };
            match kind {
                RawToken::LParen => self.parse_group(target, Rule::Parens, RawToken::RParen)?,
                RawToken::LBracket => {
                    self.parse_group(target, Rule::Brackets, RawToken::RBracket)?;
                }
                RawToken::LBrace => self.parse_block(target)?,
                _ => self.bump(target),
            }
        }
    }
}

/// Build the parse tree for a token stream produced by [`crate::lex`].
pub fn parse(stream: &TokenStream) -> Result<ParseTree, FrontendError> {
    Parser::new(stream).parse_unit()
}
