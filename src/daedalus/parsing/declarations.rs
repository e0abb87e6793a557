//! Program and declarations
//!
//!     A declaration whose header cannot be parsed (no name, no parent, no parameter list)
//!     returns early with the missing parts and leaves the rest of the input to top-level
//!     recovery.

use super::parser::Parser;
use crate::daedalus::ast::diagnostics::Diagnostic;
use crate::daedalus::ast::elements::{
    Block, ClassBody, ClassDeclaration, ClassMember, Declaration, FunctionDeclaration,
    Identifier, InstanceDeclaration, Parameter, ParameterList, Program, PrototypeDeclaration,
    VariableDeclaration, VariableKind,
};
use crate::daedalus::ast::range::Range;
use crate::daedalus::ast::syntax::NodeKind;
use crate::daedalus::building::NodeBuilder;
use crate::daedalus::token::Token;

impl<'s> Parser<'s> {
    /// Parse the whole token stream. `range` is the range of the complete source.
    pub fn program(&mut self, range: Range) -> Program {
        let mut declarations = Vec::new();

        while !self.at_eof() {
            let start = self.pos;
            if let Some(declaration) = self.declaration() {
                declarations.push(declaration);
            }
            if self.is_recovering() || self.pos == start {
                let skipped = match self.synchronize_top_level() {
                    Some(node) => Some(node),
                    None if self.pos == start => self.skip_one(),
                    None => None,
                };
                if let Some(node) = skipped {
                    declarations.push(Declaration::Error(node));
                }
            }
        }

        Program::new(declarations, range)
    }

    fn declaration(&mut self) -> Option<Declaration> {
        let declaration = match self.peek()? {
            Token::Instance => Declaration::Instance(self.instance_declaration()),
            Token::Prototype => Declaration::Prototype(self.prototype_declaration()),
            Token::Func => Declaration::Function(self.function_declaration()),
            Token::Class => Declaration::Class(self.class_declaration()),
            Token::Var | Token::Const => Declaration::Variable(self.variable_declaration()),
            _ => {
                self.unexpected("declaration");
                return None;
            }
        };
        Some(declaration)
    }

    fn instance_declaration(&mut self) -> InstanceDeclaration {
        let mut builder = NodeBuilder::new(NodeKind::InstanceDeclaration);
        self.bump_into(&mut builder);

        let name = self.expect_identifier();
        builder.child(&name.range);

        let mut parent = None;
        let mut body = None;
        if !self.is_recovering() && self.eat(Token::LParen, &mut builder) {
            let identifier = self.expect_identifier();
            builder.child(&identifier.range);
            parent = Some(identifier);
            if !self.is_recovering() {
                self.expect(Token::RParen, &mut builder);
            }
        }

        if !self.is_recovering() {
            if self.at(Token::LBrace) {
                let block = self.block();
                builder.child(&block.range);
                body = Some(block);
                self.eat(Token::Semicolon, &mut builder);
            } else if self.at(Token::Semicolon) {
                // A forward declaration always names its parent
                if parent.is_none() {
                    self.report_missing(Token::LParen);
                }
                self.bump_into(&mut builder);
            } else {
                self.fail(|range, found| {
                    Diagnostic::expected(range, &[Token::LBrace, Token::Semicolon], found)
                });
            }
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        InstanceDeclaration {
            name,
            parent,
            body,
            anonymous,
            range,
        }
    }

    fn prototype_declaration(&mut self) -> PrototypeDeclaration {
        let mut builder = NodeBuilder::new(NodeKind::PrototypeDeclaration);
        self.bump_into(&mut builder);

        let name = self.expect_identifier();
        builder.child(&name.range);

        if !self.is_recovering() {
            self.expect(Token::LParen, &mut builder);
        }
        let parent = if self.is_recovering() {
            Identifier::missing(self.missing_range())
        } else {
            let parent = self.expect_identifier();
            builder.child(&parent.range);
            if !self.is_recovering() {
                self.expect(Token::RParen, &mut builder);
            }
            parent
        };

        let body = self.declaration_body(&mut builder);

        let (range, anonymous) = builder.finish(self.missing_range());
        PrototypeDeclaration {
            name,
            parent,
            body,
            anonymous,
            range,
        }
    }

    fn function_declaration(&mut self) -> FunctionDeclaration {
        let mut builder = NodeBuilder::new(NodeKind::FunctionDeclaration);
        self.bump_into(&mut builder);

        let return_type = self.parse_type();
        builder.child(&return_type.range);

        let name = if self.is_recovering() {
            Identifier::missing(self.missing_range())
        } else {
            self.expect_identifier()
        };
        builder.child(&name.range);

        let parameters = if self.is_recovering() {
            ParameterList::missing(self.missing_range())
        } else if self.at(Token::LParen) {
            self.parameter_list()
        } else {
            self.fail(|range, found| Diagnostic::expected(range, &[Token::LParen], found));
            ParameterList::missing(self.missing_range())
        };
        builder.child(&parameters.range);

        let body = self.declaration_body(&mut builder);

        let (range, anonymous) = builder.finish(self.missing_range());
        FunctionDeclaration {
            return_type,
            name,
            parameters,
            body,
            anonymous,
            range,
        }
    }

    /// The block of a prototype or function plus its optional trailing `;`
    fn declaration_body(&mut self, builder: &mut NodeBuilder) -> Block {
        if self.is_recovering() {
            return Block::missing(self.missing_range());
        }
        let body = self.block();
        builder.child(&body.range);
        if !body.is_missing() {
            self.eat(Token::Semicolon, builder);
        }
        body
    }

    /// `( p1, p2 )`, the current token is the `(`
    fn parameter_list(&mut self) -> ParameterList {
        let mut builder = NodeBuilder::new(NodeKind::ParameterList);
        self.bump_into(&mut builder);

        let mut parameters = Vec::new();
        if !self.at(Token::RParen) {
            loop {
                let parameter = self.parameter();
                builder.child(&parameter.range);
                parameters.push(parameter);
                if self.is_recovering() || !self.eat(Token::Comma, &mut builder) {
                    break;
                }
                if self.at(Token::RParen) {
                    // Trailing comma
                    self.fail(|range, found| {
                        Diagnostic::expected_production(range, "parameter", found)
                    });
                    break;
                }
            }
        }
        if !self.is_recovering() {
            self.expect(Token::RParen, &mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        ParameterList {
            parameters,
            anonymous,
            range,
        }
    }

    /// `[var|const] type name`
    fn parameter(&mut self) -> Parameter {
        let mut builder = NodeBuilder::new(NodeKind::Parameter);
        let qualifier = match self.peek() {
            Some(Token::Var) => Some(VariableKind::Var),
            Some(Token::Const) => Some(VariableKind::Const),
            _ => None,
        };
        if qualifier.is_some() {
            self.bump_into(&mut builder);
        }

        let type_ref = self.parse_type();
        builder.child(&type_ref.range);
        let name = if self.is_recovering() {
            Identifier::missing(self.missing_range())
        } else {
            self.expect_identifier()
        };
        builder.child(&name.range);

        let (range, anonymous) = builder.finish(self.missing_range());
        Parameter {
            qualifier,
            type_ref,
            name,
            anonymous,
            range,
        }
    }

    /// `(const|var) type name [ [size] ] [ = value ] ;`, the current token is the keyword.
    /// Shared by the top level, blocks and class bodies.
    pub(super) fn variable_declaration(&mut self) -> VariableDeclaration {
        let mut builder = NodeBuilder::new(NodeKind::VariableDeclaration);
        let kind = if self.at(Token::Const) {
            VariableKind::Const
        } else {
            VariableKind::Var
        };
        self.bump_into(&mut builder);

        let type_ref = self.parse_type();
        builder.child(&type_ref.range);

        let mut declaration = VariableDeclaration {
            kind,
            type_ref,
            name: Identifier::missing(self.missing_range()),
            size: None,
            value: None,
            anonymous: Vec::new(),
            range: self.missing_range(),
        };

        if !self.is_recovering() {
            declaration.name = self.expect_identifier();
            builder.child(&declaration.name.range);
        }

        if !self.is_recovering() && self.eat(Token::LBracket, &mut builder) {
            let size = self.expression();
            builder.child(size.range());
            declaration.size = Some(size);
            if !self.is_recovering() {
                self.expect(Token::RBracket, &mut builder);
            }
        }

        if !self.is_recovering() && self.eat(Token::Assign, &mut builder) {
            let value = if self.at(Token::LBrace) {
                self.array_initializer()
            } else {
                self.expression()
            };
            builder.child(value.range());
            declaration.value = Some(value);
        }

        if !self.is_recovering() {
            self.expect_terminator(&mut builder);
        }

        let (range, anonymous) = builder.finish(self.missing_range());
        declaration.range = range;
        declaration.anonymous = anonymous;
        declaration
    }

    fn class_declaration(&mut self) -> ClassDeclaration {
        let mut builder = NodeBuilder::new(NodeKind::ClassDeclaration);
        self.bump_into(&mut builder);

        let name = self.expect_identifier();
        builder.child(&name.range);

        let body = if self.is_recovering() {
            ClassBody::missing(self.missing_range())
        } else {
            let body = self.class_body();
            builder.child(&body.range);
            if !body.is_missing() {
                self.eat(Token::Semicolon, &mut builder);
            }
            body
        };

        let (range, anonymous) = builder.finish(self.missing_range());
        ClassDeclaration {
            name,
            body,
            anonymous,
            range,
        }
    }

    fn class_body(&mut self) -> ClassBody {
        let mut builder = NodeBuilder::new(NodeKind::ClassBody);
        if !self.expect(Token::LBrace, &mut builder) {
            return ClassBody::missing(self.missing_range());
        }

        let mut members = Vec::new();
        loop {
            match self.peek() {
                None | Some(Token::RBrace) => break,
                Some(token) if token.is_top_level_only() => break,
                _ => {}
            }

            let start = self.pos;
            if let Some(member) = self.class_member() {
                builder.child(member.range());
                members.push(member);
            }
            if self.is_recovering() || self.pos == start {
                let skipped = match self.synchronize_statement() {
                    Some(node) => Some(node),
                    None if self.pos == start => self.skip_one(),
                    None => None,
                };
                if let Some(node) = skipped {
                    builder.child(&node.range);
                    members.push(ClassMember::Error(node));
                }
            }
        }
        self.expect(Token::RBrace, &mut builder);

        let (range, anonymous) = builder.finish(self.missing_range());
        ClassBody {
            members,
            anonymous,
            range,
        }
    }

    /// A field declaration or a field initialization
    fn class_member(&mut self) -> Option<ClassMember> {
        match self.peek()? {
            Token::Var | Token::Const => Some(ClassMember::Variable(self.variable_declaration())),
            Token::Identifier => {
                let target = self.expression();
                if self.is_recovering() {
                    return None;
                }
                Some(ClassMember::Assignment(self.assignment(target)))
            }
            _ => {
                self.unexpected("class member");
                None
            }
        }
    }
}
