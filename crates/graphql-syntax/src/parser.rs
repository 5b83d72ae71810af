//! Recursive-descent parser producing a [`Document`].
//!
//! The parser pulls tokens from a [`Scanner`] one at a time and dispatches on
//! the kind of the current token. There is no backtracking and no error
//! recovery: the first token that cannot continue the production being parsed
//! fails the whole parse with a [`ParseError`].
//!
//! # Usage
//!
//! ```rust
//! use graphql_syntax::Parser;
//! use graphql_syntax::ast::Definition;
//!
//! let document = Parser::new("type Query { hello: String }").parse().unwrap();
//! assert!(matches!(document.definitions[0], Definition::Type(_)));
//! ```

use crate::ParseError;
use crate::ParserConfig;
use crate::Scanner;
use crate::TokenKind;
use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EXECUTABLE_DIRECTIVE_LOCATIONS;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::ExecutableDirectiveLocation;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::NamedType;
use crate::ast::NotNullType;
use crate::ast::NullValue;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::StringValue;
use crate::ast::TYPE_SYSTEM_DIRECTIVE_LOCATIONS;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeSystemDirectiveLocation;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use std::borrow::Cow;

const DEFINITION_START: &[TokenKind] = &[
    TokenKind::LCurly,
    TokenKind::Query,
    TokenKind::Mutation,
    TokenKind::Subscription,
    TokenKind::Fragment,
    TokenKind::Schema,
    TokenKind::Scalar,
    TokenKind::Type,
    TokenKind::Interface,
    TokenKind::Union,
    TokenKind::Enum,
    TokenKind::Input,
    TokenKind::Directive,
    TokenKind::Extend,
    TokenKind::String,
];

const TYPE_SYSTEM_DEFINITION_START: &[TokenKind] = &[
    TokenKind::Schema,
    TokenKind::Scalar,
    TokenKind::Type,
    TokenKind::Interface,
    TokenKind::Union,
    TokenKind::Enum,
    TokenKind::Input,
    TokenKind::Directive,
];

const TYPE_SYSTEM_EXTENSION_START: &[TokenKind] = &[
    TokenKind::Schema,
    TokenKind::Scalar,
    TokenKind::Type,
    TokenKind::Interface,
    TokenKind::Union,
    TokenKind::Enum,
    TokenKind::Input,
];

const OPERATION_TYPES: &[TokenKind] = &[
    TokenKind::Query,
    TokenKind::Mutation,
    TokenKind::Subscription,
];

const VALUE_START: &[TokenKind] = &[
    TokenKind::VarSign,
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::String,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::Identifier,
    TokenKind::LBracket,
    TokenKind::LCurly,
];

/// Parses one GraphQL document from a `&str` source.
///
/// See module documentation for details.
#[derive(Clone, Debug)]
pub struct Parser<'src> {
    scanner: Scanner<'src>,

    /// Kind of the token under the cursor; `None` at end of input.
    current: Option<TokenKind>,

    config: ParserConfig,

    /// Shared nesting counter for selection sets, values and type
    /// annotations, checked against `config.max_depth`.
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the default configuration and pre-fetches the
    /// first token.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: &'src str, config: ParserConfig) -> Self {
        Self::from_scanner(Scanner::new(source), config)
    }

    /// Creates a parser over raw bytes, failing if they are not valid UTF-8.
    pub fn from_bytes(bytes: &'src [u8], config: ParserConfig) -> Result<Self, ParseError> {
        Ok(Self::from_scanner(Scanner::from_bytes(bytes)?, config))
    }

    fn from_scanner(mut scanner: Scanner<'src>, config: ParserConfig) -> Self {
        let current = scanner.advance();
        Self {
            scanner,
            current,
            config,
            depth: 0,
        }
    }

    /// Parses the whole input as a single document.
    pub fn parse(mut self) -> Result<Document<'src>, ParseError> {
        let result = self.parse_document();
        match &result {
            Ok(document) => log::trace!(
                "Parsed a document with {} definition(s).",
                document.definitions.len(),
            ),
            Err(err) => log::debug!("Failed to parse document: {err}"),
        }
        result
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Kind of the token under the cursor, or `None` at end of input.
    pub fn current(&self) -> Option<TokenKind> {
        self.current
    }

    /// Moves to the next token and returns its kind.
    pub fn accept(&mut self) -> Option<TokenKind> {
        self.current = self.scanner.advance();
        self.current
    }

    /// Consumes the current token if it is `kind`, returning its byte offset.
    pub fn expect(&mut self, kind: TokenKind) -> Result<u32, ParseError> {
        if !self.at(kind) {
            return Err(self.unexpected(&[kind]));
        }
        let start = self.offset();
        self.accept();
        Ok(start)
    }

    /// Consumes the current token if it is one of `kinds`, returning its kind.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<TokenKind, ParseError> {
        match self.current {
            Some(kind) if kinds.contains(&kind) => {
                self.accept();
                Ok(kind)
            },
            _ => Err(self.unexpected(kinds)),
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current == Some(kind)
    }

    fn at_name(&self) -> bool {
        self.current.is_some_and(|kind| kind.is_name_like())
    }

    fn offset(&self) -> u32 {
        self.scanner.token_start()
    }

    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        let text = match self.current {
            Some(_) => self.scanner.token_text().to_string(),
            None => String::new(),
        };
        ParseError::UnexpectedToken {
            expected: expected.iter().copied().collect(),
            actual: self.current,
            text,
            line: self.scanner.token_line(),
        }
    }

    /// Consumes any name-like token (identifiers and all keywords).
    fn name(&mut self) -> Result<Cow<'src, str>, ParseError> {
        if !self.at_name() {
            return Err(self.unexpected(&[TokenKind::Identifier]));
        }
        let text = self.scanner.token_text();
        self.accept();
        Ok(Cow::Borrowed(text))
    }

    /// Consumes a `String` token if present and returns its decoded value.
    fn description(&mut self) -> Option<Cow<'src, str>> {
        if !self.at(TokenKind::String) {
            return None;
        }
        let value = self.scanner.take_string_value();
        self.accept();
        value
    }

    // =========================================================================
    // Nesting limit
    // =========================================================================

    /// Increments the nesting depth, failing if it would exceed the
    /// configured limit. Pair every successful call with `exit_nesting()`.
    fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if let Some(limit) = self.config.max_depth
            && self.depth >= limit
        {
            return Err(ParseError::NestingTooDeep {
                limit,
                line: self.scanner.token_line(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Document and definitions
    // =========================================================================

    fn parse_document(&mut self) -> Result<Document<'src>, ParseError> {
        let start = if self.current.is_some() { self.offset() } else { 0 };
        let mut definitions = Vec::new();
        while self.current.is_some() {
            definitions.push(self.parse_definition()?);
        }
        Ok(Document { definitions, start })
    }

    fn parse_definition(&mut self) -> Result<Definition<'src>, ParseError> {
        match self.current {
            Some(TokenKind::Fragment) => {
                Ok(Definition::Fragment(self.parse_fragment_definition()?))
            },
            Some(
                TokenKind::Query
                | TokenKind::Mutation
                | TokenKind::Subscription
                | TokenKind::LCurly,
            ) => Ok(Definition::Operation(self.parse_operation_definition()?)),
            Some(TokenKind::Extend) => self.parse_type_system_extension(),
            Some(
                TokenKind::String
                | TokenKind::Schema
                | TokenKind::Scalar
                | TokenKind::Type
                | TokenKind::Interface
                | TokenKind::Union
                | TokenKind::Enum
                | TokenKind::Input
                | TokenKind::Directive,
            ) => self.parse_type_system_definition(),
            _ => Err(self.unexpected(DEFINITION_START)),
        }
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    /// `OperationType Name? VariableDefinitions? Directives? SelectionSet`, or
    /// a bare `SelectionSet` for the query shorthand.
    fn parse_operation_definition(&mut self) -> Result<OperationDefinition<'src>, ParseError> {
        let start = self.offset();
        let operation_type = match self.current {
            Some(TokenKind::Query) => OperationType::Query,
            Some(TokenKind::Mutation) => OperationType::Mutation,
            Some(TokenKind::Subscription) => OperationType::Subscription,
            _ => {
                let selection_set = self.parse_selection_set()?;
                return Ok(OperationDefinition {
                    operation_type: OperationType::Query,
                    shorthand: true,
                    name: None,
                    variable_definitions: Vec::new(),
                    directives: Vec::new(),
                    selection_set,
                    start,
                });
            },
        };
        self.accept();

        let name = if self.at_name() { Some(self.name()?) } else { None };
        let variable_definitions = if self.at(TokenKind::LParen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation_type,
            shorthand: false,
            name,
            variable_definitions,
            directives,
            selection_set,
            start,
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition<'src>>, ParseError> {
        self.expect(TokenKind::LParen)?;
        let mut definitions = Vec::new();
        while !self.at(TokenKind::RParen) {
            definitions.push(self.parse_variable_definition()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(definitions)
    }

    /// `$name: Type = default @directives`
    fn parse_variable_definition(&mut self) -> Result<VariableDefinition<'src>, ParseError> {
        let start = self.offset();
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives()?;
        Ok(VariableDefinition {
            variable,
            var_type,
            default_value,
            directives,
            start,
        })
    }

    fn parse_default_value(&mut self) -> Result<Option<Value<'src>>, ParseError> {
        if !self.at(TokenKind::Equals) {
            return Ok(None);
        }
        self.accept();
        Ok(Some(self.parse_value()?))
    }

    fn parse_variable(&mut self) -> Result<Variable<'src>, ParseError> {
        let start = self.expect(TokenKind::VarSign)?;
        let name = self.name()?;
        Ok(Variable { name, start })
    }

    /// `fragment Name on Type @directives { ... }`. The fragment name cannot
    /// be `on`.
    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition<'src>, ParseError> {
        let start = self.expect(TokenKind::Fragment)?;
        if self.at(TokenKind::On) {
            return Err(self.unexpected(&[TokenKind::Identifier]));
        }
        let name = self.name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            start,
        })
    }

    fn parse_type_condition(&mut self) -> Result<TypeCondition<'src>, ParseError> {
        let start = self.expect(TokenKind::On)?;
        let named_type = self.parse_named_type()?;
        Ok(TypeCondition { named_type, start })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<Vec<Selection<'src>>, ParseError> {
        self.enter_nesting()?;
        let result = self.parse_selection_set_impl();
        self.exit_nesting();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<Vec<Selection<'src>>, ParseError> {
        self.expect(TokenKind::LCurly)?;
        let mut selections = Vec::new();
        while !self.at(TokenKind::RCurly) {
            selections.push(self.parse_selection()?);
        }
        self.expect(TokenKind::RCurly)?;
        Ok(selections)
    }

    fn parse_selection(&mut self) -> Result<Selection<'src>, ParseError> {
        if !self.at(TokenKind::Ellipsis) {
            return Ok(Selection::Field(self.parse_field()?));
        }

        let start = self.offset();
        self.accept();
        match self.current {
            Some(TokenKind::On | TokenKind::DirSign | TokenKind::LCurly) => {
                let type_condition = if self.at(TokenKind::On) {
                    Some(self.parse_type_condition()?)
                } else {
                    None
                };
                let directives = self.parse_directives()?;
                let selection_set = self.parse_selection_set()?;
                Ok(Selection::InlineFragment(InlineFragment {
                    type_condition,
                    directives,
                    selection_set,
                    start,
                }))
            },
            Some(kind) if kind.is_name_like() => {
                let fragment_name = self.name()?;
                let directives = self.parse_directives()?;
                Ok(Selection::FragmentSpread(FragmentSpread {
                    fragment_name,
                    directives,
                    start,
                }))
            },
            _ => Err(self.unexpected(&[
                TokenKind::Identifier,
                TokenKind::On,
                TokenKind::DirSign,
                TokenKind::LCurly,
            ])),
        }
    }

    /// `alias: name(args) @directives { ... }`
    fn parse_field(&mut self) -> Result<Field<'src>, ParseError> {
        let start = self.offset();
        let first = self.name()?;
        let (alias, name) = if self.at(TokenKind::Colon) {
            self.accept();
            (Some(first), self.name()?)
        } else {
            (None, first)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.at(TokenKind::LCurly) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            start,
        })
    }

    /// Optional `(name: value ...)`.
    fn parse_arguments(&mut self) -> Result<Vec<Argument<'src>>, ParseError> {
        if !self.at(TokenKind::LParen) {
            return Ok(Vec::new());
        }
        self.accept();
        let mut arguments = Vec::new();
        while !self.at(TokenKind::RParen) {
            let start = self.offset();
            let name = self.name()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value()?;
            arguments.push(Argument { name, value, start });
        }
        self.expect(TokenKind::RParen)?;
        Ok(arguments)
    }

    fn parse_directives(&mut self) -> Result<Vec<Directive<'src>>, ParseError> {
        let mut directives = Vec::new();
        while self.at(TokenKind::DirSign) {
            let start = self.offset();
            self.accept();
            let name = self.name()?;
            let arguments = self.parse_arguments()?;
            directives.push(Directive {
                name,
                arguments,
                start,
            });
        }
        Ok(directives)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self) -> Result<Value<'src>, ParseError> {
        self.enter_nesting()?;
        let result = self.parse_value_impl();
        self.exit_nesting();
        result
    }

    fn parse_value_impl(&mut self) -> Result<Value<'src>, ParseError> {
        let start = self.offset();
        let value = match self.current {
            Some(TokenKind::VarSign) => return Ok(Value::Variable(self.parse_variable()?)),
            Some(TokenKind::LBracket) => return self.parse_list_value(),
            Some(TokenKind::LCurly) => return self.parse_object_value(),
            Some(TokenKind::Int) => Value::Int(IntValue {
                value: Cow::Borrowed(self.scanner.token_text()),
                start,
            }),
            Some(TokenKind::Float) => Value::Float(FloatValue {
                value: Cow::Borrowed(self.scanner.token_text()),
                start,
            }),
            Some(TokenKind::String) => Value::String(StringValue {
                block: self.scanner.token_text().starts_with("\"\"\""),
                value: self.scanner.take_string_value().unwrap_or_default(),
                start,
            }),
            Some(TokenKind::True) => Value::Boolean(BooleanValue { value: true, start }),
            Some(TokenKind::False) => Value::Boolean(BooleanValue { value: false, start }),
            Some(TokenKind::Null) => Value::Null(NullValue { start }),
            Some(kind) if kind.is_name_like() => Value::Enum(EnumValue {
                value: Cow::Borrowed(self.scanner.token_text()),
                start,
            }),
            _ => return Err(self.unexpected(VALUE_START)),
        };
        self.accept();
        Ok(value)
    }

    fn parse_list_value(&mut self) -> Result<Value<'src>, ParseError> {
        let start = self.expect(TokenKind::LBracket)?;
        let mut values = Vec::new();
        while !self.at(TokenKind::RBracket) {
            values.push(self.parse_value()?);
        }
        self.expect(TokenKind::RBracket)?;
        Ok(Value::List(ListValue { values, start }))
    }

    fn parse_object_value(&mut self) -> Result<Value<'src>, ParseError> {
        let start = self.expect(TokenKind::LCurly)?;
        let mut fields = Vec::new();
        while !self.at(TokenKind::RCurly) {
            let field_start = self.offset();
            let name = self.name()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value()?;
            fields.push(ObjectField {
                name,
                value,
                start: field_start,
            });
        }
        self.expect(TokenKind::RCurly)?;
        Ok(Value::Object(ObjectValue { fields, start }))
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    /// `Name`, `[Type]`, either optionally followed by `!`.
    fn parse_type(&mut self) -> Result<Type<'src>, ParseError> {
        self.enter_nesting()?;
        let result = self.parse_type_impl();
        self.exit_nesting();
        result
    }

    fn parse_type_impl(&mut self) -> Result<Type<'src>, ParseError> {
        let start = self.offset();
        let base = match self.current {
            Some(TokenKind::LBracket) => {
                self.accept();
                let inner = self.parse_type()?;
                self.expect(TokenKind::RBracket)?;
                Type::List(ListType {
                    inner: Box::new(inner),
                    start,
                })
            },
            Some(kind) if kind.is_name_like() => Type::Named(self.parse_named_type()?),
            _ => return Err(self.unexpected(&[TokenKind::Identifier, TokenKind::LBracket])),
        };

        if !self.at(TokenKind::Bang) {
            return Ok(base);
        }
        self.accept();
        Ok(Type::NotNull(NotNullType {
            inner: Box::new(base),
            start,
        }))
    }

    fn parse_named_type(&mut self) -> Result<NamedType<'src>, ParseError> {
        let start = self.offset();
        let name = self.name()?;
        Ok(NamedType { name, start })
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn parse_type_system_definition(&mut self) -> Result<Definition<'src>, ParseError> {
        let start = self.offset();
        let description = self.description();
        let definition = match self.current {
            Some(TokenKind::Schema) => {
                Definition::Schema(self.parse_schema_definition(description, start)?)
            },
            Some(TokenKind::Directive) => {
                Definition::Directive(self.parse_directive_definition(description, start)?)
            },
            Some(TokenKind::Scalar) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                Definition::Type(TypeDefinition::Scalar(ScalarTypeDefinition {
                    description,
                    name,
                    directives,
                    start,
                }))
            },
            Some(TokenKind::Type) => {
                self.accept();
                let name = self.name()?;
                let implements_interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_fields_definition()?;
                Definition::Type(TypeDefinition::Object(ObjectTypeDefinition {
                    description,
                    name,
                    implements_interfaces,
                    directives,
                    fields,
                    start,
                }))
            },
            Some(TokenKind::Interface) => {
                self.accept();
                let name = self.name()?;
                let implements_interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_fields_definition()?;
                Definition::Type(TypeDefinition::Interface(InterfaceTypeDefinition {
                    description,
                    name,
                    implements_interfaces,
                    directives,
                    fields,
                    start,
                }))
            },
            Some(TokenKind::Union) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                let member_types = self.parse_union_member_types()?;
                Definition::Type(TypeDefinition::Union(UnionTypeDefinition {
                    description,
                    name,
                    directives,
                    member_types,
                    start,
                }))
            },
            Some(TokenKind::Enum) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                let values = self.parse_enum_values_definition()?;
                Definition::Type(TypeDefinition::Enum(EnumTypeDefinition {
                    description,
                    name,
                    directives,
                    values,
                    start,
                }))
            },
            Some(TokenKind::Input) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_input_fields_definition()?;
                Definition::Type(TypeDefinition::InputObject(InputObjectTypeDefinition {
                    description,
                    name,
                    directives,
                    fields,
                    start,
                }))
            },
            _ => return Err(self.unexpected(TYPE_SYSTEM_DEFINITION_START)),
        };
        Ok(definition)
    }

    fn parse_schema_definition(
        &mut self,
        description: Option<Cow<'src, str>>,
        start: u32,
    ) -> Result<SchemaDefinition<'src>, ParseError> {
        self.expect(TokenKind::Schema)?;
        let directives = self.parse_directives()?;
        let root_operation_types = self.parse_root_operation_types()?;
        Ok(SchemaDefinition {
            description,
            directives,
            root_operation_types,
            start,
        })
    }

    /// `{ query: Query mutation: Mutation }`
    fn parse_root_operation_types(
        &mut self,
    ) -> Result<Vec<RootOperationTypeDefinition<'src>>, ParseError> {
        self.expect(TokenKind::LCurly)?;
        let mut root_operation_types = Vec::new();
        while !self.at(TokenKind::RCurly) {
            let start = self.offset();
            let operation_type = match self.expect_one_of(OPERATION_TYPES)? {
                TokenKind::Mutation => OperationType::Mutation,
                TokenKind::Subscription => OperationType::Subscription,
                _ => OperationType::Query,
            };
            self.expect(TokenKind::Colon)?;
            let named_type = self.parse_named_type()?;
            root_operation_types.push(RootOperationTypeDefinition {
                operation_type,
                named_type,
                start,
            });
        }
        self.expect(TokenKind::RCurly)?;
        Ok(root_operation_types)
    }

    /// Optional `implements & A & B`, also accepting `implements A, B` and
    /// `implements A B`. After the first interface a bare continuation must
    /// be an `Identifier`, so a following definition keyword ends the list.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<NamedType<'src>>, ParseError> {
        if !self.at(TokenKind::Implements) {
            return Ok(Vec::new());
        }
        self.accept();
        if self.at(TokenKind::Amp) {
            self.accept();
        }

        let mut interfaces = vec![self.parse_named_type()?];
        loop {
            if self.at(TokenKind::Amp) {
                self.accept();
            } else if !self.at(TokenKind::Identifier) {
                break;
            }
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    /// Optional `{ field(args): Type @directives ... }`.
    fn parse_fields_definition(
        &mut self,
    ) -> Result<Option<Vec<FieldDefinition<'src>>>, ParseError> {
        if !self.at(TokenKind::LCurly) {
            return Ok(None);
        }
        self.accept();
        let mut fields = Vec::new();
        while !self.at(TokenKind::RCurly) {
            fields.push(self.parse_field_definition()?);
        }
        self.expect(TokenKind::RCurly)?;
        Ok(Some(fields))
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition<'src>, ParseError> {
        let start = self.offset();
        let description = self.description();
        let name = self.name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(TokenKind::Colon)?;
        let field_type = self.parse_type()?;
        let directives = self.parse_directives()?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            start,
        })
    }

    /// Optional `(name: Type = default ...)`.
    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<InputValueDefinition<'src>>, ParseError> {
        if !self.at(TokenKind::LParen) {
            return Ok(Vec::new());
        }
        self.accept();
        let mut arguments = Vec::new();
        while !self.at(TokenKind::RParen) {
            arguments.push(self.parse_input_value_definition()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(arguments)
    }

    /// Optional `{ name: Type = default ... }` of an input object.
    fn parse_input_fields_definition(
        &mut self,
    ) -> Result<Option<Vec<InputValueDefinition<'src>>>, ParseError> {
        if !self.at(TokenKind::LCurly) {
            return Ok(None);
        }
        self.accept();
        let mut fields = Vec::new();
        while !self.at(TokenKind::RCurly) {
            fields.push(self.parse_input_value_definition()?);
        }
        self.expect(TokenKind::RCurly)?;
        Ok(Some(fields))
    }

    fn parse_input_value_definition(&mut self) -> Result<InputValueDefinition<'src>, ParseError> {
        let start = self.offset();
        let description = self.description();
        let name = self.name()?;
        self.expect(TokenKind::Colon)?;
        let value_type = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives()?;
        Ok(InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            start,
        })
    }

    /// Optional `= | A | B`.
    fn parse_union_member_types(&mut self) -> Result<Vec<NamedType<'src>>, ParseError> {
        if !self.at(TokenKind::Equals) {
            return Ok(Vec::new());
        }
        self.accept();
        if self.at(TokenKind::Pipe) {
            self.accept();
        }
        let mut member_types = vec![self.parse_named_type()?];
        while self.at(TokenKind::Pipe) {
            self.accept();
            member_types.push(self.parse_named_type()?);
        }
        Ok(member_types)
    }

    fn parse_enum_values_definition(
        &mut self,
    ) -> Result<Option<Vec<EnumValueDefinition<'src>>>, ParseError> {
        if !self.at(TokenKind::LCurly) {
            return Ok(None);
        }
        self.accept();
        let mut values = Vec::new();
        while !self.at(TokenKind::RCurly) {
            values.push(self.parse_enum_value_definition()?);
        }
        self.expect(TokenKind::RCurly)?;
        Ok(Some(values))
    }

    /// An enum value may be any name except `true`, `false` and `null`.
    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition<'src>, ParseError> {
        let start = self.offset();
        let description = self.description();
        if matches!(
            self.current,
            Some(TokenKind::True | TokenKind::False | TokenKind::Null),
        ) {
            return Err(self.unexpected(&[TokenKind::Identifier]));
        }
        let value_start = self.offset();
        let value = self.name()?;
        let directives = self.parse_directives()?;
        Ok(EnumValueDefinition {
            description,
            enum_value: EnumValue {
                value,
                start: value_start,
            },
            directives,
            start,
        })
    }

    /// `directive @name(args) repeatable on | A | B`
    fn parse_directive_definition(
        &mut self,
        description: Option<Cow<'src, str>>,
        start: u32,
    ) -> Result<DirectiveDefinition<'src>, ParseError> {
        self.expect(TokenKind::Directive)?;
        self.expect(TokenKind::DirSign)?;
        let name = self.name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable = self.at(TokenKind::Repeatable);
        if repeatable {
            self.accept();
        }
        self.expect(TokenKind::On)?;
        if self.at(TokenKind::Pipe) {
            self.accept();
        }
        let mut locations = vec![self.parse_directive_location()?];
        while self.at(TokenKind::Pipe) {
            self.accept();
            locations.push(self.parse_directive_location()?);
        }
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            start,
        })
    }

    fn parse_directive_location(&mut self) -> Result<DirectiveLocation<'src>, ParseError> {
        if !self.at(TokenKind::Identifier) {
            return Err(self.unexpected(&[TokenKind::Identifier]));
        }
        let start = self.offset();
        let text = self.scanner.token_text();
        let location = if EXECUTABLE_DIRECTIVE_LOCATIONS.contains(&text) {
            DirectiveLocation::Executable(ExecutableDirectiveLocation {
                name: Cow::Borrowed(text),
                start,
            })
        } else if TYPE_SYSTEM_DIRECTIVE_LOCATIONS.contains(&text) {
            DirectiveLocation::TypeSystem(TypeSystemDirectiveLocation {
                name: Cow::Borrowed(text),
                start,
            })
        } else {
            return Err(ParseError::UnknownDirectiveLocation {
                name: text.to_string(),
                line: self.scanner.token_line(),
            });
        };
        self.accept();
        Ok(location)
    }

    // =========================================================================
    // Type-system extensions
    // =========================================================================

    fn parse_type_system_extension(&mut self) -> Result<Definition<'src>, ParseError> {
        let start = self.expect(TokenKind::Extend)?;
        let extension = match self.current {
            Some(TokenKind::Schema) => {
                self.accept();
                let directives = self.parse_directives()?;
                let root_operation_types = if self.at(TokenKind::LCurly) {
                    self.parse_root_operation_types()?
                } else {
                    Vec::new()
                };
                return Ok(Definition::SchemaExtension(SchemaExtension {
                    directives,
                    root_operation_types,
                    start,
                }));
            },
            Some(TokenKind::Scalar) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                TypeExtension::Scalar(ScalarTypeExtension {
                    name,
                    directives,
                    start,
                })
            },
            Some(TokenKind::Type) => {
                self.accept();
                let name = self.name()?;
                let implements_interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_fields_definition()?;
                TypeExtension::Object(ObjectTypeExtension {
                    name,
                    implements_interfaces,
                    directives,
                    fields,
                    start,
                })
            },
            Some(TokenKind::Interface) => {
                self.accept();
                let name = self.name()?;
                let implements_interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_fields_definition()?;
                TypeExtension::Interface(InterfaceTypeExtension {
                    name,
                    implements_interfaces,
                    directives,
                    fields,
                    start,
                })
            },
            Some(TokenKind::Union) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                let member_types = self.parse_union_member_types()?;
                TypeExtension::Union(UnionTypeExtension {
                    name,
                    directives,
                    member_types,
                    start,
                })
            },
            Some(TokenKind::Enum) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                let values = self.parse_enum_values_definition()?;
                TypeExtension::Enum(EnumTypeExtension {
                    name,
                    directives,
                    values,
                    start,
                })
            },
            Some(TokenKind::Input) => {
                self.accept();
                let name = self.name()?;
                let directives = self.parse_directives()?;
                let fields = self.parse_input_fields_definition()?;
                TypeExtension::InputObject(InputObjectTypeExtension {
                    name,
                    directives,
                    fields,
                    start,
                })
            },
            _ => return Err(self.unexpected(TYPE_SYSTEM_EXTENSION_START)),
        };
        Ok(Definition::TypeExtension(extension))
    }
}
