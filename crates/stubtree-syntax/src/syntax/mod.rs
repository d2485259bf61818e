//! Syntax tree types for IEC 61131-3 Structured Text.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and composite nodes.

macro_rules! define_syntax_kinds {
    (
        tokens { $($(#[$token_doc:meta])* $token:ident,)* }
        nodes { $($(#[$node_doc:meta])* $node:ident,)* }
    ) => {
        /// All syntax node and token kinds in IEC 61131-3 Structured Text.
        ///
        /// Token kinds come first and end with `Eof`; composite node kinds
        /// follow. `is_token` relies on that ordering.
        // Keyword variants are named after their spelling.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($(#[$token_doc])* $token,)*
            $($(#[$node_doc])* $node,)*
        }

        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            $(SyntaxKind::$node,)*
        ];

        impl SyntaxKind {
            /// Every kind, tokens first, in discriminant order.
            #[must_use]
            pub fn all() -> &'static [SyntaxKind] {
                SYNTAX_KINDS
            }

            /// Returns the variant name, as used by the fixture notation.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$token => stringify!($token),)*
                    $(Self::$node => stringify!($node),)*
                }
            }

            /// Looks up a kind by its variant name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($token) => Some(Self::$token),)*
                    $(stringify!($node) => Some(Self::$node),)*
                    _ => None,
                }
            }
        }
    };
}

define_syntax_kinds! {
    tokens {
        /// Spaces, tabs and newlines
        Whitespace,
        /// `// comment`
        LineComment,
        /// `(* comment *)`
        BlockComment,
        /// `{attribute 'name'}`
        Pragma,

        /// An identifier
        Ident,
        /// Integer literal: `42`, `16#FF`
        IntLiteral,
        /// Real literal: `3.14`
        RealLiteral,
        /// String literal: `'text'`
        StringLiteral,
        /// `TRUE` / `FALSE`
        BoolLiteral,

        KwProgram,
        KwEndProgram,
        KwFunction,
        KwEndFunction,
        KwFunctionBlock,
        KwEndFunctionBlock,
        KwClass,
        KwEndClass,
        KwInterface,
        KwEndInterface,
        KwMethod,
        KwEndMethod,
        KwProperty,
        KwEndProperty,
        KwGet,
        KwEndGet,
        KwSet,
        KwEndSet,
        KwAction,
        KwEndAction,
        KwNamespace,
        KwEndNamespace,
        KwUsing,
        KwType,
        KwEndType,
        KwStruct,
        KwEndStruct,
        KwExtends,
        KwImplements,

        KwVar,
        KwVarInput,
        KwVarOutput,
        KwVarInOut,
        KwVarGlobal,
        KwVarExternal,
        KwVarTemp,
        KwVarStat,
        KwEndVar,
        KwConstant,
        KwRetain,

        KwPublic,
        KwPrivate,
        KwProtected,
        KwInternal,
        KwAbstract,
        KwFinal,
        KwOverride,

        KwIf,
        KwThen,
        KwElse,
        KwEndIf,
        KwReturn,

        /// `:=`
        Assign,
        /// `:`
        Colon,
        /// `;`
        Semicolon,
        /// `,`
        Comma,
        /// `.`
        Dot,
        /// `(`
        LParen,
        /// `)`
        RParen,
        /// `+`
        Plus,
        /// `-`
        Minus,
        /// `*`
        Star,
        /// `/`
        Slash,
        /// `=`
        Eq,

        /// Unrecognized input
        Error,
        /// End of input; the last token kind
        Eof,
    }
    nodes {
        /// Root node of a source file
        SourceFile,

        /// A namespace declaration: `NAMESPACE name ... END_NAMESPACE`
        Namespace,
        /// A USING directive: `USING Namespace.Name;`
        UsingDirective,
        /// A program declaration: `PROGRAM name ... END_PROGRAM`
        Program,
        /// A function declaration: `FUNCTION name : type ... END_FUNCTION`
        Function,
        /// A function block declaration: `FUNCTION_BLOCK name ... END_FUNCTION_BLOCK`
        FunctionBlock,
        /// A class declaration: `CLASS name ... END_CLASS`
        Class,
        /// An interface declaration: `INTERFACE name ... END_INTERFACE`
        Interface,
        /// A method declaration: `METHOD name ... END_METHOD`
        Method,
        /// A property declaration: `PROPERTY name : type ... END_PROPERTY`
        Property,
        /// A property getter: `GET ... END_GET`
        PropertyGet,
        /// A property setter: `SET ... END_SET`
        PropertySet,
        /// An action declaration: `ACTION name ... END_ACTION`
        Action,

        /// Access and inheritance modifiers: `PUBLIC ABSTRACT`
        ModifierList,
        /// Extends clause: `EXTENDS BaseClass`
        ExtendsClause,
        /// Implements clause: `IMPLEMENTS I_Interface, I_Other`
        ImplementsClause,

        /// A type declaration: `TYPE name : ... END_TYPE`
        TypeDecl,
        /// A struct definition: `STRUCT ... END_STRUCT`
        StructDef,
        /// An enum definition: `(val1, val2, ...)`
        EnumDef,
        /// An enum value
        EnumValue,

        /// Variable block: `VAR ... END_VAR`, `VAR_INPUT ... END_VAR`, etc.
        VarBlock,
        /// Variable declaration: `name : type := initializer;`
        VarDecl,
        /// Variable list: `a, b, c`
        VarList,

        /// A name (identifier)
        Name,
        /// A qualified name: `Namespace.Type`
        QualifiedName,
        /// A type reference
        TypeRef,

        /// Statement list
        StmtList,
        /// Assignment statement: `x := expr;`
        AssignStmt,
        /// If statement: `IF ... THEN ... END_IF`
        IfStmt,
        /// Return statement: `RETURN;`
        ReturnStmt,
        /// Expression statement (call without assignment)
        ExprStmt,

        /// Binary expression: `a + b`
        BinaryExpr,
        /// Function/method call: `func(args)`
        CallExpr,
        /// Argument list in call
        ArgList,
        /// Name reference (variable, constant, etc.)
        NameRef,
        /// Literal value
        Literal,
    }
}

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment | Self::Pragma
        )
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for Structured Text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StLanguage {}

impl rowan::Language for StLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the ST syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<StLanguage>;

/// A syntax token in the ST syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<StLanguage>;

/// A syntax element (either node or token) in the ST syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<StLanguage>;

/// A builder for syntax trees.
pub type SyntaxTreeBuilder = rowan::GreenNodeBuilder<'static>;
