//! Typed node wrappers.

use smol_str::SmolStr;

use super::{child, children, first_token, text_without_trivia, AstNode, Modifiers, Visibility};
use crate::syntax::{SyntaxKind, SyntaxNode};

macro_rules! ast_node {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$name
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self { syntax: node })
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(
    /// Root of a source file.
    SourceFile
);
ast_node!(
    /// `NAMESPACE name ... END_NAMESPACE`
    Namespace
);
ast_node!(
    /// `PROGRAM name ... END_PROGRAM`
    Program
);
ast_node!(
    /// `FUNCTION name : type ... END_FUNCTION`
    Function
);
ast_node!(
    /// `FUNCTION_BLOCK name ... END_FUNCTION_BLOCK`
    FunctionBlock
);
ast_node!(
    /// `CLASS name ... END_CLASS`
    Class
);
ast_node!(
    /// `INTERFACE name ... END_INTERFACE`
    Interface
);
ast_node!(
    /// `METHOD name ... END_METHOD`
    Method
);
ast_node!(
    /// `PROPERTY name : type ... END_PROPERTY`
    Property
);
ast_node!(
    /// `ACTION name ... END_ACTION`
    Action
);
ast_node!(
    /// `TYPE name : ... END_TYPE`
    TypeDecl
);
ast_node!(
    /// A value inside an enum definition.
    EnumValue
);
ast_node!(
    /// `VAR ... END_VAR` and its sectioned variants.
    VarBlock
);
ast_node!(
    /// `name : type := initializer;`
    VarDecl
);
ast_node!(
    /// `a, b, c`
    VarList
);
ast_node!(
    /// An identifier in declaration position.
    Name
);
ast_node!(
    /// `Namespace.Type`
    QualifiedName
);
ast_node!(
    /// A type reference.
    TypeRef
);
ast_node!(
    /// `PUBLIC ABSTRACT ...`
    ModifierList
);
ast_node!(
    /// `EXTENDS Base`
    ExtendsClause
);
ast_node!(
    /// `IMPLEMENTS I_A, I_B`
    ImplementsClause
);

impl SourceFile {
    /// Top-level declarations in document order.
    pub fn declarations(&self) -> impl Iterator<Item = Declaration> {
        children(&self.syntax)
    }
}

impl Name {
    /// The identifier text.
    #[must_use]
    pub fn text(&self) -> Option<SmolStr> {
        first_token(&self.syntax, SyntaxKind::Ident).map(|token| SmolStr::new(token.text()))
    }
}

impl QualifiedName {
    /// Dotted text: `Lib.Motors.Base`.
    #[must_use]
    pub fn text(&self) -> Option<SmolStr> {
        text_without_trivia(&self.syntax)
    }
}

impl TypeRef {
    /// The referenced type as written, without trivia.
    #[must_use]
    pub fn text(&self) -> Option<SmolStr> {
        text_without_trivia(&self.syntax)
    }
}

impl ModifierList {
    /// Collects the modifier keywords. The first visibility keyword wins.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        let mut modifiers = Modifiers::default();
        for token in self
            .syntax
            .children_with_tokens()
            .filter_map(rowan::NodeOrToken::into_token)
        {
            let visibility = match token.kind() {
                SyntaxKind::KwPublic => Some(Visibility::Public),
                SyntaxKind::KwPrivate => Some(Visibility::Private),
                SyntaxKind::KwProtected => Some(Visibility::Protected),
                SyntaxKind::KwInternal => Some(Visibility::Internal),
                SyntaxKind::KwAbstract => {
                    modifiers.is_abstract = true;
                    None
                }
                SyntaxKind::KwFinal => {
                    modifiers.is_final = true;
                    None
                }
                SyntaxKind::KwOverride => {
                    modifiers.is_override = true;
                    None
                }
                _ => None,
            };
            if modifiers.visibility.is_none() {
                modifiers.visibility = visibility;
            }
        }
        modifiers
    }
}

fn type_name(node: &SyntaxNode) -> Option<SmolStr> {
    node.children().find_map(|child| match child.kind() {
        SyntaxKind::TypeRef => TypeRef::cast(child)?.text(),
        SyntaxKind::QualifiedName => QualifiedName::cast(child)?.text(),
        SyntaxKind::Name => Name::cast(child)?.text(),
        _ => None,
    })
}

impl ExtendsClause {
    /// The base type name.
    #[must_use]
    pub fn base(&self) -> Option<SmolStr> {
        type_name(&self.syntax)
    }
}

impl ImplementsClause {
    /// Implemented interface names in order.
    #[must_use]
    pub fn interfaces(&self) -> Vec<SmolStr> {
        self.syntax
            .children()
            .filter_map(|child| match child.kind() {
                SyntaxKind::TypeRef => TypeRef::cast(child)?.text(),
                SyntaxKind::QualifiedName => QualifiedName::cast(child)?.text(),
                SyntaxKind::Name => Name::cast(child)?.text(),
                _ => None,
            })
            .collect()
    }
}

impl VarBlock {
    /// The section keyword: `KwVar`, `KwVarInput`, `KwVarTemp`, ...
    #[must_use]
    pub fn section(&self) -> Option<SyntaxKind> {
        self.syntax
            .children_with_tokens()
            .filter_map(rowan::NodeOrToken::into_token)
            .map(|token| token.kind())
            .find(|kind| {
                matches!(
                    kind,
                    SyntaxKind::KwVar
                        | SyntaxKind::KwVarInput
                        | SyntaxKind::KwVarOutput
                        | SyntaxKind::KwVarInOut
                        | SyntaxKind::KwVarGlobal
                        | SyntaxKind::KwVarExternal
                        | SyntaxKind::KwVarTemp
                        | SyntaxKind::KwVarStat
                )
            })
    }

    /// Returns `true` for `VAR ... CONSTANT` blocks.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        first_token(&self.syntax, SyntaxKind::KwConstant).is_some()
    }

    /// Variable declarations in order.
    pub fn declarations(&self) -> impl Iterator<Item = VarDecl> {
        children(&self.syntax)
    }
}

impl VarDecl {
    /// All declared names: `a, b : INT` yields `a` and `b`.
    #[must_use]
    pub fn names(&self) -> Vec<SmolStr> {
        if let Some(list) = child::<VarList>(&self.syntax) {
            return children::<Name>(list.syntax())
                .filter_map(|name| name.text())
                .collect();
        }
        children::<Name>(&self.syntax)
            .filter_map(|name| name.text())
            .collect()
    }

    /// The enclosing variable block.
    #[must_use]
    pub fn var_block(&self) -> Option<VarBlock> {
        self.syntax.parent().and_then(VarBlock::cast)
    }
}

/// A node kind that can carry a stub.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    /// `NAMESPACE`
    Namespace(Namespace),
    /// `PROGRAM`
    Program(Program),
    /// `FUNCTION`
    Function(Function),
    /// `FUNCTION_BLOCK`
    FunctionBlock(FunctionBlock),
    /// `CLASS`
    Class(Class),
    /// `INTERFACE`
    Interface(Interface),
    /// `METHOD`
    Method(Method),
    /// `PROPERTY`
    Property(Property),
    /// `ACTION`
    Action(Action),
    /// `TYPE`
    TypeDecl(TypeDecl),
    /// Enum value
    EnumValue(EnumValue),
    /// Variable declaration
    VarDecl(VarDecl),
}

impl AstNode for Declaration {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::Namespace
                | SyntaxKind::Program
                | SyntaxKind::Function
                | SyntaxKind::FunctionBlock
                | SyntaxKind::Class
                | SyntaxKind::Interface
                | SyntaxKind::Method
                | SyntaxKind::Property
                | SyntaxKind::Action
                | SyntaxKind::TypeDecl
                | SyntaxKind::EnumValue
                | SyntaxKind::VarDecl
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        let declaration = match node.kind() {
            SyntaxKind::Namespace => Self::Namespace(Namespace { syntax: node }),
            SyntaxKind::Program => Self::Program(Program { syntax: node }),
            SyntaxKind::Function => Self::Function(Function { syntax: node }),
            SyntaxKind::FunctionBlock => Self::FunctionBlock(FunctionBlock { syntax: node }),
            SyntaxKind::Class => Self::Class(Class { syntax: node }),
            SyntaxKind::Interface => Self::Interface(Interface { syntax: node }),
            SyntaxKind::Method => Self::Method(Method { syntax: node }),
            SyntaxKind::Property => Self::Property(Property { syntax: node }),
            SyntaxKind::Action => Self::Action(Action { syntax: node }),
            SyntaxKind::TypeDecl => Self::TypeDecl(TypeDecl { syntax: node }),
            SyntaxKind::EnumValue => Self::EnumValue(EnumValue { syntax: node }),
            SyntaxKind::VarDecl => Self::VarDecl(VarDecl { syntax: node }),
            _ => return None,
        };
        Some(declaration)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Namespace(it) => it.syntax(),
            Self::Program(it) => it.syntax(),
            Self::Function(it) => it.syntax(),
            Self::FunctionBlock(it) => it.syntax(),
            Self::Class(it) => it.syntax(),
            Self::Interface(it) => it.syntax(),
            Self::Method(it) => it.syntax(),
            Self::Property(it) => it.syntax(),
            Self::Action(it) => it.syntax(),
            Self::TypeDecl(it) => it.syntax(),
            Self::EnumValue(it) => it.syntax(),
            Self::VarDecl(it) => it.syntax(),
        }
    }
}

impl Declaration {
    /// The element type this declaration carries.
    #[must_use]
    pub fn element_type(&self) -> SyntaxKind {
        self.syntax().kind()
    }

    /// Declared names. Only variable declarations may declare more than one.
    #[must_use]
    pub fn names(&self) -> Vec<SmolStr> {
        match self {
            Self::VarDecl(decl) => decl.names(),
            _ => self.name().into_iter().collect(),
        }
    }

    /// The primary declared name.
    #[must_use]
    pub fn name(&self) -> Option<SmolStr> {
        match self {
            Self::VarDecl(decl) => decl.names().into_iter().next(),
            _ => self.syntax().children().find_map(|child| match child.kind() {
                SyntaxKind::Name => Name::cast(child)?.text(),
                SyntaxKind::QualifiedName => QualifiedName::cast(child)?.text(),
                _ => None,
            }),
        }
    }

    /// Declared type: function return type, property type, variable type,
    /// or the right-hand side of a simple `TYPE` alias.
    #[must_use]
    pub fn type_ref(&self) -> Option<SmolStr> {
        child::<TypeRef>(self.syntax()).and_then(|type_ref| type_ref.text())
    }

    /// Base type from an `EXTENDS` clause.
    #[must_use]
    pub fn extends(&self) -> Option<SmolStr> {
        child::<ExtendsClause>(self.syntax()).and_then(|clause| clause.base())
    }

    /// Interfaces from an `IMPLEMENTS` clause.
    #[must_use]
    pub fn implements(&self) -> Vec<SmolStr> {
        child::<ImplementsClause>(self.syntax())
            .map(|clause| clause.interfaces())
            .unwrap_or_default()
    }

    /// Modifiers from the declaration's modifier list.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        child::<ModifierList>(self.syntax())
            .map(|list| list.modifiers())
            .unwrap_or_default()
    }
}
