//! Declaration accessors over hand-built trees.

mod common;
use common::*;

use expect_test::expect;

#[test]
fn test_object_oriented_declarations() {
    let output = describe(
        r#"
SourceFile
  Namespace
    QualifiedName
      Ident "Lib"
      Dot "."
      Ident "Drives"
    FunctionBlock
      ModifierList
        KwAbstract "ABSTRACT"
        Whitespace " "
        KwInternal "INTERNAL"
      Name
        Ident "Axis"
      ExtendsClause
        KwExtends "EXTENDS"
        QualifiedName
          Ident "Lib"
          Dot "."
          Ident "Base"
      ImplementsClause
        KwImplements "IMPLEMENTS"
        Name
          Ident "IMove"
        Comma ","
        Name
          Ident "IHome"
      Property
        ModifierList
          KwPrivate "PRIVATE"
          KwPublic "PUBLIC"
        Name
          Ident "Position"
        TypeRef
          Ident "LREAL"
        PropertyGet
          StmtList
      Action
        Name
          Ident "Reset"
      Method
        ModifierList
          KwOverride "OVERRIDE"
        Name
          Ident "Home"
"#,
    );
    expect![[r#"
Namespace ["Lib.Drives"]
FunctionBlock ["Axis"] extends=Lib.Base implements=["IMove", "IHome"] modifiers=["INTERNAL", "ABSTRACT"]
Property ["Position"] type=LREAL modifiers=["PRIVATE"]
Action ["Reset"]
Method ["Home"] modifiers=["OVERRIDE"]
"#]]
    .assert_eq(&output);
}

#[test]
fn test_variable_declarations() {
    let fixture = r#"
SourceFile
  Program
    Name
      Ident "Main"
    VarBlock
      KwVarGlobal "VAR_GLOBAL"
      Whitespace " "
      KwConstant "CONSTANT"
      VarDecl
        VarList
          Name
            Ident "a"
          Comma ","
          Whitespace " "
          Name
            Ident "b"
        Colon ":"
        TypeRef
          Ident "ARRAY"
          Whitespace " "
          Ident "OF"
          Whitespace " "
          Ident "INT"
      KwEndVar "END_VAR"
"#;
    expect![[r#"
Program ["Main"]
VarDecl ["a", "b"] type=ARRAY OF INT
"#]]
    .assert_eq(&describe(fixture));

    let root = file(fixture);
    let source = stubtree_syntax::ast::SourceFile::cast(root.clone()).unwrap();
    assert_eq!(source.declarations().count(), 1);
    let block = root
        .descendants()
        .find_map(stubtree_syntax::ast::VarBlock::cast)
        .unwrap();
    assert_eq!(block.section(), Some(SyntaxKind::KwVarGlobal));
    assert!(block.is_constant());
    assert_eq!(block.declarations().count(), 1);
}

#[test]
fn test_fixture_round_trip_preserves_text() {
    let fixture = r#"
SourceFile
  TypeDecl
    KwType "TYPE"
    Whitespace " "
    Name
      Ident "Mode"
    Colon ":"
    EnumDef
      LParen "("
      EnumValue
        Name
          Ident "Auto"
      RParen ")"
    LineComment "// \"quoted\"\n"
"#;
    let root = file(fixture);
    assert_eq!(root.text().to_string(), "TYPE Mode:(Auto)// \"quoted\"\n");
    let rendered = render_fixture(&root);
    assert_eq!(render_fixture(&file(&rendered)), rendered);
    assert_eq!(rendered.trim(), fixture.trim());
}
