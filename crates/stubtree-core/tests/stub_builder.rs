//! Stub tree shapes for representative source files.

mod common;
use common::*;

use expect_test::expect;

#[test]
fn test_plant_stub_tree() {
    let output = snapshot_stubs(PLANT);
    expect![[r#"
SourceFile
  Namespace Plant
    TypeDecl MotorState
      EnumValue Idle : MotorState
      EnumValue Running : MotorState
    Interface IDevice
      Method Reset : BOOL
    Class Motor EXTENDS Base IMPLEMENTS IDevice [PUBLIC FINAL]
      VarDecl speed : INT
      Method Start : BOOL [PUBLIC]
  Program Main
    VarDecl m1, m2 : Plant.Motor
"#]]
    .assert_eq(&output);
}

#[test]
fn test_non_stub_node_passes_parent_through() {
    let fixture = r#"
SourceFile
  Class
    Name
      Ident "A"
    ModifierList
      Method
        Name
          Ident "C"
"#;
    let build = DefaultStubBuilder::new().build_stub_tree(&file(fixture));
    assert_eq!(
        parent_kinds(build.tree()),
        vec![
            (SyntaxKind::Class, SyntaxKind::SourceFile),
            (SyntaxKind::Method, SyntaxKind::Class),
        ]
    );

    let skipping = DefaultStubBuilder::new()
        .with_skip_rules(SkipRules::none().with(SyntaxKind::Class, SyntaxKind::ModifierList));
    expect![[r#"
SourceFile
  Class A
"#]]
    .assert_eq(&snapshot_with(&skipping, fixture));
}

#[test]
fn test_temp_variables_are_not_indexed() {
    let fixture = r#"
SourceFile
  Function
    Name
      Ident "Scale"
    Colon ":"
    TypeRef
      Ident "REAL"
    VarBlock
      KwVarInput "VAR_INPUT"
      VarDecl
        Name
          Ident "raw"
        Colon ":"
        TypeRef
          Ident "INT"
      KwEndVar "END_VAR"
    VarBlock
      KwVarTemp "VAR_TEMP"
      VarDecl
        Name
          Ident "tmp"
        Colon ":"
        TypeRef
          Ident "REAL"
      KwEndVar "END_VAR"
"#;
    expect![[r#"
SourceFile
  Function Scale : REAL
    VarDecl raw : INT
"#]]
    .assert_eq(&snapshot_stubs(fixture));
}

#[test]
fn test_declarations_in_skipped_body_are_not_indexed() {
    // A method body carrying a stray declaration, e.g. from error recovery.
    let fixture = r#"
SourceFile
  FunctionBlock
    Name
      Ident "Valve"
    Method
      Name
        Ident "Open"
      StmtList
        VarDecl
          Name
            Ident "stray"
"#;
    expect![[r#"
SourceFile
  FunctionBlock Valve
    Method Open
      VarDecl stray
"#]]
    .assert_eq(&snapshot_stubs(fixture));

    let builder = DefaultStubBuilder::new().with_skip_rules(SkipRules::bodies());
    expect![[r#"
SourceFile
  FunctionBlock Valve
    Method Open
"#]]
    .assert_eq(&snapshot_with(&builder, fixture));
}

#[test]
fn test_skip_applies_only_to_named_parent() {
    let builder = DefaultStubBuilder::new()
        .with_skip_rules(SkipRules::none().with(SyntaxKind::Class, SyntaxKind::Method));
    let build = builder.build_stub_tree(&file(PLANT));
    let methods: Vec<_> = build
        .tree()
        .records()
        .filter(|record| record.kind() == SyntaxKind::Method)
        .map(|record| record.name().cloned())
        .collect();
    assert_eq!(methods, vec![Some("Reset".into())]);
}

#[test]
fn test_stubs_follow_document_order() {
    let build = DefaultStubBuilder::new().build_stub_tree(&file(PLANT));
    let tree = build.tree();
    let ids: Vec<StubId> = tree.preorder(tree.root()).map(|(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    let starts: Vec<_> = tree
        .records()
        .map(|record| record.data().range.start())
        .collect();
    assert!(starts.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_root_stub_covers_file() {
    let root = file(PLANT);
    let build = DefaultStubBuilder::new().build_stub_tree(&root);
    let record = &build.tree()[build.root()];
    assert_eq!(record.kind(), SyntaxKind::SourceFile);
    assert_eq!(record.data().range, root.text_range());
    assert!(record.data().names.is_empty());
}

#[test]
fn test_custom_file_stub() {
    struct Named;

    impl StubBuilder for Named {
        fn create_file_stub(&self, file: &SyntaxNode) -> stubtree_core::StubData {
            stubtree_core::StubData {
                names: vec!["plant.st".into()],
                range: file.text_range(),
                ..stubtree_core::StubData::default()
            }
        }
    }

    let output = snapshot_with(&Named, PLANT);
    assert!(output.starts_with("SourceFile plant.st\n  Namespace Plant\n"));
}
