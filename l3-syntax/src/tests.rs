use expect_test::{expect, Expect};

use crate::*;

fn check(
    term: Term,
    expect: Expect,
) {
    expect.assert_eq(term.pretty_print(0).trim());
}

#[test]
fn let_prints_bindings_inline_and_body_indented() {
    check(
        Term::let_(
            [("x", Term::immediate(0)), ("y", Term::immediate(1))],
            Term::primitive(PrimitiveOperator::Add, Term::reference("x"), Term::reference("y")),
        ),
        expect![[r#"
            (let ((x 0) (y 1))
              (+ x y))"#]],
    );
}

#[test]
fn effects_and_branches_each_get_a_line() {
    check(
        Term::begin(
            [Term::store(Term::reference("cell"), 0, Term::immediate(5))],
            Term::branch(
                BranchOperator::Less,
                Term::load(Term::reference("cell"), 0),
                Term::immediate(10),
                Term::immediate(1),
                Term::immediate(0),
            ),
        ),
        expect![[r#"
            (begin
              (store cell 0 5)
              (if (< (load cell 0) 10)
                1
                0))"#]],
    );
}

#[test]
fn program_with_recursive_function() {
    let program = Program::new(
        ["f"],
        Term::letrec(
            [(
                "loop",
                Term::abstract_(["n"], Term::apply(Term::reference("loop"), [Term::reference("n")])),
            )],
            Term::apply(Term::reference("loop"), [Term::immediate(1)]),
        ),
    );
    expect![[r#"
        (l3 (f)
          (letrec ((loop (\ (n)
              (apply loop n))))
            (apply loop 1)))"#]]
    .assert_eq(program.pretty_print(0).trim());
}

#[test]
fn allocation_is_a_leaf() {
    check(Term::allocate(3), expect![[r#"(allocate 3)"#]]);
}

#[test]
fn identifiers_compare_by_text() {
    assert_eq!(Identifier::from("x"), Identifier::new(String::from("x")));
    assert!(Identifier::from("a") < Identifier::from("b"));
    assert_eq!(format!("{:?}", Identifier::from("x")), "x");
}

#[test]
fn load_program_document() {
    let source = r#"
        parameters = ["x"]

        [body.let]
        bindings = [
            { name = "y", value = { immediate = { value = 1 } } },
        ]
        body = { primitive = { operator = "+", left = { reference = { name = "x" } }, right = { reference = { name = "y" } } } }
    "#;
    let program = Program::from_toml_str(source).expect("document should load");
    assert_eq!(
        program,
        Program::new(
            ["x"],
            Term::let_(
                [("y", Term::immediate(1))],
                Term::primitive(PrimitiveOperator::Add, Term::reference("x"), Term::reference("y")),
            )
        )
    );
}

#[test]
fn load_letrec_and_abstract() {
    let source = r#"
        parameters = []

        [body.letrec]
        bindings = [
            { name = "f", value = { abstract = { parameters = ["n"], body = { apply = { target = { reference = { name = "f" } }, arguments = [{ reference = { name = "n" } }] } } } } },
        ]
        body = { reference = { name = "f" } }
    "#;
    let program = Program::from_toml_str(source).expect("document should load");
    assert_eq!(
        program.body,
        Term::letrec(
            [("f", Term::abstract_(["n"], Term::apply(Term::reference("f"), [Term::reference("n")])))],
            Term::reference("f"),
        )
    );
    assert!(program.parameters.is_empty());
}

#[test]
fn load_rejects_unknown_forms() {
    let source = r#"
        parameters = ["x"]
        body = { lambda = { parameters = ["y"], body = { reference = { name = "y" } } } }
    "#;
    assert!(matches!(Program::from_toml_str(source), Err(SyntaxError::Toml(_))));
}

#[test]
fn load_rejects_unknown_operators() {
    let source = r#"
        parameters = ["x"]
        body = { primitive = { operator = "/", left = { immediate = { value = 1 } }, right = { immediate = { value = 2 } } } }
    "#;
    assert!(Program::from_toml_str(source).is_err());
}
