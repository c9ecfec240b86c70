use crate::{
    BinaryOp, Diff, Expr, ExprError, ExprKind, Literal, differentiate, postorder_visit, pow, sym,
    try_binary,
};
use std::collections::HashMap;

#[test]
fn test_sum_of_literals_differentiates_to_zeros() {
    for (a, b) in [(1.0, 2.0), (-3.5, 0.0), (1e6, 7.25)] {
        let e = Expr::number(a) + Expr::number(b);
        for var in ["x", "y", "alpha"] {
            assert_eq!(differentiate(&e, var).to_string(), "0.0 + 0.0");
        }
    }
}

#[test]
fn test_symbol_derivatives() {
    let x = sym("x");
    assert_eq!(differentiate(&x, "x"), Expr::number(1.0));
    assert_eq!(differentiate(&x, "y"), Expr::number(0.0));
    assert_eq!(x.diff("x"), Expr::number(1.0));
}

#[test]
fn test_product_rule_structure() {
    let x = sym("x");
    let e = &x * &x;
    let d = differentiate(&e, "x");
    assert_eq!(d.to_string(), "1.0 * x + 1.0 * x");

    // d0*e1 + d1*e0
    let expected = Expr::number(1.0) * &x + Expr::number(1.0) * &x;
    assert_eq!(d, expected);
}

#[test]
fn test_precedence_rendering() {
    let (x, y, z) = (sym("x"), sym("y"), sym("z"));
    assert_eq!(((&x + &y) * &z).to_string(), "(x + y) * z");
    assert_eq!((&x + &y * &z).to_string(), "x + y * z");
}

#[test]
fn test_shared_subtree_evaluated_once() {
    let shared = sym("x") + sym("x");
    let twice = &shared + &shared;

    let mut calls_per_node: HashMap<u64, usize> = HashMap::new();
    postorder_visit(&twice, |e, _: &[&()]| {
        *calls_per_node.entry(e.id()).or_default() += 1;
    });
    assert_eq!(calls_per_node.len(), 4);
    assert_eq!(calls_per_node.values().sum::<usize>(), 4);
}

#[test]
fn test_shared_subtree_differentiated_once() {
    let x = sym("x");
    let shared = x.clone().pow(2);
    let twice = &shared * &shared;
    let d = differentiate(&twice, "x");

    // Both Mul terms reuse the single derivative of `shared`
    let (left, right) = d.binary_operands().unwrap();
    let (d_left, _) = left.binary_operands().unwrap();
    let (d_right, _) = right.binary_operands().unwrap();
    assert_eq!(d_left.id(), d_right.id());
}

#[test]
fn test_debug_string_identifies_kind_and_arity() {
    let x = sym("x");
    let cases = [
        (&x + 1, "Add"),
        (&x - 1, "Sub"),
        (&x * 1, "Mul"),
        (&x / 1, "Div"),
        (pow(&x, 1), "Pow"),
    ];
    for (e, kind) in cases {
        let debug = e.debug_string();
        assert!(debug.starts_with(&format!("{}(", kind)), "{}", debug);
        assert_eq!(debug, format!("{}(\"x\", 1)", kind));
        assert_eq!(e.operands().len(), 2);
    }
    assert_eq!(Expr::number(0.5).debug_string(), "0.5");
    assert!(Expr::number(0.5).operands().is_empty());
}

#[test]
fn test_quotient_rule_has_no_premature_evaluation() {
    let x = sym("x");
    let e = Expr::number(5.0) / &x;
    let d = differentiate(&e, "x");

    match d.kind() {
        ExprKind::Div(num, den) => {
            assert_eq!(num.to_string(), "0.0 * x - 5.0 * 1.0");
            assert_eq!(**den, x.clone().pow(2));
        }
        _ => panic!("Expected Div variant"),
    }
}

#[test]
fn test_power_rule_assumes_constant_exponent() {
    let x = sym("x");
    let y = sym("y");
    // d/dx x^y with the constant-exponent rule: y * x^(y - 1) * 1.0
    let d = differentiate(&x.clone().pow(&y), "x");
    assert_eq!(d.to_string(), "y * x ^ (y - 1) * 1.0");

    // Exponent depending on x is still treated as constant
    let d = differentiate(&pow(2, &x), "x");
    assert_eq!(d.to_string(), "x * 2 ^ (x - 1) * 0.0");
}

#[test]
fn test_result_can_be_differentiated_again() {
    let x = sym("x");
    let e = x.clone().pow(3) - 4 * &x;
    let d1 = differentiate(&e, "x");
    let d2 = differentiate(&d1, "x");
    assert_eq!(Diff::new().order(2).differentiate(&e, "x").unwrap(), d2);
    assert!(d2.node_count() > d1.node_count());
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        Expr::try_number("1.5"),
        Err(ExprError::InvalidLiteral { found: "string" })
    ));
    assert!(matches!(
        Expr::try_symbol(1.5),
        Err(ExprError::InvalidSymbolName { found: "number" })
    ));
    assert!(matches!(
        try_binary(BinaryOp::Pow, sym("x"), true),
        Err(ExprError::UnsupportedOperandType { op: "^", .. })
    ));
}

#[test]
fn test_dynamic_and_static_construction_agree() {
    let x = sym("x");
    for op in BinaryOp::ALL {
        let from_dyn = try_binary(op, 2, &x).unwrap();
        let from_static = op.build(Expr::number(2), x.clone());
        assert_eq!(from_dyn, from_static);
        assert_eq!(
            from_dyn.binary_operands().unwrap().0.as_number(),
            Some(Literal::Int(2))
        );
    }
}
