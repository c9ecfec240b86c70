//! Postorder traversal over the operand graph
//!
//! The traversal uses an explicit stack instead of recursion, so deep
//! expressions do not exhaust the call stack. Results are memoized by node
//! identity: a subexpression shared by several parents is evaluated once and
//! its result is handed to every parent.
//!
//! # Example
//! ```
//! use symexpr::{Expr, visitor::postorder_visit};
//!
//! let x = Expr::symbol("x");
//! let expr = &x * &x + 1;
//!
//! // Number of distinct nodes: x, 1, x * x, x * x + 1
//! let mut calls = 0;
//! postorder_visit(&expr, |_, _: &[&()]| calls += 1);
//! assert_eq!(calls, 4);
//! ```

use crate::Expr;
use rustc_hash::FxHashMap;
use std::convert::Infallible;

/// Visit `root` in postorder, applying `f` to every distinct node.
///
/// `f` receives the node and the results already computed for its operands,
/// in operand order. The result computed for `root` is returned.
///
/// The operand graph must be acyclic; a cycle makes the traversal loop
/// forever. Graphs built through this crate's constructors never have one.
pub fn postorder_visit<R, F>(root: &Expr, mut f: F) -> R
where
    F: FnMut(&Expr, &[&R]) -> R,
{
    match try_postorder_visit(root, |e, o| Ok::<R, Infallible>(f(e, o))) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Like [`postorder_visit`], forwarding `ctx` unchanged to every call of `f`.
pub fn postorder_visit_with<R, C, F>(root: &Expr, ctx: &C, mut f: F) -> R
where
    C: ?Sized,
    F: FnMut(&Expr, &[&R], &C) -> R,
{
    postorder_visit(root, |e, o| f(e, o, ctx))
}

/// Fallible postorder visit; the first error aborts the traversal.
pub fn try_postorder_visit<R, E, F>(root: &Expr, mut f: F) -> Result<R, E>
where
    F: FnMut(&Expr, &[&R]) -> Result<R, E>,
{
    let mut visited: FxHashMap<u64, R> = FxHashMap::default();
    let mut stack: Vec<&Expr> = vec![root];

    while let Some(e) = stack.pop() {
        // A node can sit on the stack more than once when it is shared
        if visited.contains_key(&e.id) {
            continue;
        }

        let operands = e.operands();
        let mut unvisited: Vec<&Expr> = Vec::with_capacity(operands.len());
        for &o in &operands {
            if !visited.contains_key(&o.id) && !unvisited.iter().any(|u| u.id == o.id) {
                unvisited.push(o);
            }
        }

        if !unvisited.is_empty() {
            stack.push(e);
            stack.extend(unvisited);
            continue;
        }

        // Every operand of e has been visited, so we can visit it
        let result = {
            let results: Vec<&R> = operands.iter().map(|o| &visited[&o.id]).collect();
            f(e, &results)?
        };
        visited.insert(e.id, result);
    }

    match visited.remove(&root.id) {
        Some(result) => Ok(result),
        None => unreachable!("root is evaluated before the stack empties"),
    }
}
