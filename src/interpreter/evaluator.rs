use crate::{
    ast::{AstArena, Node, NodeId, NodeKind},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an AST subtree and returns the resulting integer.
///
/// The walk is a pure bottom-up recursion: for a binary node both operands
/// are evaluated unconditionally, left before right, and then combined.
/// All arithmetic is wrapping two's-complement, matching native integer
/// behavior rather than checked overflow.
///
/// Exponentiation is iterative repeated multiplication: the result starts
/// at 1 and is multiplied by the left operand `right` times. A negative
/// right operand therefore runs zero iterations and yields 1; this quirk
/// is part of the observable contract and must not be corrected.
///
/// # Parameters
/// - `arena`: Arena owning the tree.
/// - `id`: Root of the subtree to evaluate.
///
/// # Returns
/// The computed integer value.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] when the right operand of `/` is 0,
///   checked before dividing.
/// - [`RuntimeError::InvalidOperation`] when a binary node is missing a
///   child.
pub fn evaluate(arena: &AstArena, id: NodeId) -> EvalResult<i64> {
    let node = arena.node(id);

    match node.kind {
        NodeKind::IntLiteral => Ok(node.value),
        NodeKind::Add => {
            let (left, right) = eval_operands(arena, node)?;
            Ok(left.wrapping_add(right))
        },
        NodeKind::Sub => {
            let (left, right) = eval_operands(arena, node)?;
            Ok(left.wrapping_sub(right))
        },
        NodeKind::Mul => {
            let (left, right) = eval_operands(arena, node)?;
            Ok(left.wrapping_mul(right))
        },
        NodeKind::Div => {
            let (left, right) = eval_operands(arena, node)?;
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left.wrapping_div(right))
        },
        NodeKind::Pow => {
            let (left, right) = eval_operands(arena, node)?;
            let mut result = 1_i64;
            for _ in 0..right {
                result = result.wrapping_mul(left);
            }
            Ok(result)
        },
    }
}

/// Evaluates both children of a binary node, left first.
///
/// # Parameters
/// - `arena`: Arena owning the tree.
/// - `node`: The binary node whose operands are needed.
///
/// # Returns
/// The `(left, right)` operand values.
///
/// # Errors
/// Returns [`RuntimeError::InvalidOperation`] if either child link is
/// missing, which a correctly parsed tree never exhibits.
fn eval_operands(arena: &AstArena, node: &Node) -> EvalResult<(i64, i64)> {
    let (left_id, right_id) = node.left
                                  .zip(node.right)
                                  .ok_or(RuntimeError::InvalidOperation)?;

    let left = evaluate(arena, left_id)?;
    let right = evaluate(arena, right_id)?;

    Ok((left, right))
}
