/// Operator application and the evaluation stacks.
///
/// Pops two operands, applies an operator and pushes the result back.
pub mod apply;

/// Core evaluation loop and its options.
///
/// Contains the evaluator, which drives the tokenizer and reduces the stacks,
/// and the result type shared by the runtime.
pub mod core;

/// Precedence schemes.
///
/// Decides whether a pending operator is applied before a new one is pushed.
pub mod precedence;
