/// The evaluator module reduces tokens to a value.
///
/// The evaluator drives the tokenizer, keeps an operand stack and an operator
/// stack, and applies pending operators according to the precedence scheme
/// and the parentheses in the input.
///
/// # Responsibilities
/// - Pushes numbers and pending operators.
/// - Applies operators in left-to-right order unless parentheses intervene.
/// - Reports runtime errors such as division by zero or unbalanced input.
pub mod evaluator;
/// The lexer module classifies raw characters.
///
/// The lexer reads the source text and produces a flat stream of raw lexemes
/// (digit runs, operator characters and parentheses) while skipping
/// whitespace. It does not know whether a `-` is a sign or an operator.
pub mod lexer;
/// The operator module defines the four binary operators and their
/// arithmetic.
pub mod operator;
/// The tokenizer module turns raw lexemes into classified tokens.
///
/// The tokenizer tracks whether an operand or an operator is expected next,
/// which decides whether `+` and `-` are signs or binary operators.
///
/// # Responsibilities
/// - Attaches unary signs to the following number or parenthesis.
/// - Reports the byte span each token consumed.
/// - Reports lexical errors for invalid or malformed input.
pub mod tokenizer;
