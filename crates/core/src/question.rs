//! Question module - expression generation and answer checking
//!
//! Expressions are evaluated strictly left to right with no operator
//! precedence: `2 + 3 × 4` is `(2 + 3) × 4 = 20`. Every division result is
//! rounded to two decimals before the next operator applies.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{
    DifficultyProfile, Operator, ANSWER_TOLERANCE, PLACEHOLDER_ANSWER, PLACEHOLDER_EXPRESSION,
};

/// Longest expression any profile may request.
pub const MAX_TERMS: usize = 8;

/// A generated arithmetic question
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    expression: String,
    answer: f64,
}

impl Question {
    pub fn new(expression: impl Into<String>, answer: f64) -> Self {
        Self {
            expression: expression.into(),
            answer,
        }
    }

    /// The fixed question shown while idle.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_EXPRESSION, PLACEHOLDER_ANSWER)
    }

    /// Build a question from already drawn operands and operators.
    ///
    /// `operators.len()` must be `operands.len() - 1`; extra operators are ignored.
    pub fn from_terms(operands: &[u32], operators: &[Operator]) -> Self {
        let mut expression = String::with_capacity(operands.len() * 6);
        for (i, n) in operands.iter().enumerate() {
            if i > 0 {
                expression.push(' ');
                expression.push(operators[i - 1].symbol());
                expression.push(' ');
            }
            expression.push_str(&n.to_string());
        }

        Self {
            expression,
            answer: evaluate(operands, operators),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn answer(&self) -> f64 {
        self.answer
    }

    /// Check raw user input against the answer.
    ///
    /// Unparseable input is NaN and therefore never correct.
    pub fn is_correct(&self, raw: &str) -> bool {
        within_tolerance(parse_answer(raw), self.answer)
    }
}

/// Draw a question for `profile`.
///
/// Operands come from `1..=max_operand` (never zero, so division is always
/// defined); operators are drawn uniformly with replacement.
pub fn generate(profile: &DifficultyProfile, rng: &mut SimpleRng) -> Question {
    let terms = profile.term_count.clamp(2, MAX_TERMS);

    let mut operands: ArrayVec<u32, MAX_TERMS> = ArrayVec::new();
    let mut operators: ArrayVec<Operator, MAX_TERMS> = ArrayVec::new();

    for i in 0..terms {
        operands.push(rng.next_operand(profile.max_operand));
        if i + 1 < terms {
            operators.push(rng.pick(profile.operators));
        }
    }

    Question::from_terms(&operands, &operators)
}

/// Left-to-right evaluation, no precedence.
pub fn evaluate(operands: &[u32], operators: &[Operator]) -> f64 {
    let Some((&first, rest)) = operands.split_first() else {
        return 0.0;
    };

    let mut acc = first as f64;
    for (&n, op) in rest.iter().zip(operators) {
        let n = n as f64;
        acc = match op {
            Operator::Add => acc + n,
            Operator::Subtract => acc - n,
            Operator::Multiply => acc * n,
            Operator::Divide => round_hundredths(acc / n),
        };
    }
    acc
}

/// Round to two decimals, halves away from zero.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse user input as f64; anything unparseable becomes NaN.
pub fn parse_answer(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// `|submitted - expected| < ANSWER_TOLERANCE`. NaN is never within tolerance.
pub fn within_tolerance(submitted: f64, expected: f64) -> bool {
    (submitted - expected).abs() < ANSWER_TOLERANCE
}

/// Display an answer with at most two decimals and no trailing zeros.
///
/// # Examples
///
/// ```
/// use tui_quiz_core::question::format_answer;
///
/// assert_eq!(format_answer(20.0), "20");
/// assert_eq!(format_answer(2.33), "2.33");
/// assert_eq!(format_answer(-4.5), "-4.5");
/// ```
pub fn format_answer(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
