//! Binary operator table
//!
//! Precedence and associativity for every binary operator, consulted only by
//! expression parsing. Adding an operator means adding a row to [`OPERATORS`]
//! and a spelling in [`BinaryOperator`].

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::ast::BinaryOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub op: BinaryOperator,
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorInfo {
    const fn new(op: BinaryOperator, precedence: u8, associativity: Associativity) -> Self {
        Self {
            op,
            precedence,
            associativity,
        }
    }

    /// Minimum precedence for the right-hand operand.
    ///
    /// Left-associative operators require a strictly tighter operator on the
    /// right, so `a - b - c` folds as `(a - b) - c`. Right-associative ones
    /// accept the same precedence, so `a ^ b ^ c` nests as `a ^ (b ^ c)`.
    pub fn next_min_precedence(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }
}

/// All binary operators, loosest first.
pub const OPERATORS: &[OperatorInfo] = &[
    OperatorInfo::new(BinaryOperator::Or, 0, Associativity::Left),
    OperatorInfo::new(BinaryOperator::And, 0, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Not, 0, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Eq, 0, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Lt, 1, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Le, 1, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Gt, 1, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Ge, 1, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Add, 6, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Sub, 6, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Mul, 7, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Div, 7, Associativity::Left),
    OperatorInfo::new(BinaryOperator::Pow, 8, Associativity::Right),
];

static BY_SYMBOL: LazyLock<FxHashMap<&'static str, OperatorInfo>> = LazyLock::new(|| {
    OPERATORS
        .iter()
        .map(|info| (info.op.symbol(), *info))
        .collect()
});

/// Look up an operator by its source spelling.
pub fn lookup(symbol: &str) -> Option<OperatorInfo> {
    BY_SYMBOL.get(symbol).copied()
}

/// Table entry for an operator.
pub fn info(op: BinaryOperator) -> Option<OperatorInfo> {
    lookup(op.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_symbol() {
        let pow = lookup("^").unwrap();
        assert_eq!(pow.op, BinaryOperator::Pow);
        assert_eq!(pow.precedence, 8);
        assert_eq!(pow.associativity, Associativity::Right);

        assert_eq!(lookup(">=").unwrap().op, BinaryOperator::Ge);
        assert_eq!(lookup("not").unwrap().precedence, 0);
        assert!(lookup("+=").is_none());
        assert!(lookup("=").is_none());
    }

    #[test]
    fn test_every_operator_has_a_row() {
        for row in OPERATORS {
            assert_eq!(info(row.op), Some(*row));
        }
        assert_eq!(OPERATORS.len(), BY_SYMBOL.len());
    }

    #[test]
    fn test_next_min_precedence() {
        assert_eq!(info(BinaryOperator::Sub).unwrap().next_min_precedence(), 7);
        assert_eq!(info(BinaryOperator::Pow).unwrap().next_min_precedence(), 8);
    }
}
