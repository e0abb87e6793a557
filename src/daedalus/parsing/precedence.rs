//! Binary operator binding powers
//!
//!     Higher binds tighter. All binary operators are left associative, which the climbing
//!     loop gets by parsing the right operand at one above the operator's own power.
//!     Prefix operators bind tighter than any of these.

use crate::daedalus::ast::elements::BinaryOperator;

pub const LOWEST: u8 = 1;

pub fn binding_power(operator: BinaryOperator) -> u8 {
    match operator {
        BinaryOperator::Or => 1,
        BinaryOperator::And => 2,
        BinaryOperator::Equal | BinaryOperator::NotEqual => 3,
        BinaryOperator::Less
        | BinaryOperator::LessEqual
        | BinaryOperator::Greater
        | BinaryOperator::GreaterEqual => 4,
        BinaryOperator::Add | BinaryOperator::Subtract => 5,
        BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 6,
    }
}
