//! Decimal arithmetic on digit chains stored least-significant digit first.

use crate::{
    arena::NodeArena,
    errors::{ChainError, Result},
    handle::Link,
};
use tracing::trace;

impl NodeArena<u8> {
    /// Add two numbers held as digit chains (ones digit at the head) and
    /// build the digit chain of their sum. The inputs are left untouched.
    ///
    /// Fails with [`ChainError::InvalidDigit`] if either chain holds a value
    /// above 9.
    pub fn add_digits(&mut self, a: Link, b: Link) -> Result<Link> {
        let len_a = self.length(a)?;
        let len_b = self.length(b)?;
        if let Some(&d) = self.traverse(a).chain(self.traverse(b)).find(|&&d| d > 9) {
            return Err(ChainError::InvalidDigit(d));
        }

        let mut digits = Vec::with_capacity(len_a.max(len_b) + 1);
        let (mut x, mut y) = (a, b);
        let mut carry = 0u8;
        while x.is_some() || y.is_some() || carry > 0 {
            let dx = x.and_then(|id| self.nodes[id.0].value).unwrap_or(0);
            let dy = y.and_then(|id| self.nodes[id.0].value).unwrap_or(0);
            let sum = dx + dy + carry;
            digits.push(sum % 10);
            carry = sum / 10;
            x = self.step(x);
            y = self.step(y);
        }
        trace!(len_a, len_b, len = digits.len(), "added digit chains");
        Ok(self.build(digits))
    }
}
