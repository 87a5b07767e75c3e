// SPDX-License-Identifier: MPL-2.0
//! Rupee prices.

use std::fmt;

/// Currency symbol prefixed to every price.
pub const CURRENCY_SYMBOL: char = '₹';

/// A whole-rupee amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u32);

impl Price {
    #[must_use]
    pub const fn new(rupees: u32) -> Self {
        Self(rupees)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// The amount with thousands separators and no currency symbol.
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.grouped())
    }
}
