//! Zhegalkin polynomial (algebraic normal form) derivation
//!
//! The ANF coefficients are computed from the truth table by an in-place
//! binary Möbius (XOR) transform: for each sweep value `s`, entries from
//! the end down to `s` are replaced by the XOR of themselves with their
//! left neighbour. After sweep `s`, the entry at index `s` is the final
//! coefficient for mask `s`; entry 0 is never touched and holds the
//! constant term.

use super::BooleanExpression;

impl BooleanExpression {
    /// Derive the canonical Zhegalkin polynomial of this formula.
    ///
    /// The polynomial is rendered as an XOR (`+`) sum of `&`-monomials
    /// and re-parsed through the normal pipeline, so the result is a
    /// fresh formula that is logically equivalent to `self` under every
    /// assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolcalc::BooleanExpression;
    ///
    /// let formula = BooleanExpression::parse("x1 v x2").unwrap();
    /// assert_eq!(formula.zhegalkin().to_string(), "x2 + x1 + x1 & x2");
    /// ```
    pub fn zhegalkin(&self) -> BooleanExpression {
        let rendered = self.zhegalkin_text();
        BooleanExpression::parse(&rendered).expect("rendered polynomial is a valid formula")
    }

    fn zhegalkin_text(&self) -> String {
        let mut coeffs: Vec<bool> = self.table().bytes().map(|b| b == b'1').collect();

        // Later sweeps only touch indices >= s, so after all sweeps the
        // entry at every index holds its final coefficient.
        for s in 1..coeffs.len() {
            for i in (s..coeffs.len()).rev() {
                coeffs[i] ^= coeffs[i - 1];
            }
        }

        let ids: Vec<u8> = self.workspace.keys().copied().collect();
        let k = ids.len();
        let mut terms: Vec<String> = Vec::new();

        if coeffs[0] {
            terms.push("1".to_string());
        }
        for mask in 1..coeffs.len() {
            if !coeffs[mask] {
                continue;
            }
            // bit (k-1-j) of the mask selects the j-th variable, so the
            // lowest id stays most significant, as in the truth table
            let monomial: Vec<String> = ids
                .iter()
                .enumerate()
                .filter(|&(j, _)| mask >> (k - 1 - j) & 1 == 1)
                .map(|(_, &id)| format!("x{}", id))
                .collect();
            terms.push(monomial.join(" & "));
        }

        if terms.is_empty() {
            return "0".to_string();
        }
        terms.join(" + ")
    }
}
