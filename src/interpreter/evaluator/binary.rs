use crate::ast::Operator;

impl Operator {
    /// Combines two operands.
    ///
    /// Division by zero and out-of-domain powers follow `f64` semantics and
    /// produce infinities or NaN rather than errors.
    ///
    /// # Example
    /// ```
    /// use chaincalc::ast::Operator;
    ///
    /// assert_eq!(Operator::Subtract.apply(7.0, 2.0), 5.0);
    /// assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Power.apply(-8.0, 1.0 / 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Divide => left / right,
            Self::Multiply => left * right,
            Self::Power => left.powf(right),
        }
    }
}
