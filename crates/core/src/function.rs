/// A real-valued function of a single real variable.
///
/// Solvers only ever see a function through this trait, so the same Newton or
/// false-position loop can drive a parsed expression, a hand-written closure
/// wrapper, or a test double.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F: Function + ?Sized> Function for &F {
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}
